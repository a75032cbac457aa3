//! Evaluators backing compliance profile items.
//!
//! Most items reuse a comprehensive evaluator; the ones here encode rules
//! specific to a standard (minimum spec versions, creator contact, SHA-256).

use super::{per_component, FeatureScore};
use crate::model::{has_text, HashAlgorithm, Organization, SbomDocument, SbomSpec};
use crate::quality::graph::analyze_document;

/// Dependency relationships, scored by the graph reachability analyzer
pub fn dependency_graph(doc: &SbomDocument) -> FeatureScore {
    analyze_document(doc).to_feature_score()
}

/// Components carrying any globally meaningful identifier
pub fn comp_with_unique_ids(doc: &SbomDocument) -> FeatureScore {
    per_component(doc, "have unique identifiers", |c| c.identifiers.has_any())
}

/// Components identifying who created them (author, supplier or manufacturer)
pub fn comp_with_creator(doc: &SbomDocument) -> FeatureScore {
    per_component(doc, "identify their creator", |c| c.has_creator())
}

pub fn comp_with_sha256(doc: &SbomDocument) -> FeatureScore {
    per_component(doc, "have SHA-256 hashes", |c| {
        c.checksums
            .iter()
            .any(|h| h.has_value() && h.algorithm == HashAlgorithm::Sha256)
    })
}

pub fn comp_with_concluded_licenses(doc: &SbomDocument) -> FeatureScore {
    per_component(doc, "have concluded licenses", |c| c.licenses.has_concluded())
}

pub fn comp_with_source_code_hash(doc: &SbomDocument) -> FeatureScore {
    per_component(doc, "have source code hashes", |c| {
        has_text(c.source_code_hash.as_deref())
    })
}

pub fn comp_with_download_url(doc: &SbomDocument) -> FeatureScore {
    per_component(doc, "have download URLs", |c| {
        has_text(c.download_url.as_deref())
    })
}

pub fn comp_with_copyright(doc: &SbomDocument) -> FeatureScore {
    per_component(doc, "have copyright text", |c| {
        has_text(c.copyright.as_deref())
    })
}

/// SBOM creator reachable by email or URL
pub fn sbom_creator_contact(doc: &SbomDocument) -> FeatureScore {
    let author_contact = doc.authors.iter().any(|a| a.has_contact());
    let org_contact = doc
        .supplier
        .iter()
        .chain(&doc.manufacturer)
        .any(Organization::has_contact);
    FeatureScore::boolean(
        author_contact || org_contact,
        "Creator contact declared",
        "No creator email or URL",
    )
}

/// Authors, or failing that a generating tool, identify who produced the data
pub fn sbom_author_or_tool(doc: &SbomDocument) -> FeatureScore {
    if doc.authors.iter().any(|a| !a.name.trim().is_empty()) {
        return FeatureScore::new(10.0, "Author declared");
    }
    FeatureScore::boolean(
        doc.tools.iter().any(|t| !t.name.trim().is_empty()),
        "Generating tool declared",
        "No author or tool declared",
    )
}

/// BSI TR-03183-2 v1.1: `CycloneDX` 1.4+ or SPDX 2.2.1+
pub fn bsi_v11_spec_version(doc: &SbomDocument) -> FeatureScore {
    minimum_spec_version(doc, (1, 4, 0), (2, 2, 1))
}

/// BSI TR-03183-2 v2.0: `CycloneDX` 1.5+ or SPDX 2.3+
pub fn bsi_v20_spec_version(doc: &SbomDocument) -> FeatureScore {
    minimum_spec_version(doc, (1, 5, 0), (2, 3, 0))
}

type Version = (u32, u32, u32);

fn minimum_spec_version(doc: &SbomDocument, cyclonedx: Version, spdx: Version) -> FeatureScore {
    let minimum = match doc.spec.spec {
        SbomSpec::CycloneDx => cyclonedx,
        SbomSpec::Spdx => spdx,
        SbomSpec::Unknown => return FeatureScore::new(0.0, "Specification not recognized"),
    };
    let Some(raw) = doc.spec.spec_version.as_deref() else {
        return FeatureScore::new(0.0, "No spec version");
    };
    let (major, minor, patch) = minimum;
    match parse_version(raw) {
        Some(v) if v >= minimum => FeatureScore::new(10.0, format!("{} {raw}", doc.spec.spec)),
        Some(_) => FeatureScore::new(
            0.0,
            format!(
                "{} {raw} is below the required {major}.{minor}.{patch}",
                doc.spec.spec
            ),
        ),
        None => FeatureScore::new(0.0, format!("Unparseable spec version {raw}")),
    }
}

/// Parse "1.5", "SPDX-2.3" or "2.2.1" into a comparable triple
fn parse_version(raw: &str) -> Option<Version> {
    let raw = raw.trim();
    let raw = raw.strip_prefix("SPDX-").unwrap_or(raw);
    let mut parts = raw.split('.').map(str::parse::<u32>);
    let major = parts.next()?.ok()?;
    let minor = parts.next().transpose().ok()?.unwrap_or(0);
    let patch = parts.next().transpose().ok()?.unwrap_or(0);
    if parts.next().is_some() {
        return None;
    }
    Some((major, minor, patch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Author, Checksum, Component, SpecMetadata};

    fn spec_doc(spec: SbomSpec, version: &str) -> SbomDocument {
        SbomDocument::new(SpecMetadata {
            spec,
            spec_version: Some(version.to_string()),
            ..SpecMetadata::default()
        })
    }

    #[test]
    fn test_parse_version() {
        assert_eq!(parse_version("1.5"), Some((1, 5, 0)));
        assert_eq!(parse_version("SPDX-2.2.1"), Some((2, 2, 1)));
        assert_eq!(parse_version("2"), Some((2, 0, 0)));
        assert_eq!(parse_version("x.1"), None);
        assert_eq!(parse_version("1.2.3.4"), None);
    }

    #[test]
    fn test_bsi_spec_versions() {
        let cdx14 = spec_doc(SbomSpec::CycloneDx, "1.4");
        assert_eq!(bsi_v11_spec_version(&cdx14).score, 10.0);
        assert_eq!(bsi_v20_spec_version(&cdx14).score, 0.0);

        let spdx22 = spec_doc(SbomSpec::Spdx, "SPDX-2.2");
        assert_eq!(bsi_v11_spec_version(&spdx22).score, 0.0);
        let spdx23 = spec_doc(SbomSpec::Spdx, "SPDX-2.3");
        assert_eq!(bsi_v20_spec_version(&spdx23).score, 10.0);
    }

    #[test]
    fn test_sha256_requires_exact_algorithm() {
        let mut comp = Component::new("a", "a");
        comp.checksums
            .push(Checksum::new(HashAlgorithm::Sha512, "abc"));
        let mut doc = SbomDocument {
            components: vec![comp],
            ..SbomDocument::default()
        };
        assert_eq!(comp_with_sha256(&doc).score, 0.0);

        doc.components[0]
            .checksums
            .push(Checksum::new(HashAlgorithm::Sha256, "def"));
        assert_eq!(comp_with_sha256(&doc).score, 10.0);
    }

    #[test]
    fn test_creator_contact() {
        let mut doc = SbomDocument::default();
        doc.authors.push(Author::person("Jane"));
        assert_eq!(sbom_creator_contact(&doc).score, 0.0);
        assert_eq!(sbom_author_or_tool(&doc).score, 10.0);

        doc.authors[0].email = Some("jane@example.com".to_string());
        assert_eq!(sbom_creator_contact(&doc).score, 10.0);
    }
}
