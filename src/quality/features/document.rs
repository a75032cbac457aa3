//! Document-level feature evaluators.

use super::FeatureScore;
use crate::model::{has_text, Organization, SbomDocument, SbomSpec};

/// Data license SPDX requires for the document itself
const SPDX_DATA_LICENSE: &str = "CC0-1.0";

// ============================================================================
// Provenance
// ============================================================================

pub fn sbom_creation_timestamp(doc: &SbomDocument) -> FeatureScore {
    match doc.spec.created {
        Some(created) => FeatureScore::new(10.0, format!("Created {}", created.to_rfc3339())),
        None => FeatureScore::new(0.0, "No creation timestamp"),
    }
}

pub fn sbom_authors(doc: &SbomDocument) -> FeatureScore {
    let count = doc
        .authors
        .iter()
        .filter(|a| !a.name.trim().is_empty())
        .count();
    FeatureScore::boolean(
        count > 0,
        &format!("{count} author(s) declared"),
        "No authors declared",
    )
}

/// Full marks for a named tool with a version, half for a name alone.
pub fn sbom_tool_version(doc: &SbomDocument) -> FeatureScore {
    let named: Vec<_> = doc
        .tools
        .iter()
        .filter(|t| !t.name.trim().is_empty())
        .collect();
    if named.is_empty() {
        return FeatureScore::new(0.0, "No generating tool declared");
    }
    match named.iter().find(|t| has_text(t.version.as_deref())) {
        Some(tool) => FeatureScore::new(
            10.0,
            format!(
                "{} {}",
                tool.name,
                tool.version.as_deref().unwrap_or_default()
            ),
        ),
        None => FeatureScore::new(5.0, format!("{} (no version)", named[0].name)),
    }
}

pub fn sbom_supplier(doc: &SbomDocument) -> FeatureScore {
    FeatureScore::boolean(
        doc.supplier.as_ref().is_some_and(Organization::is_present),
        "Document supplier declared",
        "No document supplier",
    )
}

pub fn sbom_namespace(doc: &SbomDocument) -> FeatureScore {
    match doc.spec.namespace.as_deref().filter(|n| !n.trim().is_empty()) {
        Some(ns) => FeatureScore::new(10.0, ns.to_string()),
        None => FeatureScore::new(0.0, "No namespace or serial number"),
    }
}

pub fn sbom_lifecycle(doc: &SbomDocument) -> FeatureScore {
    if doc.lifecycles.is_empty() {
        return FeatureScore::new(0.0, "No lifecycle phase declared");
    }
    FeatureScore::new(10.0, doc.lifecycles.join(", "))
}

// ============================================================================
// Integrity
// ============================================================================

/// Full marks for a complete signature, half for one missing key material.
pub fn sbom_signature(doc: &SbomDocument) -> FeatureScore {
    match &doc.signature {
        Some(sig) if sig.is_complete() => {
            FeatureScore::new(10.0, format!("Signed ({})", sig.algorithm))
        }
        Some(_) => FeatureScore::new(5.0, "Signature present but incomplete"),
        None => FeatureScore::new(0.0, "Document is not signed"),
    }
}

// ============================================================================
// Completeness
// ============================================================================

pub fn sbom_completeness_declared(doc: &SbomDocument) -> FeatureScore {
    match doc.compositions.iter().find(|c| c.aggregate.is_declared()) {
        Some(comp) => FeatureScore::new(10.0, format!("Completeness: {}", comp.aggregate)),
        None => FeatureScore::new(0.0, "No completeness declaration"),
    }
}

pub fn sbom_primary_component(doc: &SbomDocument) -> FeatureScore {
    match doc.primary_component() {
        Some(primary) => FeatureScore::new(10.0, primary.display_name()),
        None if doc.primary_component_id.is_some() => {
            FeatureScore::new(0.0, "Primary component id does not match any component")
        }
        None => FeatureScore::new(0.0, "No primary component"),
    }
}

// ============================================================================
// Licensing
// ============================================================================

/// SPDX documents must carry CC0-1.0; `CycloneDX` has no such field.
pub fn sbom_data_license(doc: &SbomDocument) -> FeatureScore {
    match doc.spec.spec {
        SbomSpec::Spdx => match doc.spec.data_license.as_deref().map(str::trim) {
            Some(SPDX_DATA_LICENSE) => FeatureScore::new(10.0, SPDX_DATA_LICENSE),
            Some(other) if !other.is_empty() => {
                FeatureScore::new(0.0, format!("Unexpected data license {other}"))
            }
            _ => FeatureScore::new(0.0, "No data license"),
        },
        SbomSpec::CycloneDx => FeatureScore::not_applicable("N/A (CycloneDX has no data license)"),
        SbomSpec::Unknown => FeatureScore::not_applicable("N/A (unknown spec)"),
    }
}

// ============================================================================
// Structural
// ============================================================================

pub fn sbom_spec_declared(doc: &SbomDocument) -> FeatureScore {
    FeatureScore::boolean(
        doc.spec.spec != SbomSpec::Unknown,
        &doc.spec.spec.to_string(),
        "Specification not recognized",
    )
}

/// Full marks for a supported version, half for any other declared version.
pub fn sbom_spec_version(doc: &SbomDocument) -> FeatureScore {
    if doc.spec.spec == SbomSpec::Unknown {
        return FeatureScore::not_applicable("N/A (unknown spec)");
    }
    let version = doc
        .spec
        .spec_version
        .as_deref()
        .filter(|v| !v.trim().is_empty());
    match version {
        Some(v) if doc.spec.has_supported_version() => {
            FeatureScore::new(10.0, format!("{} {v}", doc.spec.spec))
        }
        Some(v) => FeatureScore::new(
            5.0,
            format!("{} {v} is not a supported version", doc.spec.spec),
        ),
        None => FeatureScore::new(0.0, "No spec version"),
    }
}

pub fn sbom_file_format(doc: &SbomDocument) -> FeatureScore {
    match &doc.spec.file_format {
        Some(format) if format.is_machine_readable() => FeatureScore::new(10.0, format.to_string()),
        Some(format) => FeatureScore::new(0.0, format!("{format} is not machine readable")),
        None => FeatureScore::new(0.0, "File format unknown"),
    }
}

pub fn sbom_schema_valid(doc: &SbomDocument) -> FeatureScore {
    FeatureScore::boolean(
        doc.spec.schema_valid,
        "Schema valid",
        "Schema validation failed or not performed",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Component, FileFormat, Signature, SpecMetadata, Tool};

    fn spdx(version: &str) -> SbomDocument {
        SbomDocument::new(SpecMetadata {
            spec: SbomSpec::Spdx,
            spec_version: Some(version.to_string()),
            ..SpecMetadata::default()
        })
    }

    #[test]
    fn test_tool_version_partial() {
        let mut doc = SbomDocument::default();
        assert_eq!(sbom_tool_version(&doc).score, 0.0);

        doc.tools.push(Tool {
            name: "syft".to_string(),
            version: None,
        });
        assert_eq!(sbom_tool_version(&doc).score, 5.0);

        doc.tools[0].version = Some("1.4.0".to_string());
        let result = sbom_tool_version(&doc);
        assert_eq!(result.score, 10.0);
        assert_eq!(result.desc, "syft 1.4.0");
    }

    #[test]
    fn test_data_license_by_spec() {
        let mut doc = spdx("SPDX-2.3");
        assert_eq!(sbom_data_license(&doc).score, 0.0);
        doc.spec.data_license = Some("CC0-1.0".to_string());
        assert_eq!(sbom_data_license(&doc).score, 10.0);

        doc.spec.spec = SbomSpec::CycloneDx;
        assert!(sbom_data_license(&doc).ignore);
    }

    #[test]
    fn test_spec_version() {
        assert_eq!(sbom_spec_version(&spdx("SPDX-2.3")).score, 10.0);
        assert_eq!(sbom_spec_version(&spdx("2.1")).score, 5.0);
        assert!(sbom_spec_version(&SbomDocument::default()).ignore);
    }

    #[test]
    fn test_signature_levels() {
        let mut doc = SbomDocument::default();
        assert_eq!(sbom_signature(&doc).score, 0.0);

        doc.signature = Some(Signature {
            algorithm: "ES256".to_string(),
            value: "MEUCIQ".to_string(),
            ..Signature::default()
        });
        assert_eq!(sbom_signature(&doc).score, 5.0);

        if let Some(sig) = doc.signature.as_mut() {
            sig.public_key = Some("-----BEGIN PUBLIC KEY-----".to_string());
        }
        assert_eq!(sbom_signature(&doc).score, 10.0);
    }

    #[test]
    fn test_primary_component_and_format() {
        let mut doc = SbomDocument::default();
        doc.primary_component_id = Some("app".to_string());
        assert!(sbom_primary_component(&doc).desc.contains("does not match"));

        doc.components.push(Component::new("app", "app").with_version("2.0"));
        assert_eq!(sbom_primary_component(&doc).desc, "app@2.0");

        doc.spec.file_format = Some(FileFormat::Other("pdf".to_string()));
        assert_eq!(sbom_file_format(&doc).score, 0.0);
        doc.spec.file_format = Some(FileFormat::Json);
        assert_eq!(sbom_file_format(&doc).score, 10.0);
    }
}
