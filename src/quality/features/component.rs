//! Per-component feature evaluators.

use std::collections::HashSet;

use super::{per_component, per_eligible_component, FeatureScore};
use crate::model::{Component, SbomDocument};

// ============================================================================
// Identification
// ============================================================================

pub fn comp_with_name(doc: &SbomDocument) -> FeatureScore {
    per_component(doc, "have names", Component::has_name)
}

pub fn comp_with_version(doc: &SbomDocument) -> FeatureScore {
    per_component(doc, "have versions", Component::has_version)
}

pub fn comp_with_local_id(doc: &SbomDocument) -> FeatureScore {
    per_component(doc, "have document-local ids", |c| !c.id.trim().is_empty())
}

// ============================================================================
// Integrity
// ============================================================================

pub fn comp_with_checksums(doc: &SbomDocument) -> FeatureScore {
    per_component(doc, "have checksums", Component::has_checksum)
}

pub fn comp_with_strong_checksums(doc: &SbomDocument) -> FeatureScore {
    per_component(
        doc,
        "have SHA-256 or stronger checksums",
        Component::has_strong_checksum,
    )
}

// ============================================================================
// Completeness
// ============================================================================

/// Components that appear as the source of a dependency declaration.
///
/// An explicit empty declaration counts: it states "no dependencies".
pub fn comp_with_dependencies(doc: &SbomDocument) -> FeatureScore {
    let sources: HashSet<&str> = doc.dependencies.iter().map(|d| d.source.as_str()).collect();
    per_component(doc, "declare their dependencies", |c| {
        sources.contains(c.id.as_str())
    })
}

pub fn comp_with_source_code(doc: &SbomDocument) -> FeatureScore {
    per_component(doc, "reference source code", |c| {
        crate::model::has_text(c.source_code_url.as_deref())
    })
}

pub fn comp_with_supplier(doc: &SbomDocument) -> FeatureScore {
    per_component(doc, "have suppliers", Component::has_supplier)
}

pub fn comp_with_purpose(doc: &SbomDocument) -> FeatureScore {
    per_component(doc, "declare a purpose", |c| c.component_type.is_some())
}

// ============================================================================
// Licensing
// ============================================================================

pub fn comp_with_licenses(doc: &SbomDocument) -> FeatureScore {
    per_component(doc, "have licenses", |c| c.licenses.has_any())
}

pub fn comp_with_valid_licenses(doc: &SbomDocument) -> FeatureScore {
    per_component(doc, "have valid SPDX license expressions", |c| {
        c.licenses.all_valid()
    })
}

pub fn comp_with_declared_licenses(doc: &SbomDocument) -> FeatureScore {
    per_component(doc, "have declared licenses", |c| c.licenses.has_declared())
}

pub fn comp_no_deprecated_licenses(doc: &SbomDocument) -> FeatureScore {
    per_eligible_component(
        doc,
        "licensed components avoid deprecated license ids",
        |c| c.licenses.has_any(),
        |c| !c.licenses.any_deprecated(),
    )
}

pub fn comp_no_restrictive_licenses(doc: &SbomDocument) -> FeatureScore {
    per_eligible_component(
        doc,
        "licensed components avoid restrictive licenses",
        |c| c.licenses.has_any(),
        |c| !c.licenses.any_restrictive(),
    )
}

// ============================================================================
// Vulnerability & traceability
// ============================================================================

pub fn comp_with_purl(doc: &SbomDocument) -> FeatureScore {
    per_component(doc, "have PURLs", |c| c.identifiers.has_purl())
}

pub fn comp_with_cpe(doc: &SbomDocument) -> FeatureScore {
    per_component(doc, "have CPEs", |c| c.identifiers.has_cpe())
}

// ============================================================================
// Component quality (informational)
// ============================================================================

pub fn comp_valid_purl(doc: &SbomDocument) -> FeatureScore {
    per_eligible_component(
        doc,
        "components with PURLs have valid PURLs",
        |c| c.identifiers.has_purl(),
        |c| c.identifiers.has_valid_purls(),
    )
}

pub fn comp_valid_cpe(doc: &SbomDocument) -> FeatureScore {
    per_eligible_component(
        doc,
        "components with CPEs have valid CPEs",
        |c| c.identifiers.has_cpe(),
        |c| c.identifiers.has_valid_cpes(),
    )
}

pub fn comp_no_critical_vulns(doc: &SbomDocument) -> FeatureScore {
    per_component(doc, "have no critical vulnerabilities", |c| {
        !doc
            .vulnerabilities
            .iter()
            .any(|v| v.is_critical() && v.affects_component(&c.id))
    })
}
