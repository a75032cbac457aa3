//! Catalog of features, categories and profiles.
//!
//! The catalog binds string keys to evaluator functions and groups them into
//! weighted categories and compliance profiles. It is built once through
//! [`CatalogBuilder`] and is immutable afterwards, so a single instance can
//! be shared by reference across threads evaluating different documents.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Serialize;

use super::features::{self, FeatureScore};
use crate::model::SbomDocument;

/// Evaluator bound to a feature or profile item
pub type EvaluateFn = fn(&SbomDocument) -> FeatureScore;

/// Atomic scoreable check contributing to a category
#[derive(Debug, Clone, Serialize)]
pub struct FeatureSpec {
    pub key: String,
    pub name: String,
    /// Weight relative to sibling features of the same category
    pub weight: f64,
    #[serde(skip)]
    pub evaluate: EvaluateFn,
}

/// Weighted group of features
#[derive(Debug, Clone, Serialize)]
pub struct CategorySpec {
    pub key: String,
    pub name: String,
    /// Weight relative to sibling categories
    pub weight: f64,
    /// Excluded from the overall score regardless of its weight
    pub informational: bool,
    /// Feature keys in evaluation order
    pub features: Vec<String>,
}

impl CategorySpec {
    /// Whether this category is reported but never counted in the overall score
    #[must_use]
    pub fn is_informational(&self) -> bool {
        self.informational || self.weight == 0.0
    }
}

/// Named set of checks mirroring an external compliance standard
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSpec {
    pub key: String,
    pub name: String,
    pub description: String,
    /// Profile feature keys in evaluation order
    pub features: Vec<String>,
}

/// Required or optional check inside a profile
#[derive(Debug, Clone, Serialize)]
pub struct ProfileFeatureSpec {
    pub key: String,
    pub name: String,
    pub required: bool,
    pub description: String,
    #[serde(skip)]
    pub evaluate: EvaluateFn,
}

/// Immutable registry of every known feature, category and profile
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    features: IndexMap<String, FeatureSpec>,
    categories: IndexMap<String, CategorySpec>,
    profiles: IndexMap<String, ProfileSpec>,
    profile_features: IndexMap<String, ProfileFeatureSpec>,
    feature_aliases: HashMap<String, String>,
    category_aliases: HashMap<String, String>,
    profile_aliases: HashMap<String, String>,
}

impl Catalog {
    /// Start building a catalog
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// The built-in catalog: eight categories and the NTIA, BSI and FSCT profiles
    #[must_use]
    pub fn standard() -> Self {
        standard_builder().build()
    }

    /// Reopen this catalog for extension (e.g., with custom profiles)
    #[must_use]
    pub fn to_builder(&self) -> CatalogBuilder {
        CatalogBuilder {
            catalog: self.clone(),
        }
    }

    // ========================================================================
    // Existence checks
    // ========================================================================

    #[must_use]
    pub fn has_feature(&self, key: &str) -> bool {
        self.features.contains_key(key)
    }

    #[must_use]
    pub fn has_category(&self, key: &str) -> bool {
        self.categories.contains_key(key)
    }

    #[must_use]
    pub fn has_profile(&self, key: &str) -> bool {
        self.profiles.contains_key(key)
    }

    #[must_use]
    pub fn has_profile_feature(&self, key: &str) -> bool {
        self.profile_features.contains_key(key)
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    #[must_use]
    pub fn feature(&self, key: &str) -> Option<&FeatureSpec> {
        self.features.get(key)
    }

    #[must_use]
    pub fn category(&self, key: &str) -> Option<&CategorySpec> {
        self.categories.get(key)
    }

    #[must_use]
    pub fn profile(&self, key: &str) -> Option<&ProfileSpec> {
        self.profiles.get(key)
    }

    #[must_use]
    pub fn profile_feature(&self, key: &str) -> Option<&ProfileFeatureSpec> {
        self.profile_features.get(key)
    }

    /// Categories in registration order
    pub fn categories(&self) -> impl Iterator<Item = &CategorySpec> {
        self.categories.values()
    }

    /// Features in registration order
    pub fn features(&self) -> impl Iterator<Item = &FeatureSpec> {
        self.features.values()
    }

    /// Profiles in registration order
    pub fn profiles(&self) -> impl Iterator<Item = &ProfileSpec> {
        self.profiles.values()
    }

    /// Category keys in registration order
    #[must_use]
    pub fn category_keys(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    // ========================================================================
    // Alias resolution
    // ========================================================================

    /// Resolve user input to a canonical feature key
    #[must_use]
    pub fn resolve_feature_alias(&self, input: &str) -> Option<&str> {
        resolve(input, &self.features, &self.feature_aliases)
    }

    /// Resolve user input to a canonical category key
    #[must_use]
    pub fn resolve_category_alias(&self, input: &str) -> Option<&str> {
        resolve(input, &self.categories, &self.category_aliases)
    }

    /// Resolve user input to a canonical profile key
    #[must_use]
    pub fn resolve_profile_alias(&self, input: &str) -> Option<&str> {
        resolve(input, &self.profiles, &self.profile_aliases)
    }
}

/// Case-fold and trim, then match a canonical key or an alias.
///
/// An alias pointing at an unregistered key does not resolve.
fn resolve<'a, V>(
    input: &str,
    keys: &'a IndexMap<String, V>,
    aliases: &HashMap<String, String>,
) -> Option<&'a str> {
    let normalized = input.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }
    let target = aliases.get(&normalized).unwrap_or(&normalized);
    keys.get_key_value(target.as_str()).map(|(k, _)| k.as_str())
}

/// Builder for [`Catalog`]
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    catalog: Catalog,
}

impl CatalogBuilder {
    /// Register a feature
    #[must_use]
    pub fn feature(mut self, key: &str, name: &str, weight: f64, evaluate: EvaluateFn) -> Self {
        self.catalog.features.insert(
            key.to_string(),
            FeatureSpec {
                key: key.to_string(),
                name: name.to_string(),
                weight,
                evaluate,
            },
        );
        self
    }

    /// Register a category over already-declared feature keys
    #[must_use]
    pub fn category(mut self, key: &str, name: &str, weight: f64, features: &[&str]) -> Self {
        self.insert_category(key, name, weight, false, features);
        self
    }

    /// Register a category that is reported but excluded from the overall score
    #[must_use]
    pub fn informational_category(mut self, key: &str, name: &str, features: &[&str]) -> Self {
        self.insert_category(key, name, 0.0, true, features);
        self
    }

    fn insert_category(
        &mut self,
        key: &str,
        name: &str,
        weight: f64,
        informational: bool,
        features: &[&str],
    ) {
        self.catalog.categories.insert(
            key.to_string(),
            CategorySpec {
                key: key.to_string(),
                name: name.to_string(),
                weight,
                informational,
                features: features.iter().map(ToString::to_string).collect(),
            },
        );
    }

    /// Register a profile item
    #[must_use]
    pub fn profile_feature(
        mut self,
        key: &str,
        name: &str,
        required: bool,
        evaluate: EvaluateFn,
    ) -> Self {
        self.insert_profile_feature(ProfileFeatureSpec {
            key: key.to_string(),
            name: name.to_string(),
            required,
            description: String::new(),
            evaluate,
        });
        self
    }

    pub(crate) fn insert_profile_feature(&mut self, spec: ProfileFeatureSpec) {
        self.catalog.profile_features.insert(spec.key.clone(), spec);
    }

    /// Register a profile over profile feature keys
    #[must_use]
    pub fn profile(mut self, key: &str, name: &str, description: &str, features: &[&str]) -> Self {
        self.insert_profile(ProfileSpec {
            key: key.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            features: features.iter().map(ToString::to_string).collect(),
        });
        self
    }

    pub(crate) fn insert_profile(&mut self, spec: ProfileSpec) {
        self.catalog.profiles.insert(spec.key.clone(), spec);
    }

    /// Add feature aliases (stored lower-cased)
    #[must_use]
    pub fn feature_aliases(mut self, key: &str, aliases: &[&str]) -> Self {
        add_aliases(&mut self.catalog.feature_aliases, key, aliases);
        self
    }

    /// Add category aliases (stored lower-cased)
    #[must_use]
    pub fn category_aliases(mut self, key: &str, aliases: &[&str]) -> Self {
        add_aliases(&mut self.catalog.category_aliases, key, aliases);
        self
    }

    /// Add profile aliases (stored lower-cased)
    #[must_use]
    pub fn profile_aliases(mut self, key: &str, aliases: &[&str]) -> Self {
        add_aliases(&mut self.catalog.profile_aliases, key, aliases);
        self
    }

    pub(crate) fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> Catalog {
        self.catalog
    }
}

fn add_aliases(table: &mut HashMap<String, String>, key: &str, aliases: &[&str]) {
    for alias in aliases {
        table.insert(alias.trim().to_lowercase(), key.to_string());
    }
}

// ============================================================================
// Standard catalog
// ============================================================================

const IDENTIFICATION: &[(&str, &str, f64, EvaluateFn)] = &[
    ("comp_with_name", "Components with names", 0.40, features::comp_with_name),
    ("comp_with_version", "Components with versions", 0.35, features::comp_with_version),
    ("comp_with_local_id", "Components with local ids", 0.25, features::comp_with_local_id),
];

const PROVENANCE: &[(&str, &str, f64, EvaluateFn)] = &[
    ("sbom_creation_timestamp", "Creation timestamp", 0.20, features::sbom_creation_timestamp),
    ("sbom_authors", "Authors", 0.20, features::sbom_authors),
    ("sbom_tool_version", "Tool with version", 0.20, features::sbom_tool_version),
    ("sbom_supplier", "Document supplier", 0.15, features::sbom_supplier),
    ("sbom_namespace", "Namespace / serial number", 0.15, features::sbom_namespace),
    ("sbom_lifecycle", "Lifecycle phase", 0.10, features::sbom_lifecycle),
];

const INTEGRITY: &[(&str, &str, f64, EvaluateFn)] = &[
    ("comp_with_checksums", "Components with checksums", 0.30, features::comp_with_checksums),
    (
        "comp_with_strong_checksums",
        "Components with strong checksums",
        0.40,
        features::comp_with_strong_checksums,
    ),
    ("sbom_signature", "Document signature", 0.30, features::sbom_signature),
];

const COMPLETENESS: &[(&str, &str, f64, EvaluateFn)] = &[
    (
        "comp_with_dependencies",
        "Components with dependencies",
        0.25,
        features::comp_with_dependencies,
    ),
    (
        "sbom_completeness_declared",
        "Completeness declared",
        0.15,
        features::sbom_completeness_declared,
    ),
    ("sbom_primary_component", "Primary component", 0.20, features::sbom_primary_component),
    ("comp_with_source_code", "Components with source code", 0.15, features::comp_with_source_code),
    ("comp_with_supplier", "Components with suppliers", 0.15, features::comp_with_supplier),
    ("comp_with_purpose", "Components with purpose", 0.10, features::comp_with_purpose),
];

const LICENSING: &[(&str, &str, f64, EvaluateFn)] = &[
    ("comp_with_licenses", "Components with licenses", 0.20, features::comp_with_licenses),
    (
        "comp_with_valid_licenses",
        "Components with valid licenses",
        0.20,
        features::comp_with_valid_licenses,
    ),
    (
        "comp_with_declared_licenses",
        "Components with declared licenses",
        0.15,
        features::comp_with_declared_licenses,
    ),
    ("sbom_data_license", "Document data license", 0.10, features::sbom_data_license),
    (
        "comp_no_deprecated_licenses",
        "No deprecated licenses",
        0.15,
        features::comp_no_deprecated_licenses,
    ),
    (
        "comp_no_restrictive_licenses",
        "No restrictive licenses",
        0.20,
        features::comp_no_restrictive_licenses,
    ),
];

const VULNERABILITY: &[(&str, &str, f64, EvaluateFn)] = &[
    ("comp_with_purl", "Components with PURLs", 0.50, features::comp_with_purl),
    ("comp_with_cpe", "Components with CPEs", 0.50, features::comp_with_cpe),
];

const STRUCTURAL: &[(&str, &str, f64, EvaluateFn)] = &[
    ("sbom_spec_declared", "Spec declared", 0.30, features::sbom_spec_declared),
    ("sbom_spec_version", "Spec version", 0.30, features::sbom_spec_version),
    ("sbom_file_format", "Machine-readable format", 0.20, features::sbom_file_format),
    ("sbom_schema_valid", "Schema valid", 0.20, features::sbom_schema_valid),
];

const COMPONENT_INFO: &[(&str, &str, f64, EvaluateFn)] = &[
    ("comp_valid_purl", "Valid PURLs", 1.0, features::comp_valid_purl),
    ("comp_valid_cpe", "Valid CPEs", 1.0, features::comp_valid_cpe),
    (
        "comp_no_critical_vulns",
        "No critical vulnerabilities",
        1.0,
        features::comp_no_critical_vulns,
    ),
];

const NTIA: &[(&str, &str, bool, EvaluateFn)] = &[
    ("ntia_comp_supplier", "Supplier name", true, features::comp_with_supplier),
    ("ntia_comp_name", "Component name", true, features::comp_with_name),
    ("ntia_comp_version", "Component version", true, features::comp_with_version),
    ("ntia_comp_other_ids", "Other unique identifiers", true, features::comp_with_unique_ids),
    ("ntia_dependencies", "Dependency relationships", true, features::dependency_graph),
    ("ntia_sbom_author", "Author of SBOM data", true, features::sbom_author_or_tool),
    ("ntia_sbom_timestamp", "Timestamp", true, features::sbom_creation_timestamp),
    ("ntia_comp_checksums", "Component hash", false, features::comp_with_checksums),
    ("ntia_comp_licenses", "Component license", false, features::comp_with_licenses),
];

const BSI_V11: &[(&str, &str, bool, EvaluateFn)] = &[
    ("bsi_v1.1_sbom_spec", "SBOM format", true, features::sbom_spec_declared),
    ("bsi_v1.1_sbom_spec_version", "SBOM format version", true, features::bsi_v11_spec_version),
    ("bsi_v1.1_sbom_creator", "Creator of the SBOM", true, features::sbom_creator_contact),
    ("bsi_v1.1_sbom_timestamp", "Timestamp", true, features::sbom_creation_timestamp),
    ("bsi_v1.1_sbom_uri", "SBOM URI", true, features::sbom_namespace),
    ("bsi_v1.1_comp_creator", "Component creator", true, features::comp_with_creator),
    ("bsi_v1.1_comp_name", "Component name", true, features::comp_with_name),
    ("bsi_v1.1_comp_version", "Component version", true, features::comp_with_version),
    (
        "bsi_v1.1_comp_dependencies",
        "Dependencies on other components",
        true,
        features::dependency_graph,
    ),
    ("bsi_v1.1_comp_license", "License", true, features::comp_with_licenses),
    (
        "bsi_v1.1_comp_hash",
        "Hash value of the executable component",
        true,
        features::comp_with_sha256,
    ),
    ("bsi_v1.1_comp_source_code_url", "Source code URI", false, features::comp_with_source_code),
    ("bsi_v1.1_comp_other_ids", "Other unique identifiers", false, features::comp_with_unique_ids),
];

const BSI_V20: &[(&str, &str, bool, EvaluateFn)] = &[
    ("bsi_v2.0_sbom_spec", "SBOM format", true, features::sbom_spec_declared),
    ("bsi_v2.0_sbom_spec_version", "SBOM format version", true, features::bsi_v20_spec_version),
    ("bsi_v2.0_sbom_creator", "Creator of the SBOM", true, features::sbom_creator_contact),
    ("bsi_v2.0_sbom_timestamp", "Timestamp", true, features::sbom_creation_timestamp),
    ("bsi_v2.0_sbom_uri", "SBOM URI", true, features::sbom_namespace),
    ("bsi_v2.0_sbom_signature", "SBOM signature", false, features::sbom_signature),
    ("bsi_v2.0_comp_creator", "Component creator", true, features::comp_with_creator),
    ("bsi_v2.0_comp_name", "Component name", true, features::comp_with_name),
    ("bsi_v2.0_comp_version", "Component version", true, features::comp_with_version),
    (
        "bsi_v2.0_comp_dependencies",
        "Dependencies on other components",
        true,
        features::dependency_graph,
    ),
    ("bsi_v2.0_comp_license", "License", true, features::comp_with_licenses),
    (
        "bsi_v2.0_comp_declared_license",
        "Declared license",
        true,
        features::comp_with_declared_licenses,
    ),
    (
        "bsi_v2.0_comp_concluded_license",
        "Concluded license",
        false,
        features::comp_with_concluded_licenses,
    ),
    (
        "bsi_v2.0_comp_hash",
        "Hash value of the executable component",
        true,
        features::comp_with_sha256,
    ),
    ("bsi_v2.0_comp_source_code_url", "Source code URI", false, features::comp_with_source_code),
    (
        "bsi_v2.0_comp_source_code_hash",
        "Source code hash",
        false,
        features::comp_with_source_code_hash,
    ),
    ("bsi_v2.0_comp_download_url", "Download URI", false, features::comp_with_download_url),
    ("bsi_v2.0_comp_other_ids", "Other unique identifiers", false, features::comp_with_unique_ids),
];

const FSCT: &[(&str, &str, bool, EvaluateFn)] = &[
    ("fsct_sbom_author", "SBOM author", true, features::sbom_author_or_tool),
    ("fsct_sbom_timestamp", "Timestamp", true, features::sbom_creation_timestamp),
    ("fsct_sbom_primary_component", "Primary component", true, features::sbom_primary_component),
    ("fsct_comp_name", "Component name", true, features::comp_with_name),
    ("fsct_comp_version", "Component version", true, features::comp_with_version),
    ("fsct_comp_supplier", "Supplier name", true, features::comp_with_supplier),
    ("fsct_comp_unique_ids", "Unique identifiers", true, features::comp_with_unique_ids),
    ("fsct_comp_hash", "Cryptographic hash", true, features::comp_with_checksums),
    ("fsct_comp_license", "License", true, features::comp_with_licenses),
    ("fsct_dependencies", "Dependency relationships", true, features::dependency_graph),
    ("fsct_comp_copyright", "Copyright notice", false, features::comp_with_copyright),
];

fn standard_builder() -> CatalogBuilder {
    let categories: [(&str, &str, f64, &[(&str, &str, f64, EvaluateFn)]); 7] = [
        ("identification", "Identification", 10.0, IDENTIFICATION),
        ("provenance", "Provenance", 12.0, PROVENANCE),
        ("integrity", "Integrity", 15.0, INTEGRITY),
        ("completeness", "Completeness", 12.0, COMPLETENESS),
        ("licensing", "Licensing & Compliance", 15.0, LICENSING),
        ("vulnerability", "Vulnerability & Traceability", 10.0, VULNERABILITY),
        ("structural", "Structural", 8.0, STRUCTURAL),
    ];

    let mut builder = Catalog::builder();
    for (key, name, weight, table) in categories {
        builder = register_features(builder, table);
        let keys: Vec<&str> = table.iter().map(|(k, ..)| *k).collect();
        builder = builder.category(key, name, weight, &keys);
    }

    builder = register_features(builder, COMPONENT_INFO);
    let info_keys: Vec<&str> = COMPONENT_INFO.iter().map(|(k, ..)| *k).collect();
    builder = builder.informational_category("compinfo", "Component Quality (Info)", &info_keys);

    let profiles: [(&str, &str, &str, &[(&str, &str, bool, EvaluateFn)]); 4] = [
        (
            "ntia",
            "NTIA Minimum Elements",
            "NTIA minimum elements for a software bill of materials (2021)",
            NTIA,
        ),
        (
            "bsi-v1.1",
            "BSI TR-03183-2 v1.1",
            "BSI technical guideline TR-03183-2 version 1.1",
            BSI_V11,
        ),
        (
            "bsi-v2.0",
            "BSI TR-03183-2 v2.0",
            "BSI technical guideline TR-03183-2 version 2.0",
            BSI_V20,
        ),
        (
            "fsct",
            "FSCT v3 Minimum Expectation",
            "Framing Software Component Transparency, third edition, minimum expectation",
            FSCT,
        ),
    ];

    for (key, name, description, table) in profiles {
        for (item_key, item_name, required, evaluate) in table {
            builder = builder.profile_feature(item_key, item_name, *required, *evaluate);
        }
        let keys: Vec<&str> = table.iter().map(|(k, ..)| *k).collect();
        builder = builder.profile(key, name, description, &keys);
    }

    builder = standard_aliases(builder);
    builder
}

fn register_features(
    mut builder: CatalogBuilder,
    table: &[(&str, &str, f64, EvaluateFn)],
) -> CatalogBuilder {
    for (key, name, weight, evaluate) in table {
        builder = builder.feature(key, name, *weight, *evaluate);
    }
    builder
}

fn standard_aliases(builder: CatalogBuilder) -> CatalogBuilder {
    let mut builder = builder
        .category_aliases("identification", &["ident", "identity"])
        .category_aliases("provenance", &["origin", "sbom_provenance"])
        .category_aliases("integrity", &["hashes", "hash"])
        .category_aliases("completeness", &["complete"])
        .category_aliases(
            "licensing",
            &[
                "licensingandcompliance",
                "licensing_and_compliance",
                "licensing & compliance",
                "licensing-and-compliance",
                "license",
                "licenses",
            ],
        )
        .category_aliases(
            "vulnerability",
            &[
                "vulnerabilityandtraceability",
                "vulnerability_and_traceability",
                "vulnerability & traceability",
                "traceability",
                "vuln",
            ],
        )
        .category_aliases("structural", &["structure", "spec"])
        .category_aliases(
            "compinfo",
            &[
                "component quality (info)",
                "component_quality_info",
                "componentqualityinfo",
                "component-quality",
            ],
        )
        .profile_aliases(
            "ntia",
            &["ntia-minimum-elements", "ntia_minimum_elements", "ntia-min"],
        )
        .profile_aliases("bsi-v1.1", &["bsi", "bsi-v1", "bsi_v1.1", "bsiv1.1"])
        .profile_aliases("bsi-v2.0", &["bsi-v2", "bsi_v2.0", "bsiv2.0", "bsi-v2.0.0"])
        .profile_aliases("fsct", &["fsctv3", "fsct-v3", "fsct_v3"]);

    // comp_with_name is also accepted as comp_name and compname
    let comp_with: Vec<String> = builder
        .catalog()
        .features
        .keys()
        .filter(|k| k.starts_with("comp_with_"))
        .cloned()
        .collect();
    for key in comp_with {
        let rest = &key["comp_with_".len()..];
        let short = format!("comp_{rest}");
        let compact = format!("comp{}", rest.replace('_', ""));
        builder = builder.feature_aliases(&key, &[short.as_str(), compact.as_str()]);
    }

    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_shape() {
        let catalog = Catalog::standard();
        assert_eq!(
            catalog.category_keys(),
            vec![
                "identification",
                "provenance",
                "integrity",
                "completeness",
                "licensing",
                "vulnerability",
                "structural",
                "compinfo",
            ]
        );
        for category in catalog.categories() {
            for feature in &category.features {
                assert!(catalog.has_feature(feature), "{feature} unresolved");
            }
        }
        for profile in catalog.profiles() {
            assert!(!profile.features.is_empty());
            for item in &profile.features {
                assert!(catalog.has_profile_feature(item), "{item} unresolved");
            }
        }
        assert!(catalog.category("compinfo").is_some_and(CategorySpec::is_informational));
        assert!(!catalog.category("licensing").is_some_and(CategorySpec::is_informational));
    }

    #[test]
    fn test_feature_weights_sum_to_one() {
        let catalog = Catalog::standard();
        for category in catalog.categories().filter(|c| !c.is_informational()) {
            let sum: f64 = category
                .features
                .iter()
                .filter_map(|k| catalog.feature(k))
                .map(|f| f.weight)
                .sum();
            assert!((sum - 1.0).abs() < 1e-9, "{} sums to {sum}", category.key);
        }
    }

    #[test]
    fn test_category_aliases() {
        let catalog = Catalog::standard();
        for input in [
            "licensing",
            "LicensingAndCompliance",
            "licensing_and_compliance",
            "  Licensing & Compliance ",
        ] {
            assert_eq!(catalog.resolve_category_alias(input), Some("licensing"));
        }
        assert_eq!(catalog.resolve_category_alias("nonsense"), None);
        assert_eq!(catalog.resolve_category_alias("   "), None);
    }

    #[test]
    fn test_profile_and_feature_aliases() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.resolve_profile_alias("NTIA-Minimum-Elements"), Some("ntia"));
        assert_eq!(catalog.resolve_profile_alias("bsi"), Some("bsi-v1.1"));
        assert_eq!(catalog.resolve_profile_alias("BSI-V2.0"), Some("bsi-v2.0"));
        assert_eq!(catalog.resolve_feature_alias("compname"), Some("comp_with_name"));
        assert_eq!(catalog.resolve_feature_alias("COMP_NAME"), Some("comp_with_name"));
        assert_eq!(
            catalog.resolve_feature_alias("compstrongchecksums"),
            Some("comp_with_strong_checksums")
        );
        assert_eq!(catalog.resolve_feature_alias("comp_with_name"), Some("comp_with_name"));
        assert_eq!(catalog.resolve_feature_alias("name"), None);
    }

    #[test]
    fn test_alias_to_unregistered_key_does_not_resolve() {
        let catalog = Catalog::builder()
            .category_aliases("missing", &["gone"])
            .build();
        assert_eq!(catalog.resolve_category_alias("gone"), None);
    }

    #[test]
    fn test_partial_catalog() {
        let catalog = Catalog::builder()
            .feature("f", "F", 1.0, features::comp_with_name)
            .category("c", "C", 1.0, &["f", "missing"])
            .build();
        assert!(catalog.has_category("c"));
        assert!(!catalog.has_feature("missing"));
        assert!(!catalog.has_profile("ntia"));
    }
}
