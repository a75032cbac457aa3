//! Configuration module for sbom-score.
//!
//! Two kinds of YAML configuration:
//! - `.sbom-score.yaml` ([`ScoreConfig`]): default categories, profiles,
//!   policy and output settings, discovered automatically
//! - profile files ([`ProfileConfig`]): custom compliance profiles that
//!   extend the standard catalog
//!
//! # Configuration File
//!
//! Place a `.sbom-score.yaml` file in your project root or `~/.config/sbom-score/`:
//!
//! ```yaml
//! scoring:
//!   min_score: 7.0
//! compliance:
//!   profiles: [ntia, fsct]
//!   policy: all-required
//! ```

pub mod file;
mod profiles;
mod types;
mod validation;

pub use types::{
    ComplianceConfig, OutputConfig, ProfileConfig, ProfileDefinition, ProfileMeta, ScoreConfig,
    ScoringConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};

/// Generate a JSON Schema for the `.sbom-score.yaml` format.
///
/// Editors can use it for validation and autocompletion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(ScoreConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

/// Generate a JSON Schema for profile definition files.
#[must_use]
pub fn generate_profile_schema() -> String {
    let schema = schemars::schema_for!(ProfileConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schemas() {
        let schema: serde_json::Value = serde_json::from_str(&generate_json_schema()).unwrap();
        assert!(schema["properties"]["compliance"].is_object());

        let profiles: serde_json::Value =
            serde_json::from_str(&generate_profile_schema()).unwrap();
        assert!(profiles["properties"]["profiles"].is_object());
    }
}
