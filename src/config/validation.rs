//! Configuration validation for sbom-score.
//!
//! Provides validation traits and implementations for all configuration types.

use std::collections::HashSet;

use super::types::{OutputConfig, ProfileConfig, ScoreConfig, ScoringConfig};
use crate::quality::MAX_SCORE;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for ScoreConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.scoring.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for ScoringConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(min) = self.min_score {
            if !(0.0..=MAX_SCORE).contains(&min) {
                errors.push(ConfigError::new(
                    "scoring.min_score",
                    format!("Minimum score must be between 0 and {MAX_SCORE}, got {min}"),
                ));
            }
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError::new(
                        "output.file",
                        format!("Parent directory does not exist: {}", parent.display()),
                    ));
                }
            }
        }
        errors
    }
}

impl Validatable for ProfileConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let mut seen_names = HashSet::new();

        for (i, profile) in self.profiles.iter().enumerate() {
            let field = format!("profiles[{i}]");
            let name = profile.name.trim();

            if name.is_empty() {
                errors.push(ConfigError::new(
                    format!("{field}.name"),
                    "Profile name must not be empty",
                ));
            } else if !seen_names.insert(name.to_lowercase()) {
                errors.push(ConfigError::new(
                    format!("{field}.name"),
                    format!("Duplicate profile name '{name}'"),
                ));
            }

            if profile.features.is_empty() {
                errors.push(ConfigError::new(
                    format!("{field}.features"),
                    format!("Profile '{name}' must list at least one feature"),
                ));
            }

            let mut seen_features = HashSet::new();
            for (j, feature) in profile.features.iter().enumerate() {
                let feature = feature.trim();
                if feature.is_empty() {
                    errors.push(ConfigError::new(
                        format!("{field}.features[{j}]"),
                        "Feature name must not be empty",
                    ));
                } else if !seen_features.insert(feature) {
                    errors.push(ConfigError::new(
                        format!("{field}.features[{j}]"),
                        format!("Duplicate feature '{feature}' in profile '{name}'"),
                    ));
                }
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::ProfileDefinition;

    fn profile(name: &str, features: &[&str]) -> ProfileDefinition {
        ProfileDefinition {
            name: name.to_string(),
            description: None,
            features: features.iter().map(ToString::to_string).collect(),
        }
    }

    fn config(profiles: Vec<ProfileDefinition>) -> ProfileConfig {
        ProfileConfig {
            profiles,
            ..ProfileConfig::default()
        }
    }

    #[test]
    fn test_valid_profile_config() {
        let cfg = config(vec![
            profile("gate", &["comp_with_name"]),
            profile("other", &["comp_with_name", "comp_with_version"]),
        ]);
        assert!(cfg.is_valid());
    }

    #[test]
    fn test_empty_name_and_no_features() {
        let errors = config(vec![profile("  ", &[])]).validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "profiles[0].name");
        assert_eq!(errors[1].field, "profiles[0].features");
    }

    #[test]
    fn test_duplicate_profile_name_is_case_insensitive() {
        let errors = config(vec![
            profile("Gate", &["comp_with_name"]),
            profile("gate", &["comp_with_name"]),
        ])
        .validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Duplicate profile name"));
    }

    #[test]
    fn test_feature_errors() {
        let errors = config(vec![profile("p", &["a", "", "a"])]).validate();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["profiles[0].features[1]", "profiles[0].features[2]"]);
    }

    #[test]
    fn test_min_score_range() {
        let mut cfg = ScoreConfig::default();
        cfg.scoring.min_score = Some(11.0);
        assert!(!cfg.is_valid());
        cfg.scoring.min_score = Some(7.5);
        assert!(cfg.is_valid());
    }
}
