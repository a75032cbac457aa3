//! Configuration types for sbom-score.

use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::quality::CompliancePolicy;
use crate::reports::ReportFormat;

// ============================================================================
// Tool configuration (.sbom-score.yaml)
// ============================================================================

/// Tool configuration loaded from `.sbom-score.yaml`.
///
/// Every value can be overridden from the command line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoreConfig {
    /// Comprehensive scoring settings
    pub scoring: ScoringConfig,
    /// Profile compliance settings
    pub compliance: ComplianceConfig,
    /// Output settings
    pub output: OutputConfig,
}

impl ScoreConfig {
    /// Create a new `ScoreConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Comprehensive scoring settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringConfig {
    /// Categories to evaluate (keys or aliases); empty means all
    pub categories: Vec<String>,
    /// Fail (exit 1) when the overall score is below this value (0-10)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,
}

/// Profile compliance settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ComplianceConfig {
    /// Profiles to evaluate (keys or aliases)
    pub profiles: Vec<String>,
    /// Verdict policy: `all-required` or `threshold:N`
    #[schemars(with = "String")]
    pub policy: CompliancePolicy,
    /// YAML file with additional profile definitions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profiles_file: Option<PathBuf>,
}

/// Output settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format
    pub format: ReportFormat,
    /// Output file path (stdout when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

// ============================================================================
// Profile configuration
// ============================================================================

/// Custom compliance profiles loaded from YAML.
///
/// ```yaml
/// meta:
///   version: "1.0"
///   description: In-house release gate
///   last_updated: "2025-01-15"
/// profiles:
///   - name: release-gate
///     features: [comp_with_name, comp_with_version, ntia_dependencies]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProfileConfig {
    /// File metadata
    #[serde(default)]
    pub meta: ProfileMeta,
    /// Profile definitions
    pub profiles: Vec<ProfileDefinition>,
}

/// Metadata block of a profile file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ProfileMeta {
    pub version: String,
    pub description: String,
    pub last_updated: String,
}

/// A single custom profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProfileDefinition {
    /// Profile name; its lower-cased, dash-joined form becomes the key
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Profile item keys or comprehensive feature keys/aliases
    pub features: Vec<String>,
}

impl ProfileDefinition {
    /// Catalog key derived from the name
    #[must_use]
    pub fn key(&self) -> String {
        self.name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_lowercase()
    }
}
