//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use std::path::{Path, PathBuf};

use super::types::ScoreConfig;
use super::validation::{ConfigError, Validatable};
use crate::reports::ReportFormat;

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".sbom-score.yaml",
    ".sbom-score.yml",
    "sbom-score.yaml",
    "sbom-score.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/sbom-score/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path.filter(|p| p.exists()) {
        return Some(path.to_path_buf());
    }

    let candidates = [
        std::env::current_dir().ok(),
        find_git_root(),
        dirs::config_dir().map(|dir| dir.join("sbom-score")),
        dirs::home_dir(),
    ];

    candidates
        .iter()
        .flatten()
        .find_map(|dir| find_config_in_dir(dir))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
    /// Parsed but failed validation
    Invalid(Vec<ConfigError>),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
            Self::Invalid(errors) => {
                write!(f, "Invalid configuration:")?;
                for error in errors {
                    write!(f, "\n  - {error}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) | Self::Invalid(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load a `ScoreConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<ScoreConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: ScoreConfig = serde_yaml::from_str(&content)?;
    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigFileError::Invalid(errors));
    }
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (ScoreConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (ScoreConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (ScoreConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl ScoreConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Used to layer CLI flags over file config; only values that differ
    /// from the defaults override.
    pub fn merge(&mut self, other: &Self) {
        if !other.scoring.categories.is_empty() {
            self.scoring.categories.clone_from(&other.scoring.categories);
        }
        if other.scoring.min_score.is_some() {
            self.scoring.min_score = other.scoring.min_score;
        }

        if !other.compliance.profiles.is_empty() {
            self.compliance.profiles.clone_from(&other.compliance.profiles);
        }
        if other.compliance.policy != crate::quality::CompliancePolicy::default() {
            self.compliance.policy = other.compliance.policy;
        }
        if other.compliance.profiles_file.is_some() {
            self.compliance
                .profiles_file
                .clone_from(&other.compliance.profiles_file);
        }

        if other.output.format != ReportFormat::default() {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config file.
#[must_use]
pub fn generate_example_config() -> String {
    r"# sbom-score configuration
# Place this file at .sbom-score.yaml in your project root
# or in ~/.config/sbom-score/. CLI flags override these values.

scoring:
  # Categories to score (empty = all). Keys or aliases.
  categories: []
  # Exit with code 1 when the overall score falls below this value
  # min_score: 7.0

compliance:
  # Profiles to check: ntia, bsi-v1.1, bsi-v2.0, fsct, or custom names
  profiles: [ntia]
  # Verdict policy: all-required | threshold:N
  policy: all-required
  # Additional profile definitions
  # profiles_file: ./sbom-profiles.yaml

output:
  # Format: summary, detailed, json
  format: summary
  # file: sbom-score.json
  no_color: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
