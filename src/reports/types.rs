//! Report type definitions.

use std::path::PathBuf;

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::quality::{CompliancePolicy, ComprehensiveResult, ProfileResult};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One line per category and profile
    #[default]
    Summary,
    /// Per-feature and per-item tables
    #[value(alias = "table")]
    Detailed,
    /// Structured JSON output
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summary => write!(f, "summary"),
            Self::Detailed => write!(f, "detailed"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Everything evaluated for one input document
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    /// Path of the evaluated file
    pub file: PathBuf,
    /// Comprehensive scoring result, if requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comprehensive: Option<ComprehensiveResult>,
    /// Profile results, in requested order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub profiles: Vec<ProfileResult>,
}

impl DocumentReport {
    /// Create an empty report for a file
    #[must_use]
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            comprehensive: None,
            profiles: Vec::new(),
        }
    }
}

/// Options shared by all reporters
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportConfig {
    /// Policy used to render profile verdicts
    pub policy: CompliancePolicy,
    /// Show ignored (N/A) features in detailed output
    pub show_ignored: bool,
}
