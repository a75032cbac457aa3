//! Vulnerability records declared inside an SBOM.

use serde::{Deserialize, Serialize};

/// Severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// A vulnerability declared in the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vulnerability {
    /// Vulnerability id (CVE, GHSA, ...)
    pub id: String,
    /// Severity, if rated
    #[serde(default)]
    pub severity: Option<Severity>,
    /// Ids of the affected components
    #[serde(default)]
    pub affects: Vec<String>,
}

impl Vulnerability {
    /// Whether this vulnerability is rated critical
    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.severity == Some(Severity::Critical)
    }

    /// Whether this vulnerability affects the given component id
    #[must_use]
    pub fn affects_component(&self, id: &str) -> bool {
        self.affects.iter().any(|a| a == id)
    }
}
