//! JSON report generator.

use serde::Serialize;

use super::{DocumentReport, ReportConfig, ReportFormat, ReportGenerator};
use crate::error::{ReportErrorKind, Result, SbomScoreError};
use crate::quality::{ComplianceVerdict, ComprehensiveResult, ProfileResult};

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn to_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let out = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        out.map_err(|e| {
            SbomScoreError::report(
                "serializing JSON report",
                ReportErrorKind::JsonSerializationError(e.to_string()),
            )
        })
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonProfile<'a> {
    #[serde(flatten)]
    result: &'a ProfileResult,
    verdict: ComplianceVerdict,
}

#[derive(Serialize)]
struct JsonDocumentReport<'a> {
    tool: &'static str,
    version: &'static str,
    file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    comprehensive: Option<&'a ComprehensiveResult>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    profiles: Vec<JsonProfile<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    policy: Option<String>,
}

impl<'a> JsonDocumentReport<'a> {
    fn new(report: &'a DocumentReport, config: &ReportConfig) -> Self {
        let profiles: Vec<JsonProfile<'a>> = report
            .profiles
            .iter()
            .map(|result| JsonProfile {
                result,
                verdict: result.verdict(config.policy),
            })
            .collect();
        let policy = (!profiles.is_empty()).then(|| config.policy.to_string());
        Self {
            tool: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            file: report.file.display().to_string(),
            comprehensive: report.comprehensive.as_ref(),
            profiles,
            policy,
        }
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, report: &DocumentReport, config: &ReportConfig) -> Result<String> {
        self.to_json(&JsonDocumentReport::new(report, config))
    }

    /// A single document renders as an object, several as an array
    fn generate_many(&self, reports: &[DocumentReport], config: &ReportConfig) -> Result<String> {
        if let [single] = reports {
            return self.generate(single, config);
        }
        let documents: Vec<_> = reports
            .iter()
            .map(|r| JsonDocumentReport::new(r, config))
            .collect();
        self.to_json(&documents)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
