//! Report generation for scoring and compliance results.
//!
//! Three output formats:
//! - Summary: one line per category and profile, for terminals and CI logs
//! - Detailed: aligned per-feature and per-item tables
//! - JSON: structured data for programmatic integration

mod detailed;
mod json;
mod summary;
mod types;

pub use detailed::DetailedReporter;
pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use types::{DocumentReport, ReportConfig, ReportFormat};

use crate::error::Result;

/// Trait for report generators
pub trait ReportGenerator {
    /// Render the results of a single document
    fn generate(&self, report: &DocumentReport, config: &ReportConfig) -> Result<String>;

    /// Render the results of several documents, in the given order
    fn generate_many(&self, reports: &[DocumentReport], config: &ReportConfig) -> Result<String> {
        let rendered = reports
            .iter()
            .map(|r| self.generate(r, config))
            .collect::<Result<Vec<_>>>()?;
        Ok(rendered.join("\n\n"))
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat, use_color: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Detailed => {
            if use_color {
                Box::new(DetailedReporter::new())
            } else {
                Box::new(DetailedReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}

/// Apply ANSI color formatting if colored output is enabled.
pub(crate) fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if !colored {
        return text.to_string();
    }
    match color {
        "red" => format!("\x1b[31m{text}\x1b[0m"),
        "green" => format!("\x1b[32m{text}\x1b[0m"),
        "yellow" => format!("\x1b[33m{text}\x1b[0m"),
        "cyan" => format!("\x1b[36m{text}\x1b[0m"),
        "bold" => format!("\x1b[1m{text}\x1b[0m"),
        "dim" => format!("\x1b[2m{text}\x1b[0m"),
        _ => text.to_string(),
    }
}

/// Color name for a 0-10 score
pub(crate) fn score_color(score: f64) -> &'static str {
    if score >= 8.0 {
        "green"
    } else if score >= 5.0 {
        "yellow"
    } else {
        "red"
    }
}
