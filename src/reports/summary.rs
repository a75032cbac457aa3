//! Summary report generator for shell output.
//!
//! One line per category and per profile, followed by the overall score.

use super::{ansi_color, score_color, DocumentReport, ReportConfig, ReportFormat, ReportGenerator};
use crate::error::Result;
use crate::quality::{ComplianceVerdict, ComprehensiveResult, ProfileResult};

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn score_lines(&self, result: &ComprehensiveResult, lines: &mut Vec<String>) {
        for category in &result.categories {
            let weight = if category.informational {
                self.color("(informational)", "dim")
            } else {
                format!("(weight {})", category.weight)
            };
            lines.push(format!(
                "  {:<30} {}  {}",
                category.name,
                self.color(&format!("{:>4.1}", category.score), score_color(category.score)),
                weight
            ));
        }
        lines.push(format!(
            "{}  {}/10  Grade {} ({})",
            self.color("Overall:", "bold"),
            self.color(
                &format!("{:.1}", result.overall_score),
                score_color(result.overall_score)
            ),
            result.grade,
            result.grade.description()
        ));
    }

    fn profile_line(&self, profile: &ProfileResult, config: &ReportConfig) -> String {
        let verdict = profile.verdict(config.policy);
        let verdict_color = match verdict {
            ComplianceVerdict::Pass => "green",
            ComplianceVerdict::Fail => "red",
            ComplianceVerdict::Skipped => "dim",
        };
        format!(
            "  {:<30} {}  score {:.1}  {}",
            profile.name,
            self.color(&format!("{verdict:<7}"), verdict_color),
            profile.score,
            profile.message
        )
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, report: &DocumentReport, config: &ReportConfig) -> Result<String> {
        let mut lines = Vec::new();

        lines.push(format!(
            "{}  {}",
            self.color("SBOM Quality:", "bold"),
            report.file.display()
        ));
        lines.push(self.color("─".repeat(50).as_str(), "dim"));

        if let Some(result) = &report.comprehensive {
            self.score_lines(result, &mut lines);
        }

        if !report.profiles.is_empty() {
            if report.comprehensive.is_some() {
                lines.push(String::new());
            }
            lines.push(format!(
                "{} {}",
                self.color("Compliance", "bold"),
                self.color(&format!("(policy {})", config.policy), "dim")
            ));
            for profile in &report.profiles {
                lines.push(self.profile_line(profile, config));
            }
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SbomDocument;
    use crate::quality::{Catalog, ComprehensiveEvaluator, ProfileEvaluator};

    #[test]
    fn test_summary_lists_categories_and_profiles() {
        let catalog = Catalog::standard();
        let doc = SbomDocument::default();
        let mut report = DocumentReport::new("sbom.json");
        report.comprehensive = Some(ComprehensiveEvaluator::new(&catalog).evaluate_all(&doc));
        report.profiles = ProfileEvaluator::new(&catalog).evaluate(&["ntia"], &doc);

        let out = SummaryReporter::new()
            .no_color()
            .generate(&report, &ReportConfig::default())
            .unwrap();

        assert!(out.contains("sbom.json"));
        assert!(out.contains("Licensing & Compliance"));
        assert!(out.contains("(informational)"));
        assert!(out.contains("Overall:"));
        assert!(out.contains("NTIA Minimum Elements"));
        assert!(out.contains("FAIL"));
        assert!(!out.contains('\x1b'));
    }
}
