//! Detailed tabular report.
//!
//! Every feature and profile item on its own row. Columns are padded by
//! display width so names and descriptions with wide characters stay aligned.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::{ansi_color, score_color, DocumentReport, ReportConfig, ReportFormat, ReportGenerator};
use crate::error::Result;
use crate::quality::{CategoryResult, ProfileResult};

const NAME_WIDTH: usize = 36;
const DESC_WIDTH: usize = 60;

/// Table reporter with per-feature rows
pub struct DetailedReporter {
    /// Use colored output
    colored: bool,
}

impl DetailedReporter {
    /// Create a new detailed reporter
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

    fn category_table(
        &self,
        category: &CategoryResult,
        config: &ReportConfig,
        lines: &mut Vec<String>,
    ) {
        let header = if category.informational {
            format!("{} (informational)", category.name)
        } else {
            format!("{} (weight {})", category.name, category.weight)
        };
        lines.push(format!(
            "{}  {}",
            self.color(&header, "bold"),
            self.color(&format!("{:.1}", category.score), score_color(category.score))
        ));
        lines.push(format!(
            "  {} {:>6} {:>6}  {}",
            pad_to_width("FEATURE", NAME_WIDTH),
            "WEIGHT",
            "SCORE",
            "DETAILS"
        ));

        for feature in &category.features {
            if feature.ignored && !config.show_ignored {
                continue;
            }
            let score = if feature.ignored {
                self.color(&format!("{:>6}", "N/A"), "dim")
            } else {
                self.color(&format!("{:>6.1}", feature.score), score_color(feature.score))
            };
            lines.push(format!(
                "  {} {:>6.2} {}  {}",
                pad_to_width(&feature.name, NAME_WIDTH),
                feature.weight,
                score,
                truncate_to_width(&feature.desc, DESC_WIDTH)
            ));
        }
    }

    fn profile_table(
        &self,
        profile: &ProfileResult,
        config: &ReportConfig,
        lines: &mut Vec<String>,
    ) {
        lines.push(format!(
            "{}  {}  {}",
            self.color(&profile.name, "bold"),
            profile.verdict(config.policy),
            self.color(&profile.message, "dim")
        ));
        lines.push(format!(
            "  {} {:<8} {:>6}  {:<6}  {}",
            pad_to_width("CHECK", NAME_WIDTH),
            "KIND",
            "SCORE",
            "RESULT",
            "DETAILS"
        ));

        for item in &profile.items {
            let kind = if item.required { "required" } else { "optional" };
            let result = match (item.ignored, item.passed) {
                (true, _) => self.color(&format!("{:<6}", "n/a"), "dim"),
                (false, true) => self.color(&format!("{:<6}", "pass"), "green"),
                (false, false) => self.color(&format!("{:<6}", "fail"), "red"),
            };
            lines.push(format!(
                "  {} {:<8} {:>6.1}  {}  {}",
                pad_to_width(&item.name, NAME_WIDTH),
                kind,
                item.score,
                result,
                truncate_to_width(&item.desc, DESC_WIDTH)
            ));
        }
    }
}

impl Default for DetailedReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for DetailedReporter {
    fn generate(&self, report: &DocumentReport, config: &ReportConfig) -> Result<String> {
        let mut lines = vec![
            format!("{}  {}", self.color("SBOM Quality:", "bold"), report.file.display()),
            "═".repeat(NAME_WIDTH + DESC_WIDTH + 20),
        ];

        if let Some(result) = &report.comprehensive {
            for category in &result.categories {
                self.category_table(category, config, &mut lines);
                lines.push(String::new());
            }
            lines.push(format!(
                "Overall score: {:.1}/10  Grade {} ({})",
                result.overall_score,
                result.grade,
                result.grade.description()
            ));
        }

        for profile in &report.profiles {
            lines.push(String::new());
            self.profile_table(profile, config, &mut lines);
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Detailed
    }
}

/// Truncate to a display width, marking the cut with "..."
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut width = 0;
    let kept: String = s
        .chars()
        .take_while(|ch| {
            let w = UnicodeWidthChar::width(*ch).unwrap_or(0);
            if width + w > budget {
                return false;
            }
            width += w;
            true
        })
        .collect();
    format!("{kept}...")
}

/// Truncate then right-pad with spaces to exactly `width` display columns
fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let used = UnicodeWidthStr::width(truncated.as_str());
    format!("{truncated}{}", " ".repeat(width.saturating_sub(used)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Component, SbomDocument};
    use crate::quality::{Catalog, ComprehensiveEvaluator, ProfileEvaluator};

    #[test]
    fn test_pad_to_width_handles_wide_chars() {
        let padded = pad_to_width("日本", 6);
        assert_eq!(UnicodeWidthStr::width(padded.as_str()), 6);
        assert_eq!(pad_to_width("abc", 5), "abc  ");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 6), "abc...");
    }

    #[test]
    fn test_detailed_rows() {
        let catalog = Catalog::standard();
        let doc = SbomDocument {
            components: vec![Component::new("a", "a").with_version("1")],
            ..SbomDocument::default()
        };
        let mut report = DocumentReport::new("x.json");
        report.comprehensive =
            Some(ComprehensiveEvaluator::new(&catalog).evaluate(&["identification"], &doc));
        report.profiles = ProfileEvaluator::new(&catalog).evaluate(&["fsct"], &doc);

        let out = DetailedReporter::new()
            .no_color()
            .generate(&report, &ReportConfig::default())
            .unwrap();
        assert!(out.contains("Components with versions"));
        assert!(out.contains("1/1 have versions"));
        assert!(out.contains("FSCT v3 Minimum Expectation"));
        assert!(out.contains("required"));
        assert!(out.contains("Overall score:"));
    }
}
