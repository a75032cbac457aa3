//! Report output stage.

use anyhow::Result;

use super::{should_use_color, write_output, OutputTarget};
use crate::reports::{create_reporter, DocumentReport, ReportConfig, ReportFormat};

/// Render reports in `format` and write them to `target`.
pub fn output_reports(
    reports: &[DocumentReport],
    format: ReportFormat,
    config: &ReportConfig,
    target: &OutputTarget,
    no_color: bool,
) -> Result<()> {
    let reporter = create_reporter(format, should_use_color(no_color, target));
    let rendered = reporter.generate_many(reports, config)?;
    write_output(&rendered, target)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_reports_json_to_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.json");
        let reports = vec![DocumentReport::new("a.json")];

        output_reports(
            &reports,
            ReportFormat::Json,
            &ReportConfig::default(),
            &OutputTarget::File(path.clone()),
            true,
        )
        .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["file"], "a.json");
    }
}
