//! Score command handler.
//!
//! Implements the `score` subcommand: comprehensive category scoring.

use std::path::PathBuf;

use anyhow::Result;

use super::{build_catalog, evaluate_and_report};
use crate::config::ScoreConfig;
use crate::pipeline::{exit_codes, EvaluationRequest};

/// Run the score command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_score(files: &[PathBuf], config: &ScoreConfig, show_ignored: bool) -> Result<i32> {
    let catalog = build_catalog(config)?;
    let request = EvaluationRequest::score(config.scoring.categories.clone()).resolve(&catalog)?;

    let (reports, failed) = evaluate_and_report(files, &catalog, &request, config, show_ignored)?;
    if failed {
        return Ok(exit_codes::ERROR);
    }

    if let Some(threshold) = config.scoring.min_score {
        let below: Vec<_> = reports
            .iter()
            .filter_map(|r| r.comprehensive.as_ref().map(|c| (&r.file, c.overall_score)))
            .filter(|(_, score)| *score < threshold)
            .collect();
        for (file, score) in &below {
            tracing::error!(
                "{}: quality score {:.1} is below minimum threshold {:.1}",
                file.display(),
                score,
                threshold
            );
        }
        if !below.is_empty() {
            return Ok(exit_codes::BELOW_THRESHOLD);
        }
    }

    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportFormat;
    use tempfile::TempDir;

    fn config_to(dir: &TempDir) -> ScoreConfig {
        let mut config = ScoreConfig::default();
        config.output.format = ReportFormat::Json;
        config.output.file = Some(dir.path().join("out.json"));
        config
    }

    #[test]
    fn test_score_below_min_score() {
        let tmp = TempDir::new().unwrap();
        let doc = tmp.path().join("doc.json");
        std::fs::write(&doc, "{}").unwrap();

        let mut config = config_to(&tmp);
        config.scoring.min_score = Some(9.0);
        assert_eq!(
            run_score(&[doc.clone()], &config, false).unwrap(),
            exit_codes::BELOW_THRESHOLD
        );

        config.scoring.min_score = None;
        assert_eq!(run_score(&[doc], &config, false).unwrap(), exit_codes::SUCCESS);
    }

    #[test]
    fn test_score_unreadable_file_is_error_code() {
        let tmp = TempDir::new().unwrap();
        let config = config_to(&tmp);
        let missing = tmp.path().join("missing.json");
        assert_eq!(
            run_score(&[missing], &config, false).unwrap(),
            exit_codes::ERROR
        );
    }

    #[test]
    fn test_score_unknown_category_fails() {
        let tmp = TempDir::new().unwrap();
        let mut config = config_to(&tmp);
        config.scoring.categories = vec!["bogus".into()];
        assert!(run_score(&[], &config, false).is_err());
    }
}
