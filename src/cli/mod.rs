//! CLI command handlers.
//!
//! Testable command handlers invoked by main.rs. Each handler takes the
//! effective [`ScoreConfig`] (file values with CLI overrides applied) and
//! returns the process exit code.

mod compliance;
mod list;
mod score;

pub use compliance::run_compliance;
pub use list::{render_list, run_list, ListTarget};
pub use score::run_score;

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::{ProfileConfig, ScoreConfig};
use crate::pipeline::{evaluate_files, output_reports, EvaluationRequest, OutputTarget};
use crate::quality::Catalog;
use crate::reports::{DocumentReport, ReportConfig};

/// The standard catalog, extended with the configured profile file
pub fn build_catalog(config: &ScoreConfig) -> Result<Catalog> {
    let catalog = Catalog::standard();
    match &config.compliance.profiles_file {
        Some(path) => {
            let profiles = ProfileConfig::load(path)
                .with_context(|| format!("Failed to load profiles from {}", path.display()))?;
            tracing::debug!(
                "Loaded {} custom profile(s) from {}",
                profiles.profiles.len(),
                path.display()
            );
            Ok(profiles.apply_to(&catalog))
        }
        None => Ok(catalog),
    }
}

/// Evaluate `files`, render the successful reports and log failures.
///
/// Returns the reports and whether any file failed.
fn evaluate_and_report(
    files: &[PathBuf],
    catalog: &Catalog,
    request: &EvaluationRequest,
    config: &ScoreConfig,
    show_ignored: bool,
) -> Result<(Vec<DocumentReport>, bool)> {
    let mut reports = Vec::with_capacity(files.len());
    let mut failed = false;

    for (path, result) in files.iter().zip(evaluate_files(catalog, request, files)) {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                tracing::error!("{}: {}", path.display(), e);
                failed = true;
            }
        }
    }

    let report_config = ReportConfig {
        policy: config.compliance.policy,
        show_ignored,
    };
    if !reports.is_empty() {
        output_reports(
            &reports,
            config.output.format,
            &report_config,
            &OutputTarget::from_option(config.output.file.clone()),
            config.output.no_color,
        )?;
    }

    Ok((reports, failed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_build_catalog_with_profiles_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("profiles.yaml");
        std::fs::write(
            &path,
            "profiles:\n  - name: Gate\n    features: [comp_with_name]\n",
        )
        .unwrap();

        let mut config = ScoreConfig::default();
        config.compliance.profiles_file = Some(path);
        let catalog = build_catalog(&config).unwrap();
        assert!(catalog.has_profile("gate"));
        assert!(catalog.has_profile("ntia"));
    }

    #[test]
    fn test_build_catalog_missing_profiles_file() {
        let mut config = ScoreConfig::default();
        config.compliance.profiles_file = Some(PathBuf::from("/nonexistent/profiles.yaml"));
        assert!(build_catalog(&config).is_err());
    }
}
