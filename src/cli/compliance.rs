//! Compliance command handler.
//!
//! Implements the `compliance` subcommand: evaluates documents against
//! compliance profiles and applies the configured verdict policy.

use std::path::PathBuf;

use anyhow::Result;

use super::{build_catalog, evaluate_and_report};
use crate::config::ScoreConfig;
use crate::pipeline::{exit_codes, EvaluationRequest};
use crate::quality::ComplianceVerdict;

/// Run the compliance command, returning the desired exit code.
pub fn run_compliance(files: &[PathBuf], config: &ScoreConfig, show_ignored: bool) -> Result<i32> {
    let catalog = build_catalog(config)?;
    let request =
        EvaluationRequest::compliance(config.compliance.profiles.clone()).resolve(&catalog)?;

    let (reports, failed) = evaluate_and_report(files, &catalog, &request, config, show_ignored)?;
    if failed {
        return Ok(exit_codes::ERROR);
    }

    let policy = config.compliance.policy;
    let mut non_compliant = false;
    for report in &reports {
        for profile in &report.profiles {
            match profile.verdict(policy) {
                ComplianceVerdict::Fail => {
                    tracing::warn!(
                        "{}: {} not met ({})",
                        report.file.display(),
                        profile.name,
                        profile.message
                    );
                    non_compliant = true;
                }
                ComplianceVerdict::Skipped => tracing::warn!(
                    "{}: {} skipped, no applicable checks",
                    report.file.display(),
                    profile.name
                ),
                ComplianceVerdict::Pass => {}
            }
        }
    }

    Ok(if non_compliant {
        exit_codes::NON_COMPLIANT
    } else {
        exit_codes::SUCCESS
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality::CompliancePolicy;
    use crate::reports::ReportFormat;
    use tempfile::TempDir;

    const COMPLETE_COMPONENT_DOC: &str = r#"{
        "primary_component_id": "app",
        "components": [
            {"id": "app", "name": "app", "version": "1.0"}
        ]
    }"#;

    fn setup(profiles: &[&str]) -> (TempDir, PathBuf, ScoreConfig) {
        let tmp = TempDir::new().unwrap();
        let doc = tmp.path().join("doc.json");
        std::fs::write(&doc, COMPLETE_COMPONENT_DOC).unwrap();

        let mut config = ScoreConfig::default();
        config.compliance.profiles = profiles.iter().map(ToString::to_string).collect();
        config.output.format = ReportFormat::Json;
        config.output.file = Some(tmp.path().join("out.json"));
        (tmp, doc, config)
    }

    #[test]
    fn test_compliance_requires_profiles() {
        let (_tmp, doc, config) = setup(&[]);
        let err = run_compliance(&[doc], &config, false).unwrap_err();
        assert!(err.to_string().contains("No profiles selected"));
    }

    #[test]
    fn test_compliance_fails_ntia_on_sparse_document() {
        let (_tmp, doc, config) = setup(&["ntia"]);
        assert_eq!(
            run_compliance(&[doc], &config, false).unwrap(),
            exit_codes::NON_COMPLIANT
        );
    }

    #[test]
    fn test_compliance_threshold_policy_can_pass() {
        let (_tmp, doc, mut config) = setup(&["NTIA"]);
        config.compliance.policy = CompliancePolicy::ScoreThreshold(0.0);
        assert_eq!(
            run_compliance(&[doc], &config, false).unwrap(),
            exit_codes::SUCCESS
        );
    }

    #[test]
    fn test_compliance_writes_json_report() {
        let (tmp, doc, config) = setup(&["fsct"]);
        run_compliance(&[doc], &config, false).unwrap();

        let out = std::fs::read_to_string(tmp.path().join("out.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["profiles"][0]["key"], "fsct");
        assert!(value.get("comprehensive").is_none());
    }
}
