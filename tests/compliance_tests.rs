//! Profile compliance against fixture documents.

use std::path::{Path, PathBuf};

use sbom_score::model::SbomDocument;
use sbom_score::pipeline::{evaluate_files, EvaluationRequest};
use sbom_score::{
    load_document, Catalog, CompliancePolicy, ComplianceVerdict, ProfileConfig, ProfileEvaluator,
};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load(name: &str) -> SbomDocument {
    load_document(&fixture(name)).expect("fixture should load")
}

#[test]
fn test_complete_document_passes_standard_profiles() {
    let doc = load("complete.cdx.json");
    let catalog = Catalog::standard();
    let results = ProfileEvaluator::new(&catalog).evaluate(&["ntia", "bsi-v2.0", "fsct"], &doc);

    assert_eq!(results.len(), 3);
    for result in &results {
        let failed: Vec<_> = result.failed_required().map(|i| i.key.as_str()).collect();
        assert!(failed.is_empty(), "{} failed {failed:?}", result.key);
        assert_eq!(
            result.verdict(CompliancePolicy::AllRequiredPass),
            ComplianceVerdict::Pass
        );
        assert!((result.required_score - 10.0).abs() < 1e-9);
    }
}

#[test]
fn test_sparse_document_fails_ntia() {
    let doc = load("sparse.spdx.json");
    let catalog = Catalog::standard();
    let ntia = ProfileEvaluator::new(&catalog)
        .evaluate_profile("ntia", &doc)
        .unwrap();

    assert_eq!(ntia.verdict(CompliancePolicy::AllRequiredPass), ComplianceVerdict::Fail);

    let failed: Vec<&str> = ntia.failed_required().map(|i| i.key.as_str()).collect();
    for key in [
        "ntia_comp_supplier",
        "ntia_comp_version",
        "ntia_dependencies",
        "ntia_sbom_timestamp",
    ] {
        assert!(failed.contains(&key), "{key} should fail, got {failed:?}");
    }
    // the exporter tool stands in for an author
    assert!(!failed.contains(&"ntia_sbom_author"));
    assert!(ntia.compliance.required_passed < ntia.compliance.required_total);
    assert_eq!(
        ntia.message,
        format!(
            "{}/{} required checks passed",
            ntia.compliance.required_passed, ntia.compliance.required_total
        )
    );
}

#[test]
fn test_threshold_policy_is_independent_of_required_items() {
    let doc = load("sparse.spdx.json");
    let catalog = Catalog::standard();
    let ntia = ProfileEvaluator::new(&catalog)
        .evaluate_profile("ntia", &doc)
        .unwrap();

    let lenient: CompliancePolicy = "threshold:0".parse().unwrap();
    assert_eq!(ntia.verdict(lenient), ComplianceVerdict::Pass);

    let strict: CompliancePolicy = "threshold:10".parse().unwrap();
    assert_eq!(ntia.verdict(strict), ComplianceVerdict::Fail);
}

#[test]
fn test_old_spdx_version_fails_bsi_v2() {
    let doc = load("sparse.spdx.json");
    let catalog = Catalog::standard();
    let bsi = ProfileEvaluator::new(&catalog)
        .evaluate_profile("bsi-v2.0", &doc)
        .unwrap();
    let spec_version = bsi
        .items
        .iter()
        .find(|i| i.key == "bsi_v2.0_sbom_spec_version")
        .unwrap();
    assert!(!spec_version.passed);
    assert!(spec_version.desc.contains("below the required 2.3.0"));
}

#[test]
fn test_custom_profiles_from_file() {
    let profiles = ProfileConfig::load(&fixture("profiles.yaml")).unwrap();
    let catalog = profiles.apply_to(&Catalog::standard());
    assert!(catalog.has_profile("ntia"));

    let spec = catalog.profile("firmware-release").unwrap();
    assert_eq!(spec.name, "Firmware Release");
    assert_eq!(
        spec.features,
        vec![
            "comp_with_name",
            "comp_with_version",
            "comp_with_strong_checksums",
            "ntia_dependencies",
            "fsct_comp_copyright",
        ]
    );

    let complete = load("complete.cdx.json");
    let result = ProfileEvaluator::new(&catalog)
        .evaluate_profile("firmware-release", &complete)
        .unwrap();
    assert_eq!(result.verdict(CompliancePolicy::AllRequiredPass), ComplianceVerdict::Pass);
    assert_eq!(result.compliance.required_total, 4);
    assert_eq!(result.compliance.optional_total, 1);

    let sparse = load("sparse.spdx.json");
    let result = ProfileEvaluator::new(&catalog)
        .evaluate_profile("firmware-release", &sparse)
        .unwrap();
    assert_eq!(result.verdict(CompliancePolicy::AllRequiredPass), ComplianceVerdict::Fail);
}

#[test]
fn test_profile_with_no_applicable_items_is_skipped() {
    let catalog = Catalog::standard();
    let doc = SbomDocument::default();
    let result = ProfileEvaluator::new(&catalog)
        .evaluate_profile("fsct", &doc)
        .unwrap();
    // document-level items still apply, so the profile is judged
    assert_ne!(result.verdict(CompliancePolicy::AllRequiredPass), ComplianceVerdict::Skipped);

    let only_components = ProfileConfig::parse(
        "profiles:\n  - name: components\n    features: [comp_with_name, comp_with_version]\n",
    )
    .unwrap()
    .apply_to(&catalog);
    let result = ProfileEvaluator::new(&only_components)
        .evaluate_profile("components", &doc)
        .unwrap();
    assert!(result.all_ignored());
    assert_eq!(result.verdict(CompliancePolicy::AllRequiredPass), ComplianceVerdict::Skipped);
}

#[test]
fn test_parallel_evaluation_preserves_order() {
    let catalog = Catalog::standard();
    let request = EvaluationRequest::compliance(vec!["NTIA".to_string()])
        .resolve(&catalog)
        .unwrap();
    let paths = vec![
        fixture("sparse.spdx.json"),
        fixture("missing.json"),
        fixture("complete.cdx.json"),
        fixture("partial_graph.cdx.json"),
    ];

    let results = evaluate_files(&catalog, &request, &paths);
    assert_eq!(results.len(), 4);
    assert!(results[1].is_err());

    let verdicts: Vec<_> = [0, 2, 3]
        .iter()
        .map(|&i| {
            let report = results[i].as_ref().unwrap();
            assert_eq!(report.file, paths[i]);
            report.profiles[0].verdict(CompliancePolicy::AllRequiredPass)
        })
        .collect();
    assert_eq!(
        verdicts,
        vec![ComplianceVerdict::Fail, ComplianceVerdict::Pass, ComplianceVerdict::Fail]
    );
}
