//! End-to-end tests for comprehensive scoring.

use std::path::{Path, PathBuf};

use sbom_score::model::SbomDocument;
use sbom_score::quality::features::NO_COMPONENTS;
use sbom_score::quality::graph::{analyze_document, GraphStatus};
use sbom_score::quality::{Catalog, ComprehensiveEvaluator, Grade};
use sbom_score::{load_document, parse_document_str};

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
fn test_complete_document_scores_perfect() {
    let doc = load("complete.cdx.json");
    let catalog = Catalog::standard();
    let result = ComprehensiveEvaluator::new(&catalog).evaluate_all(&doc);

    assert_eq!(result.categories.len(), 8);
    for category in &result.categories {
        assert!(
            (category.score - 10.0).abs() < 1e-9,
            "{} scored {}",
            category.key,
            category.score
        );
    }
    assert!((result.overall_score - 10.0).abs() < 1e-9);
    assert_eq!(result.grade, Grade::A);

    // CycloneDX has no data license field
    let data_license = result.feature("sbom_data_license").unwrap();
    assert!(data_license.ignored);
}

#[test]
fn test_sparse_document_findings() {
    let doc = load("sparse.spdx.json");
    let catalog = Catalog::standard();
    let result = ComprehensiveEvaluator::new(&catalog).evaluate_all(&doc);

    let version = result.feature("comp_with_version").unwrap();
    assert!((version.score - 20.0 / 3.0).abs() < 1e-9);
    assert_eq!(version.desc, "2/3 have versions");

    let tool = result.feature("sbom_tool_version").unwrap();
    assert_eq!(tool.score, 5.0);

    let data_license = result.feature("sbom_data_license").unwrap();
    assert!(!data_license.ignored);
    assert_eq!(data_license.score, 0.0);

    // openssl carries a deprecated, copyleft id; curl has no license at all
    let restrictive = result.feature("comp_no_restrictive_licenses").unwrap();
    assert_eq!(restrictive.score, 5.0);
    let deprecated = result.feature("comp_no_deprecated_licenses").unwrap();
    assert_eq!(deprecated.score, 5.0);

    let strong = result.feature("comp_with_strong_checksums").unwrap();
    assert_eq!(strong.score, 0.0);

    let valid_purl = result.feature("comp_valid_purl").unwrap();
    assert!(valid_purl.desc.starts_with("0/1 "));
    assert_eq!(valid_purl.score, 0.0);

    assert!(result.overall_score < 7.0);
    assert!(matches!(result.grade, Grade::D | Grade::F));
}

#[test]
fn test_zero_components_is_not_applicable() {
    let doc = parse_document_str("{}").unwrap();
    let catalog = Catalog::standard();
    let result = ComprehensiveEvaluator::new(&catalog).evaluate_all(&doc);

    let per_component: Vec<_> = result
        .categories
        .iter()
        .flat_map(|c| &c.features)
        .filter(|f| f.key.starts_with("comp_"))
        .collect();
    assert!(!per_component.is_empty());
    for feature in per_component {
        assert!(feature.ignored, "{} should be N/A", feature.key);
        assert_eq!(feature.score, 0.0);
        assert_eq!(feature.desc, NO_COMPONENTS);
    }

    // every identification feature is per-component, so nothing is applicable
    let identification = result.category("identification").unwrap();
    assert_eq!(identification.applicable_count(), 0);
    assert_eq!(identification.score, 0.0);
}

#[test]
fn test_selected_categories_only() {
    let doc = load("complete.cdx.json");
    let catalog = Catalog::standard();
    let result = ComprehensiveEvaluator::new(&catalog)
        .evaluate(&["licensing", "no-such-category", "structural"], &doc);

    let keys: Vec<_> = result.categories.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["licensing", "structural"]);
}

#[test]
fn test_informational_category_does_not_move_overall() {
    let catalog = Catalog::standard();
    let evaluator = ComprehensiveEvaluator::new(&catalog);
    let doc = load("sparse.spdx.json");

    let without = evaluator.evaluate(&["identification", "licensing"], &doc);
    let with = evaluator.evaluate(&["identification", "licensing", "compinfo"], &doc);

    assert!(with.category("compinfo").unwrap().informational);
    assert!((without.overall_score - with.overall_score).abs() < 1e-12);
}

#[test]
fn test_partial_graph_fixture() {
    let doc = load("partial_graph.cdx.json");
    let assessment = analyze_document(&doc);
    assert_eq!(assessment.status, GraphStatus::PartiallyReachable);
    assert_eq!(assessment.reachable, 3);
    assert_eq!(assessment.total, 4);
    assert_eq!(assessment.score(), 5.0);
}

#[test]
fn test_missing_primary_in_sparse_fixture() {
    let doc = load("sparse.spdx.json");
    assert_eq!(analyze_document(&doc).status, GraphStatus::MissingPrimary);
}
