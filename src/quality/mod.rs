//! SBOM quality scoring and compliance evaluation.
//!
//! The engine has four parts:
//!
//! - **Formulae**: pure score arithmetic (per-component ratios, weighted
//!   renormalization, grades)
//! - **Catalog**: immutable registry binding feature keys to evaluators and
//!   grouping them into weighted categories and compliance profiles
//! - **Graph**: dependency reachability analysis rooted at the primary component
//! - **Evaluators**: comprehensive category scoring and profile compliance
//!
//! # Usage
//!
//! ```no_run
//! use sbom_score::model::SbomDocument;
//! use sbom_score::quality::{Catalog, ComprehensiveEvaluator, ProfileEvaluator};
//!
//! let doc = SbomDocument::default();
//! let catalog = Catalog::standard();
//!
//! let result = ComprehensiveEvaluator::new(&catalog).evaluate_all(&doc);
//! println!("Overall: {:.1} ({})", result.overall_score, result.grade);
//!
//! for profile in ProfileEvaluator::new(&catalog).evaluate(&["ntia"], &doc) {
//!     println!("{}: {}", profile.name, profile.message);
//! }
//! ```

mod catalog;
mod comprehensive;
pub mod features;
mod formulae;
pub mod graph;
mod profiles;

pub use catalog::{
    Catalog, CatalogBuilder, CategorySpec, EvaluateFn, FeatureSpec, ProfileFeatureSpec,
    ProfileSpec,
};
pub use comprehensive::{CategoryResult, ComprehensiveEvaluator, ComprehensiveResult, FeatureResult};
pub use features::FeatureScore;
pub use formulae::{
    applicable_item_score, boolean_score, category_score, clamp_score, overall_score,
    per_component_score, profile_score, Grade, MAX_SCORE,
};
pub use graph::{GraphAssessment, GraphStatus};
pub use profiles::{
    ComplianceSummary, CompliancePolicy, ComplianceVerdict, ProfileEvaluator, ProfileFeatureResult,
    ProfileResult,
};
