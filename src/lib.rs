//! **Quality scoring and compliance checks for Software Bills of Materials (SBOMs).**
//!
//! `sbom-score` grades a normalized SBOM document on a 0-10 scale across
//! weighted quality categories and checks it against compliance profiles
//! such as the NTIA Minimum Elements, BSI TR-03183-2 and the CISA
//! Framing Software Component Transparency (FSCT) baseline.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the read-only [`SbomDocument`]. `CycloneDX` and SPDX
//!   documents are normalized into this shape before scoring.
//! - **[`quality`]**: the scoring engine. A [`Catalog`] binds feature keys
//!   to evaluators and groups them into categories and profiles; the
//!   [`ComprehensiveEvaluator`] and [`ProfileEvaluator`] run them. Scoring
//!   never fails: missing data lowers scores, it does not raise errors.
//! - **[`config`]**: `.sbom-score.yaml` discovery and custom profile files.
//! - **[`pipeline`]**: load → evaluate → report, with parallel evaluation
//!   of many documents.
//! - **[`reports`]**: summary, detailed and JSON renderers.
//!
//! ## Getting Started
//!
//! ```no_run
//! use std::path::Path;
//! use sbom_score::{load_document, Catalog, ComprehensiveEvaluator, ProfileEvaluator};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let doc = load_document(Path::new("sbom.json"))?;
//!     let catalog = Catalog::standard();
//!
//!     let result = ComprehensiveEvaluator::new(&catalog).evaluate_all(&doc);
//!     println!("Score: {:.1}/10 ({})", result.overall_score, result.grade);
//!
//!     for category in &result.categories {
//!         println!("  {:<30} {:.1}", category.name, category.score);
//!     }
//!
//!     for profile in ProfileEvaluator::new(&catalog).evaluate(&["ntia", "fsct"], &doc) {
//!         println!("{}: {}", profile.name, profile.message);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Custom Profiles
//!
//! ```no_run
//! use sbom_score::{Catalog, ProfileConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let profiles = ProfileConfig::load(std::path::Path::new("profiles.yaml"))?;
//!     let catalog = profiles.apply_to(&Catalog::standard());
//!     assert!(catalog.profiles().count() >= 4);
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Component counts are converted to f64 for ratios
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod quality;
pub mod reports;

// Re-export main types for convenience
pub use config::{ConfigError, ProfileConfig, ScoreConfig, Validatable};
pub use error::{ErrorContext, Result, SbomScoreError};
pub use model::{Component, DependencyDeclaration, SbomDocument};
pub use pipeline::{load_document, parse_document_str};
pub use quality::{
    Catalog, CatalogBuilder, CompliancePolicy, ComplianceVerdict, ComprehensiveEvaluator,
    ComprehensiveResult, Grade, ProfileEvaluator, ProfileResult,
};
pub use reports::{ReportFormat, ReportGenerator};
