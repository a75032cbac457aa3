//! Feature evaluator bodies.
//!
//! Every evaluator is a plain function `fn(&SbomDocument) -> FeatureScore`
//! that reads the document and never fails: anything that cannot be scored
//! meaningfully is reported as not applicable instead.

mod component;
mod document;
mod profile;

pub use component::*;
pub use document::*;
pub use profile::*;

use serde::{Deserialize, Serialize};

use super::formulae::{boolean_score, clamp_score, per_component_score};
use crate::model::{Component, SbomDocument};

/// Description used by per-component features on documents without components
pub const NO_COMPONENTS: &str = "N/A (no components)";

/// Output of a single evaluator run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureScore {
    /// Score in `[0, 10]`
    pub score: f64,
    /// Human-readable explanation
    pub desc: String,
    /// Not applicable to this document; excluded from aggregation
    pub ignore: bool,
}

impl FeatureScore {
    /// An applicable score, clamped into `[0, 10]`
    #[must_use]
    pub fn new(score: f64, desc: impl Into<String>) -> Self {
        Self {
            score: clamp_score(score),
            desc: desc.into(),
            ignore: false,
        }
    }

    /// A not-applicable result with score 0
    #[must_use]
    pub fn not_applicable(desc: impl Into<String>) -> Self {
        Self {
            score: 0.0,
            desc: desc.into(),
            ignore: true,
        }
    }

    /// Score a boolean property
    #[must_use]
    pub fn boolean(present: bool, yes: &str, no: &str) -> Self {
        Self::new(boolean_score(present), if present { yes } else { no })
    }
}

/// Score the share of components satisfying `predicate`.
pub(crate) fn per_component<F>(doc: &SbomDocument, label: &str, predicate: F) -> FeatureScore
where
    F: Fn(&Component) -> bool,
{
    let total = doc.component_count();
    if total == 0 {
        return FeatureScore::not_applicable(NO_COMPONENTS);
    }
    let have = doc.count_components(predicate);
    FeatureScore::new(
        per_component_score(have, total),
        format!("{have}/{total} {label}"),
    )
}

/// Score the share of `eligible` components satisfying `predicate`.
///
/// Used by checks that only make sense for a subset (e.g., licensed
/// components); an empty subset is not applicable.
pub(crate) fn per_eligible_component<E, F>(
    doc: &SbomDocument,
    label: &str,
    eligible: E,
    predicate: F,
) -> FeatureScore
where
    E: Fn(&Component) -> bool,
    F: Fn(&Component) -> bool,
{
    if doc.components.is_empty() {
        return FeatureScore::not_applicable(NO_COMPONENTS);
    }
    let subset: Vec<&Component> = doc.components.iter().filter(|c| eligible(c)).collect();
    if subset.is_empty() {
        return FeatureScore::not_applicable(format!("N/A (no {label})"));
    }
    let have = subset.iter().filter(|c| predicate(c)).count();
    FeatureScore::new(
        per_component_score(have, subset.len()),
        format!("{have}/{} {label}", subset.len()),
    )
}
