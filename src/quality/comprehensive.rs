//! Comprehensive quality scoring.
//!
//! Runs every feature of the requested categories against a document,
//! scores each category as the weighted mean of its applicable features,
//! and combines categories into an overall score and grade.

use serde::{Deserialize, Serialize};

use super::catalog::Catalog;
use super::formulae::{category_score, overall_score, Grade};
use crate::model::SbomDocument;

/// Result of one feature evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureResult {
    pub key: String,
    pub name: String,
    pub weight: f64,
    pub score: f64,
    pub desc: String,
    pub ignored: bool,
}

/// Result of one category evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    pub key: String,
    pub name: String,
    pub weight: f64,
    pub score: f64,
    /// Reported only; excluded from the overall score
    pub informational: bool,
    pub features: Vec<FeatureResult>,
}

impl CategoryResult {
    /// Number of features that were applicable to the document
    #[must_use]
    pub fn applicable_count(&self) -> usize {
        self.features.iter().filter(|f| !f.ignored).count()
    }
}

/// Full result of a comprehensive evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComprehensiveResult {
    /// Categories in the order they were requested
    pub categories: Vec<CategoryResult>,
    /// Weighted mean of non-informational category scores
    pub overall_score: f64,
    pub grade: Grade,
}

impl ComprehensiveResult {
    /// Get a category result by key
    #[must_use]
    pub fn category(&self, key: &str) -> Option<&CategoryResult> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Find a feature result by key across all categories
    #[must_use]
    pub fn feature(&self, key: &str) -> Option<&FeatureResult> {
        self.categories
            .iter()
            .flat_map(|c| &c.features)
            .find(|f| f.key == key)
    }
}

/// Evaluates categories of a [`Catalog`] against documents
#[derive(Debug, Clone, Copy)]
pub struct ComprehensiveEvaluator<'a> {
    catalog: &'a Catalog,
}

impl<'a> ComprehensiveEvaluator<'a> {
    /// Create an evaluator over a catalog
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Evaluate every registered category in registration order
    #[must_use]
    pub fn evaluate_all(&self, doc: &SbomDocument) -> ComprehensiveResult {
        let keys = self.catalog.category_keys();
        self.evaluate(&keys, doc)
    }

    /// Evaluate the given categories, preserving the requested order.
    ///
    /// Category and feature keys without a registered spec are skipped.
    #[must_use]
    pub fn evaluate<S: AsRef<str>>(
        &self,
        category_keys: &[S],
        doc: &SbomDocument,
    ) -> ComprehensiveResult {
        let categories: Vec<CategoryResult> = category_keys
            .iter()
            .filter_map(|key| self.evaluate_category(key.as_ref(), doc))
            .collect();

        let overall = overall_score(&categories);
        ComprehensiveResult {
            categories,
            overall_score: overall,
            grade: Grade::from_score(overall),
        }
    }

    /// Evaluate a single category; `None` if the key is not registered
    #[must_use]
    pub fn evaluate_category(&self, key: &str, doc: &SbomDocument) -> Option<CategoryResult> {
        let Some(spec) = self.catalog.category(key) else {
            tracing::warn!(category = key, "Skipping unknown category");
            return None;
        };

        let mut features = Vec::with_capacity(spec.features.len());
        for feature_key in &spec.features {
            let Some(feature) = self.catalog.feature(feature_key) else {
                tracing::warn!(
                    category = key,
                    feature = feature_key.as_str(),
                    "Skipping unknown feature"
                );
                continue;
            };
            let outcome = (feature.evaluate)(doc);
            tracing::debug!(
                feature = feature.key.as_str(),
                score = outcome.score,
                ignored = outcome.ignore,
                "Evaluated feature"
            );
            features.push(FeatureResult {
                key: feature.key.clone(),
                name: feature.name.clone(),
                weight: feature.weight,
                score: outcome.score,
                desc: outcome.desc,
                ignored: outcome.ignore,
            });
        }

        let score = category_score(&features);
        tracing::debug!(category = key, score, "Evaluated category");

        Some(CategoryResult {
            key: spec.key.clone(),
            name: spec.name.clone(),
            weight: spec.weight,
            score,
            informational: spec.is_informational(),
            features,
        })
    }
}
