//! Evaluation stage.
//!
//! Runs the comprehensive and profile evaluators over one or many
//! documents. Many files are evaluated in parallel; results keep the input
//! order.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use super::load::load_document;
use crate::error::{Result, SbomScoreError};
use crate::model::SbomDocument;
use crate::quality::{Catalog, ComprehensiveEvaluator, ProfileEvaluator};
use crate::reports::DocumentReport;

/// What to evaluate for each document.
///
/// Keys must already be canonical; use [`EvaluationRequest::resolve`] to
/// turn user input into keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluationRequest {
    /// Run comprehensive scoring
    pub comprehensive: bool,
    /// Category keys; empty means every category
    pub categories: Vec<String>,
    /// Profile keys
    pub profiles: Vec<String>,
}

impl EvaluationRequest {
    /// Comprehensive scoring over the given categories (all when empty)
    #[must_use]
    pub fn score(categories: Vec<String>) -> Self {
        Self {
            comprehensive: true,
            categories,
            profiles: Vec::new(),
        }
    }

    /// Profile compliance only
    #[must_use]
    pub fn compliance(profiles: Vec<String>) -> Self {
        Self {
            comprehensive: false,
            categories: Vec::new(),
            profiles,
        }
    }

    /// Resolve user-supplied category and profile names against `catalog`.
    ///
    /// Unknown names are a hard error here, unlike in the evaluators,
    /// since they come straight from the user. A compliance-only request
    /// must name at least one profile.
    pub fn resolve(mut self, catalog: &Catalog) -> Result<Self> {
        if !self.comprehensive && self.profiles.is_empty() {
            return Err(SbomScoreError::validation(
                "No profiles selected. \
                 Pass --profile or set compliance.profiles in the config file",
            ));
        }
        self.categories = resolve_all(&self.categories, "category", |name| {
            catalog.resolve_category_alias(name)
        })?;
        self.profiles = resolve_all(&self.profiles, "profile", |name| {
            catalog.resolve_profile_alias(name)
        })?;
        Ok(self)
    }
}

fn resolve_all<'a, F>(names: &[String], kind: &str, lookup: F) -> Result<Vec<String>>
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut keys: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        let key = lookup(name).ok_or_else(|| {
            SbomScoreError::config(format!(
                "unknown {kind} '{name}' (see `sbom-score list`)"
            ))
        })?;
        if !keys.iter().any(|k| k == key) {
            keys.push(key.to_string());
        }
    }
    Ok(keys)
}

/// Evaluate one loaded document
#[must_use]
pub fn evaluate_document(
    catalog: &Catalog,
    request: &EvaluationRequest,
    doc: &SbomDocument,
    file: &Path,
) -> DocumentReport {
    let mut report = DocumentReport::new(file);

    if request.comprehensive {
        let evaluator = ComprehensiveEvaluator::new(catalog);
        report.comprehensive = Some(if request.categories.is_empty() {
            evaluator.evaluate_all(doc)
        } else {
            evaluator.evaluate(request.categories.as_slice(), doc)
        });
    }

    if !request.profiles.is_empty() {
        report.profiles = ProfileEvaluator::new(catalog).evaluate(request.profiles.as_slice(), doc);
    }

    match &report.comprehensive {
        Some(result) => tracing::info!(
            "Evaluated {} ({} components): {:.1}/10 grade {}",
            file.display(),
            doc.component_count(),
            result.overall_score,
            result.grade
        ),
        None => tracing::info!(
            "Evaluated {} ({} components) against {} profile(s)",
            file.display(),
            doc.component_count(),
            report.profiles.len()
        ),
    }

    report
}

/// Load and evaluate one file
pub fn evaluate_file(
    catalog: &Catalog,
    request: &EvaluationRequest,
    path: &Path,
) -> Result<DocumentReport> {
    let doc = load_document(path)?;
    Ok(evaluate_document(catalog, request, &doc, path))
}

/// Load and evaluate many files in parallel, returning results in input order
#[must_use]
pub fn evaluate_files(
    catalog: &Catalog,
    request: &EvaluationRequest,
    paths: &[PathBuf],
) -> Vec<Result<DocumentReport>> {
    paths
        .par_iter()
        .map(|path| evaluate_file(catalog, request, path))
        .collect()
}
