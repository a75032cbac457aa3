//! Dependency graph reachability analysis.
//!
//! Decides whether the declared dependency relationships of a document form
//! a structurally complete graph rooted at the primary component: every
//! declaration references known components, the primary declares its own
//! dependencies, and every component can be reached from the primary.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::features::FeatureScore;
use crate::model::{DependencyDeclaration, SbomDocument};

/// Structural classification of a dependency graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphStatus {
    /// No primary component could be identified
    MissingPrimary,
    /// The document declares no dependency relationships at all
    MissingDependencies,
    /// The primary has no outgoing edges while other components do
    PrimaryUndeclared,
    /// A declaration's source is not a known component
    UndefinedSource,
    /// A declaration's target is not a known component
    UndefinedTarget,
    /// Some components cannot be reached from the primary
    PartiallyReachable,
    /// Every component is reachable from the primary
    Complete,
}

impl GraphStatus {
    /// Score for this classification (0-10)
    #[must_use]
    pub const fn score(&self) -> f64 {
        match self {
            Self::Complete => 10.0,
            Self::PartiallyReachable => 5.0,
            _ => 0.0,
        }
    }

    /// Human-readable description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::MissingPrimary => "Primary component is missing",
            Self::MissingDependencies => "Dependency information is missing",
            Self::PrimaryUndeclared => "Primary component does not declare its dependencies",
            Self::UndefinedSource => "Dependency source references undefined component",
            Self::UndefinedTarget => "Dependency target references undefined component",
            Self::PartiallyReachable => {
                "Some components are not reachable from the primary component"
            }
            Self::Complete => "Dependencies are recursively declared and structurally complete",
        }
    }
}

/// Outcome of a reachability analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphAssessment {
    /// Structural classification
    pub status: GraphStatus,
    /// Components reached from the primary (0 when traversal did not run)
    pub reachable: usize,
    /// Total known components
    pub total: usize,
    /// First offending id for undefined-reference failures
    pub offending_id: Option<String>,
}

impl GraphAssessment {
    fn failed(status: GraphStatus, total: usize) -> Self {
        Self {
            status,
            reachable: 0,
            total,
            offending_id: None,
        }
    }

    /// Score for this assessment (0-10)
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.status.score()
    }

    /// Convert into a feature score; graph defects are quality findings, never N/A
    #[must_use]
    pub fn to_feature_score(&self) -> FeatureScore {
        let desc = match (&self.status, &self.offending_id) {
            (GraphStatus::PartiallyReachable, _) => format!(
                "{} ({}/{} reachable)",
                self.status.description(),
                self.reachable,
                self.total
            ),
            (_, Some(id)) => format!("{} ({id})", self.status.description()),
            _ => self.status.description().to_string(),
        };
        FeatureScore::new(self.score(), desc)
    }
}

/// Analyze the dependency graph of a document rooted at its primary component.
#[must_use]
pub fn analyze_document(doc: &SbomDocument) -> GraphAssessment {
    let primary = doc
        .primary_component_id
        .as_deref()
        .filter(|id| !id.trim().is_empty());
    let ids = doc.component_ids();
    analyze(primary, &ids, &doc.dependencies)
}

/// Analyze reachability from `primary` over the given component id set.
///
/// Cost is O(V + E); each component is visited at most once, so cycles
/// terminate and do not lower the score.
#[must_use]
pub fn analyze(
    primary: Option<&str>,
    component_ids: &HashSet<&str>,
    declarations: &[DependencyDeclaration],
) -> GraphAssessment {
    let total = component_ids.len();

    // A primary id naming no known component cannot root the traversal
    let Some(primary) = primary.filter(|id| component_ids.contains(id)) else {
        return GraphAssessment::failed(GraphStatus::MissingPrimary, total);
    };

    if declarations.is_empty() {
        return GraphAssessment::failed(GraphStatus::MissingDependencies, total);
    }

    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    for decl in declarations {
        adjacency
            .entry(decl.source.as_str())
            .or_default()
            .extend(decl.depends_on.iter().map(String::as_str));
    }

    let primary_has_edges = adjacency.get(primary).is_some_and(|t| !t.is_empty());
    let others_have_edges = adjacency
        .iter()
        .any(|(source, targets)| *source != primary && !targets.is_empty());
    if !primary_has_edges && others_have_edges {
        return GraphAssessment::failed(GraphStatus::PrimaryUndeclared, total);
    }

    for decl in declarations {
        if !component_ids.contains(decl.source.as_str()) {
            return GraphAssessment {
                offending_id: Some(decl.source.clone()),
                ..GraphAssessment::failed(GraphStatus::UndefinedSource, total)
            };
        }
        if let Some(target) = decl
            .depends_on
            .iter()
            .find(|t| !component_ids.contains(t.as_str()))
        {
            return GraphAssessment {
                offending_id: Some(target.clone()),
                ..GraphAssessment::failed(GraphStatus::UndefinedTarget, total)
            };
        }
    }

    let visited = reachable_from(primary, &adjacency);
    let reachable = component_ids.iter().filter(|id| visited.contains(*id)).count();

    let status = if reachable == total {
        GraphStatus::Complete
    } else {
        GraphStatus::PartiallyReachable
    };

    tracing::debug!(
        primary,
        reachable,
        total,
        status = ?status,
        "Dependency graph analyzed"
    );

    GraphAssessment {
        status,
        reachable,
        total,
        offending_id: None,
    }
}

/// Iterative depth-first walk with an explicit stack and visited set.
fn reachable_from<'a>(
    start: &'a str,
    adjacency: &HashMap<&'a str, Vec<&'a str>>,
) -> HashSet<&'a str> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        if !visited.insert(node) {
            continue;
        }
        if let Some(targets) = adjacency.get(node) {
            stack.extend(targets.iter().rev().filter(|t| !visited.contains(*t)));
        }
    }

    visited
}
