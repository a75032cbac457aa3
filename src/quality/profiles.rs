//! Profile compliance evaluation.
//!
//! A profile is a list of required and optional checks that mirrors an
//! external standard (NTIA, BSI TR-03183-2, FSCT). Each item passes or
//! fails on its own; how those item outcomes combine into a single verdict
//! is a separate, explicit [`CompliancePolicy`] decision.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::catalog::Catalog;
use super::features::FeatureScore;
use super::formulae::{applicable_item_score, profile_score, Grade, MAX_SCORE};
use crate::model::SbomDocument;

/// Result of one profile item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileFeatureResult {
    pub key: String,
    pub name: String,
    pub required: bool,
    pub score: f64,
    pub passed: bool,
    pub ignored: bool,
    pub desc: String,
}

impl ProfileFeatureResult {
    /// Decide whether an item passes.
    ///
    /// A not-applicable required item fails and a not-applicable optional
    /// item passes. Otherwise required items need full marks and optional
    /// items pass on any positive score.
    #[must_use]
    pub fn item_passes(required: bool, outcome: &FeatureScore) -> bool {
        if outcome.ignore {
            !required
        } else if required {
            outcome.score >= MAX_SCORE
        } else {
            outcome.score > 0.0
        }
    }
}

/// Counts of passed items by kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceSummary {
    pub required_total: usize,
    pub required_passed: usize,
    pub optional_total: usize,
    pub optional_passed: usize,
}

impl ComplianceSummary {
    fn from_items(items: &[ProfileFeatureResult]) -> Self {
        items.iter().fold(Self::default(), |mut acc, item| {
            if item.required {
                acc.required_total += 1;
                acc.required_passed += usize::from(item.passed);
            } else {
                acc.optional_total += 1;
                acc.optional_passed += usize::from(item.passed);
            }
            acc
        })
    }

    /// Whether every required item passed
    #[must_use]
    pub const fn all_required_passed(&self) -> bool {
        self.required_passed == self.required_total
    }
}

/// Result of one profile evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileResult {
    pub key: String,
    pub name: String,
    pub description: String,
    /// Mean score of applicable items
    pub score: f64,
    /// Mean score of required items
    pub required_score: f64,
    pub grade: Grade,
    pub compliance: ComplianceSummary,
    /// "N/M required checks passed"
    pub message: String,
    pub items: Vec<ProfileFeatureResult>,
}

impl ProfileResult {
    /// Whether no item was applicable to the document
    #[must_use]
    pub fn all_ignored(&self) -> bool {
        self.items.iter().all(|i| i.ignored)
    }

    /// Required items that did not pass
    pub fn failed_required(&self) -> impl Iterator<Item = &ProfileFeatureResult> {
        self.items.iter().filter(|i| i.required && !i.passed)
    }

    /// Apply a compliance policy to this result
    #[must_use]
    pub fn verdict(&self, policy: CompliancePolicy) -> ComplianceVerdict {
        if self.all_ignored() {
            return ComplianceVerdict::Skipped;
        }
        let compliant = match policy {
            CompliancePolicy::AllRequiredPass => self.compliance.all_required_passed(),
            CompliancePolicy::ScoreThreshold(threshold) => self.score >= threshold,
        };
        if compliant {
            ComplianceVerdict::Pass
        } else {
            ComplianceVerdict::Fail
        }
    }
}

/// How item outcomes combine into a profile verdict
///
/// Serialized as `all-required` or `threshold:N`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CompliancePolicy {
    /// Every required item must pass
    #[default]
    AllRequiredPass,
    /// The profile score must reach the threshold (0-10)
    ScoreThreshold(f64),
}

impl fmt::Display for CompliancePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllRequiredPass => write!(f, "all-required"),
            Self::ScoreThreshold(t) => write!(f, "threshold:{t}"),
        }
    }
}

impl FromStr for CompliancePolicy {
    type Err = String;

    /// Parse `all-required` or `threshold:N` with `N` in `[0, 10]`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if s == "all-required" || s == "all_required" {
            return Ok(Self::AllRequiredPass);
        }
        let Some(raw) = s.strip_prefix("threshold:") else {
            return Err(format!(
                "unknown policy '{s}' (expected 'all-required' or 'threshold:N')"
            ));
        };
        let threshold: f64 = raw
            .trim()
            .parse()
            .map_err(|_| format!("invalid threshold '{raw}'"))?;
        if !(0.0..=MAX_SCORE).contains(&threshold) {
            return Err(format!("threshold {threshold} must be between 0 and 10"));
        }
        Ok(Self::ScoreThreshold(threshold))
    }
}

impl TryFrom<String> for CompliancePolicy {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CompliancePolicy> for String {
    fn from(policy: CompliancePolicy) -> Self {
        policy.to_string()
    }
}

/// Verdict of a profile under a policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComplianceVerdict {
    Pass,
    Fail,
    /// Nothing in the profile applied to the document
    Skipped,
}

impl fmt::Display for ComplianceVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Skipped => "SKIPPED",
        })
    }
}

/// Evaluates profiles of a [`Catalog`] against documents
#[derive(Debug, Clone, Copy)]
pub struct ProfileEvaluator<'a> {
    catalog: &'a Catalog,
}

impl<'a> ProfileEvaluator<'a> {
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Evaluate the given profiles in order; unknown keys are skipped
    #[must_use]
    pub fn evaluate<S: AsRef<str>>(
        &self,
        profile_keys: &[S],
        doc: &SbomDocument,
    ) -> Vec<ProfileResult> {
        profile_keys
            .iter()
            .filter_map(|key| self.evaluate_profile(key.as_ref(), doc))
            .collect()
    }

    /// Evaluate a single profile; `None` if the key is not registered
    #[must_use]
    pub fn evaluate_profile(&self, key: &str, doc: &SbomDocument) -> Option<ProfileResult> {
        let Some(spec) = self.catalog.profile(key) else {
            tracing::warn!(profile = key, "Skipping unknown profile");
            return None;
        };

        let mut items = Vec::with_capacity(spec.features.len());
        for item_key in &spec.features {
            let Some(item) = self.catalog.profile_feature(item_key) else {
                tracing::warn!(
                    profile = key,
                    item = item_key.as_str(),
                    "Skipping unknown profile item"
                );
                continue;
            };
            let outcome = (item.evaluate)(doc);
            let passed = ProfileFeatureResult::item_passes(item.required, &outcome);
            tracing::debug!(
                item = item.key.as_str(),
                required = item.required,
                score = outcome.score,
                passed,
                "Evaluated profile item"
            );
            items.push(ProfileFeatureResult {
                key: item.key.clone(),
                name: item.name.clone(),
                required: item.required,
                score: outcome.score,
                passed,
                ignored: outcome.ignore,
                desc: outcome.desc,
            });
        }

        let score = applicable_item_score(&items);
        let compliance = ComplianceSummary::from_items(&items);
        Some(ProfileResult {
            key: spec.key.clone(),
            name: spec.name.clone(),
            description: spec.description.clone(),
            score,
            required_score: profile_score(&items),
            grade: Grade::from_score(score),
            message: format!(
                "{}/{} required checks passed",
                compliance.required_passed, compliance.required_total
            ),
            compliance,
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(score: f64, ignore: bool) -> FeatureScore {
        FeatureScore {
            score,
            desc: String::new(),
            ignore,
        }
    }

    #[test]
    fn test_item_pass_rules() {
        assert!(ProfileFeatureResult::item_passes(true, &outcome(10.0, false)));
        assert!(!ProfileFeatureResult::item_passes(true, &outcome(9.9, false)));
        assert!(ProfileFeatureResult::item_passes(false, &outcome(0.1, false)));
        assert!(!ProfileFeatureResult::item_passes(false, &outcome(0.0, false)));
        assert!(!ProfileFeatureResult::item_passes(true, &outcome(0.0, true)));
        assert!(ProfileFeatureResult::item_passes(false, &outcome(0.0, true)));
    }

    fn full(_: &SbomDocument) -> FeatureScore {
        FeatureScore::new(10.0, "full")
    }

    fn partial(_: &SbomDocument) -> FeatureScore {
        FeatureScore::new(6.0, "partial")
    }

    fn na(_: &SbomDocument) -> FeatureScore {
        FeatureScore::not_applicable("N/A")
    }

    fn catalog() -> Catalog {
        Catalog::builder()
            .profile_feature("r_full", "Required full", true, full)
            .profile_feature("r_partial", "Required partial", true, partial)
            .profile_feature("o_na", "Optional n/a", false, na)
            .profile_feature("r_na", "Required n/a", true, na)
            .profile("p", "P", "test profile", &["r_full", "r_partial", "o_na", "missing"])
            .profile("all_na", "All N/A", "", &["o_na", "r_na"])
            .build()
    }

    #[test]
    fn test_profile_scores_and_message() {
        let catalog = catalog();
        let results = ProfileEvaluator::new(&catalog).evaluate(&["p"], &SbomDocument::default());
        assert_eq!(results.len(), 1);
        let p = &results[0];
        assert_eq!(p.items.len(), 3);
        assert_eq!(p.score, 8.0);
        assert_eq!(p.required_score, 8.0);
        assert_eq!(p.grade, Grade::B);
        assert_eq!(p.message, "1/2 required checks passed");
        assert_eq!(p.failed_required().count(), 1);
    }

    #[test]
    fn test_policies() {
        let catalog = catalog();
        let results = ProfileEvaluator::new(&catalog)
            .evaluate(&["p", "unknown", "all_na"], &SbomDocument::default());
        assert_eq!(results.len(), 2);

        let p = &results[0];
        assert_eq!(p.verdict(CompliancePolicy::AllRequiredPass), ComplianceVerdict::Fail);
        assert_eq!(p.verdict(CompliancePolicy::ScoreThreshold(7.5)), ComplianceVerdict::Pass);
        assert_eq!(p.verdict(CompliancePolicy::ScoreThreshold(8.5)), ComplianceVerdict::Fail);

        let skipped = &results[1];
        assert_eq!(skipped.score, 0.0);
        assert_eq!(skipped.verdict(CompliancePolicy::AllRequiredPass), ComplianceVerdict::Skipped);
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!(
            "all-required".parse::<CompliancePolicy>(),
            Ok(CompliancePolicy::AllRequiredPass)
        );
        assert_eq!(
            " Threshold:7.5 ".parse::<CompliancePolicy>(),
            Ok(CompliancePolicy::ScoreThreshold(7.5))
        );
        assert!("threshold:11".parse::<CompliancePolicy>().is_err());
        assert!("threshold:abc".parse::<CompliancePolicy>().is_err());
        assert!("strict".parse::<CompliancePolicy>().is_err());
        assert_eq!(CompliancePolicy::ScoreThreshold(7.5).to_string(), "threshold:7.5");
    }
}
