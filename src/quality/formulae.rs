//! Score arithmetic shared by every evaluator.
//!
//! All scores live on a 0-10 scale. Clamping to that range happens here,
//! never in callers.

use serde::{Deserialize, Serialize};

use super::comprehensive::{CategoryResult, FeatureResult};
use super::profiles::ProfileFeatureResult;

/// Highest score a feature, category or profile can reach
pub const MAX_SCORE: f64 = 10.0;

/// Score shown for an incomplete set that would otherwise round to a perfect 10
const INCOMPLETE_CAP: f64 = 9.9;

/// Clamp a raw value into `[0, 10]`, mapping NaN to 0.
#[must_use]
pub fn clamp_score(raw: f64) -> f64 {
    if raw.is_nan() {
        0.0
    } else {
        raw.clamp(0.0, MAX_SCORE)
    }
}

/// Score the share of components that satisfy a check.
///
/// Returns 0 when there is nothing to score. An incomplete set never
/// displays as perfect: if `have < total` and the ratio rounds to 10.0 at
/// one decimal, the result is capped at 9.9.
#[must_use]
pub fn per_component_score(have: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = clamp_score(MAX_SCORE * have as f64 / total as f64);
    if have < total && round_one_decimal(raw) >= MAX_SCORE {
        return INCOMPLETE_CAP;
    }
    raw
}

/// 10 when the property holds, 0 otherwise.
#[must_use]
pub fn boolean_score(present: bool) -> f64 {
    if present { MAX_SCORE } else { 0.0 }
}

/// Weighted mean of feature scores, renormalized over non-ignored features.
///
/// An ignored (N/A) feature is removed from both numerator and
/// denominator. A total applicable weight `<= 0` yields exactly 0.
#[must_use]
pub fn category_score(features: &[FeatureResult]) -> f64 {
    weighted_mean(
        features
            .iter()
            .filter(|f| !f.ignored)
            .map(|f| (f.score, f.weight)),
    )
}

/// Weighted mean of category scores, excluding informational categories.
#[must_use]
pub fn overall_score(categories: &[CategoryResult]) -> f64 {
    weighted_mean(
        categories
            .iter()
            .filter(|c| !c.informational)
            .map(|c| (c.score, c.weight)),
    )
}

/// Mean score of the required items of a profile; 0 without required items.
///
/// Optional items are informational and never move this score.
#[must_use]
pub fn profile_score(items: &[ProfileFeatureResult]) -> f64 {
    mean(items.iter().filter(|i| i.required).map(|i| i.score))
}

/// Mean score of the applicable (non-ignored) items of a profile.
#[must_use]
pub fn applicable_item_score(items: &[ProfileFeatureResult]) -> f64 {
    mean(items.iter().filter(|i| !i.ignored).map(|i| i.score))
}

fn weighted_mean(pairs: impl Iterator<Item = (f64, f64)>) -> f64 {
    let (weighted_sum, total_weight) = pairs.fold((0.0, 0.0), |(sum, weight), (s, w)| {
        (sum + s * w, weight + w)
    });
    if total_weight <= 0.0 {
        return 0.0;
    }
    clamp_score(weighted_sum / total_weight)
}

fn mean(scores: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = scores.fold((0.0, 0_usize), |(sum, n), s| (sum + s, n + 1));
    if count == 0 {
        return 0.0;
    }
    clamp_score(sum / count as f64)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Letter grade for a 0-10 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Grade {
    /// Excellent: 9.0-10
    A,
    /// Good: 8.0-8.99
    B,
    /// Fair: 7.0-7.99
    C,
    /// Poor: 5.0-6.99
    D,
    /// Failing: below 5.0
    F,
}

impl Grade {
    /// Grade a score; each band includes its lower bound
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 9.0 {
            Self::A
        } else if score >= 8.0 {
            Self::B
        } else if score >= 7.0 {
            Self::C
        } else if score >= 5.0 {
            Self::D
        } else {
            Self::F
        }
    }

    /// Get grade letter
    #[must_use]
    pub const fn letter(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }

    /// Get grade description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::A => "Excellent",
            Self::B => "Good",
            Self::C => "Fair",
            Self::D => "Poor",
            Self::F => "Failing",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.letter())
    }
}
