//! Derived valuation result models.

use serde::{Deserialize, Serialize};

/// Market classification bucket derived from the total score, S through D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerTier {
    S,
    A,
    B,
    C,
    D,
}

impl PlayerTier {
    /// Classify a total score, highest band first.
    pub fn from_score(score: u32) -> Self {
        if score >= 85 {
            PlayerTier::S
        } else if score >= 65 {
            PlayerTier::A
        } else if score >= 45 {
            PlayerTier::B
        } else if score >= 25 {
            PlayerTier::C
        } else {
            PlayerTier::D
        }
    }

    /// Estimated monthly salary band for this tier.
    ///
    /// Currency-agnostic; the report layer may prepend a configured symbol.
    pub fn salary_range(&self) -> &'static str {
        match self {
            PlayerTier::S => "8,000-20,000+",
            PlayerTier::A => "5,000-7,999",
            PlayerTier::B => "3,000-4,999",
            PlayerTier::C => "1,500-2,999",
            PlayerTier::D => "up to 1,499",
        }
    }
}

impl std::fmt::Display for PlayerTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerTier::S => write!(f, "S"),
            PlayerTier::A => write!(f, "A"),
            PlayerTier::B => write!(f, "B"),
            PlayerTier::C => write!(f, "C"),
            PlayerTier::D => write!(f, "D"),
        }
    }
}

/// Unrounded per-category sub-scores.
///
/// Each value is independently floored at 0 and capped at its category
/// maximum before summation; only the total is rounded, so these need not
/// sum exactly to the displayed score.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub role_score: f64,
    pub stats_score: f64,
    pub social_score: f64,
    pub competition_score: f64,
    pub history_score: f64,
}

impl ScoreBreakdown {
    /// Sum of all sub-scores, before the global clamp and rounding.
    pub fn total(&self) -> f64 {
        self.role_score
            + self.stats_score
            + self.social_score
            + self.competition_score
            + self.history_score
    }
}

/// Result of evaluating a profile.
///
/// A pure projection: never persisted, recomputed on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Total score, clamped to 0-100 and rounded
    pub score: u32,

    /// Market tier derived from the score
    pub tier: PlayerTier,

    /// Salary band for the tier
    pub salary_range: String,

    /// Per-category breakdown
    pub breakdown: ScoreBreakdown,
}
