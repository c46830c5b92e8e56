//! Evaluation result types.

use std::fmt;

/// Highest score a password can reach: one point per passing section.
pub const MAX_SCORE: u8 = 4;

/// Heuristic score in `0..=MAX_SCORE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub fn new(value: u8) -> Self {
        Self(value.min(MAX_SCORE))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Strength label derived from a [`PasswordScore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Moderate,
    Strong,
}

impl PasswordStrength {
    /// Maps a score to its label.
    ///
    /// A score of 0 lands on `Strong` together with the maximum score. This
    /// is the established behavior and is kept as-is.
    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            1..=2 => Self::Weak,
            3 => Self::Moderate,
            _ => Self::Strong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a strength check: score plus improvement suggestions in
/// section order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub score: PasswordScore,
    pub suggestions: Vec<String>,
}

impl PasswordEvaluation {
    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_score(self.score)
    }
}
