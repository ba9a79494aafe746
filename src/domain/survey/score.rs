//! Score value object for pairwise judgments (0 to 15 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Points available per pair: each score is at most this, and in
/// fixed-split mode the two scores of a pair must add up to exactly this.
pub const SCORE_BUDGET: u8 = 15;

/// A single score in `[0, SCORE_BUDGET]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Score(u8);

impl Score {
    /// Where sliders start before the respondent moves them.
    pub const SLIDER_DEFAULT: Score = Score(7);

    /// Lowest possible score.
    pub const MIN: Score = Score(0);

    /// Highest possible score.
    pub const MAX: Score = Score(SCORE_BUDGET);

    /// Creates a score, rejecting values outside `[0, 15]`.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        Self::for_field("score", value)
    }

    /// Like [`Score::new`] but names the field in the error.
    pub fn for_field(field: &str, value: i64) -> Result<Self, ValidationError> {
        if (0..=i64::from(SCORE_BUDGET)).contains(&value) {
            Ok(Score(value as u8))
        } else {
            Err(ValidationError::out_of_range(
                field,
                0,
                i64::from(SCORE_BUDGET),
                value,
            ))
        }
    }

    /// Clamps any integer into range, the way a slider widget does.
    pub fn clamped(value: i64) -> Self {
        Score(value.clamp(0, i64::from(SCORE_BUDGET)) as u8)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Fraction of the budget, for progress bars.
    pub fn progress(&self) -> f32 {
        f32::from(self.0) / f32::from(SCORE_BUDGET)
    }
}

impl TryFrom<i64> for Score {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Score::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, SCORE_BUDGET)
    }
}
