//! Score entries - the two scores recorded for one pair.

use serde::{Deserialize, Serialize};

use super::{OptionPair, Score};

/// The judgment recorded for one pair.
///
/// `score_first` is awarded to `pair.first()`, `score_second` to
/// `pair.second()`. In frequency mode they read as "times option i was
/// better" and "times option j was better".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub pair: OptionPair,
    pub score_first: Score,
    pub score_second: Score,
}

impl ScoreEntry {
    /// Creates an entry for a pair.
    pub fn new(pair: OptionPair, score_first: Score, score_second: Score) -> Self {
        Self {
            pair,
            score_first,
            score_second,
        }
    }

    /// Sum of both scores (0..=30).
    pub fn total(&self) -> u8 {
        self.score_first.value() + self.score_second.value()
    }
}
