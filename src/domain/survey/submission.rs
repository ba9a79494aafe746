//! Submission results.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{OptionPair, ScoreEntry, ScoringMode};

/// A pair that keeps a fixed-split response from being submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InconsistentPair {
    #[serde(flatten)]
    pub pair: OptionPair,
    /// Actual sum, or `None` if the pair was never scored.
    pub sum: Option<u8>,
}

impl fmt::Display for InconsistentPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sum {
            Some(sum) => write!(f, "{} (сумма: {})", self.pair.label(), sum),
            None => write!(f, "{} (нет оценки)", self.pair.label()),
        }
    }
}

/// Accepted submission, handed to whoever persists or exports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionAck {
    /// Trimmed respondent name.
    pub respondent: String,
    pub mode: ScoringMode,
    /// Validated entries in pair enumeration order.
    pub entries: Vec<ScoreEntry>,
    /// Pairs never scored. Always empty in fixed-split mode.
    pub unanswered: Vec<OptionPair>,
}

impl SubmissionAck {
    /// Confirmation shown to the respondent.
    pub fn thank_you_message(&self) -> String {
        format!(
            "Большое спасибо, {}! Ваши ответы сохранены.",
            self.respondent
        )
    }
}
