//! Per-pair consistency status and the feedback rendered from it.

use serde::Serialize;

use super::SCORE_BUDGET;

/// Frequency-mode classification of a pair's sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FrequencyStatus {
    /// Sum is exactly 15.
    Ok,
    /// Sum exceeds 15: the two counts overlap.
    Overlap { sum: u8 },
    /// Sum below 15: the remaining cases are ties.
    Ties { sum: u8, remainder: u8 },
}

/// Fixed-split classification of a pair's sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SplitStatus {
    Balanced,
    /// `delta` is `sum - 15`.
    Imbalanced { sum: u8, delta: i16 },
}

/// Status returned after each score edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PairStatus {
    Frequency(FrequencyStatus),
    Split(SplitStatus),
}

impl PairStatus {
    /// True when the pair sums to exactly the budget.
    pub fn is_consistent(&self) -> bool {
        matches!(
            self,
            PairStatus::Frequency(FrequencyStatus::Ok) | PairStatus::Split(SplitStatus::Balanced)
        )
    }

    /// True when this status alone would reject a submission.
    pub fn blocks_submission(&self) -> bool {
        matches!(self, PairStatus::Split(SplitStatus::Imbalanced { .. }))
    }

    /// Feedback for the presentation layer.
    pub fn feedback(&self) -> Feedback {
        match self {
            PairStatus::Frequency(FrequencyStatus::Ok) => Feedback::new(
                Severity::Success,
                format!("Оценки согласованы: сумма равна {}.", SCORE_BUDGET),
            ),
            PairStatus::Frequency(FrequencyStatus::Overlap { sum }) => Feedback::new(
                Severity::Warning,
                format!(
                    "Сумма оценок ({}) превышает {} случаев. Пожалуйста, проверьте ваши оценки.",
                    sum, SCORE_BUDGET
                ),
            ),
            PairStatus::Frequency(FrequencyStatus::Ties { remainder, .. }) => Feedback::new(
                Severity::Info,
                format!("В {} случаях варианты равнозначны.", remainder),
            ),
            PairStatus::Split(SplitStatus::Balanced) => Feedback::new(
                Severity::Success,
                format!("Баллы распределены верно: сумма равна {}.", SCORE_BUDGET),
            ),
            PairStatus::Split(SplitStatus::Imbalanced { sum, .. }) => Feedback::new(
                Severity::Error,
                format!(
                    "Сумма баллов ({}) должна быть равна {}.",
                    sum, SCORE_BUDGET
                ),
            ),
        }
    }
}

/// How prominently a message should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// A message for the respondent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub severity: Severity,
    pub message: String,
}

impl Feedback {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consistency_matches_exact_budget_states() {
        assert!(PairStatus::Frequency(FrequencyStatus::Ok).is_consistent());
        assert!(PairStatus::Split(SplitStatus::Balanced).is_consistent());
        assert!(!PairStatus::Frequency(FrequencyStatus::Overlap { sum: 20 }).is_consistent());
    }

    #[test]
    fn frequency_statuses_never_block() {
        assert!(!PairStatus::Frequency(FrequencyStatus::Overlap { sum: 30 }).blocks_submission());
        assert!(!PairStatus::Frequency(FrequencyStatus::Ties {
            sum: 0,
            remainder: 15
        })
        .blocks_submission());
        assert!(PairStatus::Split(SplitStatus::Imbalanced { sum: 14, delta: -1 }).blocks_submission());
    }

    #[test]
    fn overlap_feedback_is_a_warning_with_the_sum() {
        let feedback = PairStatus::Frequency(FrequencyStatus::Overlap { sum: 20 }).feedback();
        assert_eq!(feedback.severity, Severity::Warning);
        assert_eq!(
            feedback.message,
            "Сумма оценок (20) превышает 15 случаев. Пожалуйста, проверьте ваши оценки."
        );
    }

    #[test]
    fn ties_feedback_reports_remainder() {
        let feedback = PairStatus::Frequency(FrequencyStatus::Ties {
            sum: 14,
            remainder: 1,
        })
        .feedback();
        assert_eq!(feedback.severity, Severity::Info);
        assert_eq!(feedback.message, "В 1 случаях варианты равнозначны.");
    }

    #[test]
    fn imbalanced_feedback_is_an_error() {
        let feedback = PairStatus::Split(SplitStatus::Imbalanced { sum: 16, delta: 1 }).feedback();
        assert_eq!(feedback.severity, Severity::Error);
        assert!(feedback.message.contains("16"));
    }

    #[test]
    fn statuses_serialize_with_state_tag() {
        let json = serde_json::to_value(PairStatus::Frequency(FrequencyStatus::Ties {
            sum: 14,
            remainder: 1,
        }))
        .unwrap();
        assert_eq!(json["state"], "ties");
        assert_eq!(json["remainder"], 1);

        let json = serde_json::to_value(PairStatus::Split(SplitStatus::Balanced)).unwrap();
        assert_eq!(json["state"], "balanced");
    }
}
