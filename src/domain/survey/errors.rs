//! Survey-specific error types.

use thiserror::Error;

use super::{InconsistentPair, OptionPair};
use crate::domain::foundation::{DomainError, ErrorCode, ResponseId, ValidationError};

/// Errors returned by survey operations.
///
/// Every variant is recoverable: the respondent corrects the input and
/// tries again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurveyError {
    /// Respondent name is empty or whitespace at submission time.
    #[error("Please enter your full name before submitting")]
    MissingIdentity,

    /// Fixed-split pairs that do not sum to the budget.
    #[error("Scores must sum to 15 for: {}", join_pairs(.0))]
    InconsistentScores(Vec<InconsistentPair>),

    /// A raw score outside `[0, 15]` reached the core.
    #[error("Score '{field}' must be between 0 and 15, got {actual}")]
    InvalidScoreRange { field: String, actual: i64 },

    /// Pair references an option the survey does not have.
    #[error("Pair {0} is not part of this survey")]
    UnknownPair(OptionPair),

    /// Pair index beyond the enumeration.
    #[error("Pair index {index} out of range (survey has {pair_count} pairs)")]
    PairIndexOutOfRange { index: usize, pair_count: usize },

    /// Response was not found.
    #[error("Response not found: {0}")]
    NotFound(ResponseId),

    /// Other input validation failures.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// Storage or event delivery failed.
    #[error("Error: {0}")]
    Infrastructure(String),
}

fn join_pairs(pairs: &[InconsistentPair]) -> String {
    pairs
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl SurveyError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SurveyError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        SurveyError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SurveyError::MissingIdentity => ErrorCode::MissingIdentity,
            SurveyError::InconsistentScores(_) => ErrorCode::InconsistentScores,
            SurveyError::InvalidScoreRange { .. } => ErrorCode::OutOfRange,
            SurveyError::UnknownPair(_) | SurveyError::PairIndexOutOfRange { .. } => {
                ErrorCode::PairNotFound
            }
            SurveyError::NotFound(_) => ErrorCode::ResponseNotFound,
            SurveyError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            SurveyError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    /// Text shown to the respondent.
    ///
    /// Submission failures use the form's wording; the rest fall back to
    /// the error's display text.
    pub fn message(&self) -> String {
        match self {
            SurveyError::MissingIdentity => {
                "Пожалуйста, введите ваше ФИО перед отправкой.".to_string()
            }
            SurveyError::InconsistentScores(pairs) => format!(
                "Сумма оценок должна быть равна 15 для: {}",
                join_pairs(pairs)
            ),
            SurveyError::InvalidScoreRange { actual, .. } => {
                format!("Оценка должна быть от 0 до 15, получено {}", actual)
            }
            other => other.to_string(),
        }
    }
}

impl From<ValidationError> for SurveyError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::OutOfRange { field, actual, .. } => {
                SurveyError::InvalidScoreRange { field, actual }
            }
            other => SurveyError::ValidationFailed {
                field: other.field().to_string(),
                message: other.to_string(),
            },
        }
    }
}

impl From<DomainError> for SurveyError {
    fn from(err: DomainError) -> Self {
        SurveyError::Infrastructure(err.to_string())
    }
}
