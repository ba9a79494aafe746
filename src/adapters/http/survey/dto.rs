//! HTTP DTOs for survey endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::{RecordScoreResult, ResponseView};
use crate::domain::survey::{
    Feedback, InconsistentPair, OptionPair, PairReview, PairStatus, PairwiseSurvey, Progress,
    Score, ScoreEntry, ScoringMode, SubmissionAck, SurveyOption, SCORE_BUDGET,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Optional body for starting a response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StartResponseRequest {
    #[serde(default)]
    pub respondent: Option<String>,
}

/// Request to set the respondent's name.
#[derive(Debug, Clone, Deserialize)]
pub struct SetNameRequest {
    pub name: String,
}

/// Request to record one pair's scores.
///
/// Accepts any integer so out-of-range values get a domain error instead
/// of a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordScoreRequest {
    pub first: i64,
    pub second: i64,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct OptionDto {
    pub index: usize,
    pub number: usize,
    pub name: String,
    pub label: String,
}

impl From<&SurveyOption> for OptionDto {
    fn from(option: &SurveyOption) -> Self {
        Self {
            index: option.index(),
            number: option.number(),
            name: option.display_name(),
            label: option.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PairDto {
    pub first: usize,
    pub second: usize,
    pub key: String,
    pub label: String,
}

impl From<OptionPair> for PairDto {
    fn from(pair: OptionPair) -> Self {
        Self {
            first: pair.first(),
            second: pair.second(),
            key: pair.key(),
            label: pair.label(),
        }
    }
}

/// Survey definition for rendering the form.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyDefinitionResponse {
    pub title: String,
    pub mode: ScoringMode,
    pub instructions: String,
    pub budget: u8,
    pub slider_default: u8,
    pub options: Vec<OptionDto>,
    pub pairs: Vec<PairDto>,
}

impl From<&PairwiseSurvey> for SurveyDefinitionResponse {
    fn from(survey: &PairwiseSurvey) -> Self {
        Self {
            title: survey.title().to_string(),
            mode: survey.mode(),
            instructions: survey.mode().instructions().to_string(),
            budget: SCORE_BUDGET,
            slider_default: Score::SLIDER_DEFAULT.value(),
            options: survey.options().iter().map(OptionDto::from).collect(),
            pairs: survey.pairs().iter().copied().map(PairDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressDto {
    pub answered: usize,
    pub total: usize,
    pub fraction: f32,
    pub complete: bool,
}

impl From<Progress> for ProgressDto {
    fn from(progress: Progress) -> Self {
        Self {
            answered: progress.answered,
            total: progress.total,
            fraction: progress.fraction(),
            complete: progress.is_complete(),
        }
    }
}

/// Response for a newly started survey response.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseCreatedResponse {
    pub response_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NameUpdatedResponse {
    pub response_id: String,
    pub has_identity: bool,
}

/// Both scores of a pair with their bar fractions.
#[derive(Debug, Clone, Serialize)]
pub struct EntryDto {
    pub first: u8,
    pub second: u8,
    pub first_progress: f32,
    pub second_progress: f32,
    pub total: u8,
}

impl From<&ScoreEntry> for EntryDto {
    fn from(entry: &ScoreEntry) -> Self {
        Self {
            first: entry.score_first.value(),
            second: entry.score_second.value(),
            first_progress: entry.score_first.progress(),
            second_progress: entry.score_second.progress(),
            total: entry.total(),
        }
    }
}

/// Result of a score edit.
#[derive(Debug, Clone, Serialize)]
pub struct PairScoreResponse {
    pub pair: PairDto,
    pub entry: EntryDto,
    pub status: PairStatus,
    pub feedback: Feedback,
    pub progress: ProgressDto,
}

impl From<RecordScoreResult> for PairScoreResponse {
    fn from(result: RecordScoreResult) -> Self {
        Self {
            pair: result.pair.into(),
            entry: EntryDto::from(&result.entry),
            status: result.status,
            feedback: result.feedback,
            progress: result.progress.into(),
        }
    }
}

/// One pair within a response view.
#[derive(Debug, Clone, Serialize)]
pub struct PairReviewDto {
    pub pair: PairDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<EntryDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PairStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,
}

impl From<PairReview> for PairReviewDto {
    fn from(review: PairReview) -> Self {
        Self {
            pair: review.pair.into(),
            entry: review.entry.as_ref().map(EntryDto::from),
            feedback: review.status.map(|status| status.feedback()),
            status: review.status,
        }
    }
}

/// Detailed response view.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseDetailResponse {
    pub id: String,
    pub respondent: String,
    pub pairs: Vec<PairReviewDto>,
    pub progress: ProgressDto,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ResponseView> for ResponseDetailResponse {
    fn from(view: ResponseView) -> Self {
        Self {
            id: view.id.to_string(),
            respondent: view.respondent,
            pairs: view.reviews.into_iter().map(Into::into).collect(),
            progress: view.progress.into(),
            created_at: view.created_at.to_rfc3339(),
            updated_at: view.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmittedEntryDto {
    pub pair: PairDto,
    pub first: u8,
    pub second: u8,
}

/// Accepted submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResponse {
    pub respondent: String,
    pub mode: ScoringMode,
    pub message: String,
    pub entries: Vec<SubmittedEntryDto>,
    pub unanswered: Vec<PairDto>,
}

impl From<SubmissionAck> for SubmissionResponse {
    fn from(ack: SubmissionAck) -> Self {
        Self {
            message: ack.thank_you_message(),
            respondent: ack.respondent,
            mode: ack.mode,
            entries: ack
                .entries
                .iter()
                .map(|entry| SubmittedEntryDto {
                    pair: entry.pair.into(),
                    first: entry.score_first.value(),
                    second: entry.score_second.value(),
                })
                .collect(),
            unanswered: ack.unanswered.into_iter().map(Into::into).collect(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl ToString, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self::new("NOT_FOUND", format!("{} not found: {}", resource_type, id))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    /// Error listing the pairs that block a fixed-split submission.
    pub fn inconsistent(code: impl ToString, message: impl Into<String>, pairs: &[InconsistentPair]) -> Self {
        let pairs: Vec<serde_json::Value> = pairs
            .iter()
            .map(|p| {
                serde_json::json!({
                    "first": p.pair.first(),
                    "second": p.pair.second(),
                    "label": p.pair.label(),
                    "sum": p.sum,
                })
            })
            .collect();
        Self {
            details: Some(serde_json::json!({ "pairs": pairs })),
            ..Self::new(code, message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_score_request_accepts_out_of_range_integers() {
        let req: RecordScoreRequest = serde_json::from_str(r#"{"first": 20, "second": -1}"#).unwrap();
        assert_eq!(req.first, 20);
        assert_eq!(req.second, -1);
    }

    #[test]
    fn start_request_defaults_to_no_name() {
        let req: StartResponseRequest = serde_json::from_str("{}").unwrap();
        assert!(req.respondent.is_none());
    }

    #[test]
    fn survey_definition_numbers_options_from_one() {
        let survey = PairwiseSurvey::new("T", ["A", "B", "C"], ScoringMode::Frequency).unwrap();
        let dto = SurveyDefinitionResponse::from(&survey);

        assert_eq!(dto.options[0].number, 1);
        assert_eq!(dto.options[2].name, "Вариант 3");
        assert_eq!(dto.pairs.len(), 3);
        assert_eq!(dto.pairs[2].key, "1_2");
        assert_eq!(dto.slider_default, 7);
        assert_eq!(dto.budget, 15);
    }

    #[test]
    fn inconsistent_error_lists_pairs_in_details() {
        let pairs = [InconsistentPair {
            pair: OptionPair::new(0, 1).unwrap(),
            sum: Some(16),
        }];
        let err = ErrorResponse::inconsistent("INCONSISTENT_SCORES", "bad", &pairs);
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["code"], "INCONSISTENT_SCORES");
        assert_eq!(json["details"]["pairs"][0]["first"], 0);
        assert_eq!(json["details"]["pairs"][0]["second"], 1);
        assert_eq!(json["details"]["pairs"][0]["label"], "Варианты 1 и 2");
        assert_eq!(json["details"]["pairs"][0]["sum"], 16);
    }

    #[test]
    fn error_response_omits_empty_details() {
        let json = serde_json::to_string(&ErrorResponse::bad_request("x")).unwrap();
        assert!(!json.contains("details"));
    }
}
