//! Survey domain events.
//!
//! `SurveySubmitted` is the hand-off point for persistence: whatever stores
//! or exports answers subscribes to it.

use serde::{Deserialize, Serialize};

use super::{OptionPair, ScoreEntry, ScoringMode, SubmissionAck};
use crate::domain::foundation::{EventId, ResponseId, Timestamp};
use crate::domain_event;

/// Published when a respondent starts a new response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseStarted {
    pub event_id: EventId,
    pub response_id: ResponseId,
    pub mode: ScoringMode,
    pub started_at: Timestamp,
}

impl ResponseStarted {
    pub const EVENT_TYPE: &'static str = "survey.response_started.v1";
}

domain_event!(
    ResponseStarted,
    event_type = ResponseStarted::EVENT_TYPE,
    schema_version = 1,
    aggregate_id = response_id,
    aggregate_type = "SurveyResponse",
    occurred_at = started_at,
    event_id = event_id
);

/// Published when a response passes validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveySubmitted {
    pub event_id: EventId,
    pub response_id: ResponseId,
    pub respondent: String,
    pub mode: ScoringMode,
    pub entries: Vec<ScoreEntry>,
    pub unanswered: Vec<OptionPair>,
    pub submitted_at: Timestamp,
}

domain_event!(
    SurveySubmitted,
    event_type = SurveySubmitted::EVENT_TYPE,
    schema_version = 1,
    aggregate_id = response_id,
    aggregate_type = "SurveyResponse",
    occurred_at = submitted_at,
    event_id = event_id
);

impl SurveySubmitted {
    pub const EVENT_TYPE: &'static str = "survey.response_submitted.v1";

    /// Builds the event from an accepted submission.
    pub fn from_ack(response_id: ResponseId, ack: &SubmissionAck) -> Self {
        Self {
            event_id: EventId::new(),
            response_id,
            respondent: ack.respondent.clone(),
            mode: ack.mode,
            entries: ack.entries.clone(),
            unanswered: ack.unanswered.clone(),
            submitted_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SerializableDomainEvent;
    use crate::domain::survey::Score;

    #[test]
    fn submitted_event_envelope_carries_response_id() {
        let response_id = ResponseId::new();
        let ack = SubmissionAck {
            respondent: "Ivanov".to_string(),
            mode: ScoringMode::FixedSplit,
            entries: vec![ScoreEntry::new(
                OptionPair::new(0, 1).unwrap(),
                Score::new(9).unwrap(),
                Score::new(6).unwrap(),
            )],
            unanswered: vec![],
        };

        let event = SurveySubmitted::from_ack(response_id, &ack);
        let envelope = event.to_envelope();

        assert_eq!(envelope.event_type, "survey.response_submitted.v1");
        assert_eq!(envelope.aggregate_type, "SurveyResponse");
        assert_eq!(envelope.aggregate_id, response_id.to_string());

        let payload: SurveySubmitted = envelope.payload_as().unwrap();
        assert_eq!(payload.respondent, "Ivanov");
        assert_eq!(payload.entries.len(), 1);
        assert_eq!(payload.entries[0].score_first.value(), 9);
    }

    #[test]
    fn started_event_uses_started_at() {
        let event = ResponseStarted {
            event_id: EventId::new(),
            response_id: ResponseId::new(),
            mode: ScoringMode::Frequency,
            started_at: Timestamp::now(),
        };
        let envelope = event.to_envelope();
        assert_eq!(envelope.occurred_at, event.started_at);
        assert_eq!(envelope.schema_version, 1);
    }
}
