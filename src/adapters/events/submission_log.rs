//! Logs accepted submissions.
//!
//! Stands in for a storage/export collaborator: it records each
//! `survey.response_submitted.v1` event in the structured log.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::domain::survey::SurveySubmitted;
use crate::ports::EventHandler;

/// Event handler writing one log line per submitted response.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubmissionLogger;

impl SubmissionLogger {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventHandler for SubmissionLogger {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        let submitted: SurveySubmitted = event.payload_as().map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Malformed submission payload: {}", e),
            )
        })?;

        tracing::info!(
            response_id = %submitted.response_id,
            respondent = %submitted.respondent,
            mode = %submitted.mode,
            entries = submitted.entries.len(),
            unanswered = submitted.unanswered.len(),
            correlation_id = ?event.metadata.correlation_id,
            "Survey response submitted"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "SubmissionLogger"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{EventId, EventMetadata, ResponseId, SerializableDomainEvent, Timestamp};
    use crate::domain::survey::ScoringMode;

    #[tokio::test]
    async fn accepts_submitted_payload() {
        let event = SurveySubmitted {
            event_id: EventId::new(),
            response_id: ResponseId::new(),
            respondent: "Ivanov".to_string(),
            mode: ScoringMode::FixedSplit,
            entries: vec![],
            unanswered: vec![],
            submitted_at: Timestamp::now(),
        };

        assert!(SubmissionLogger::new().handle(event.to_envelope()).await.is_ok());
    }

    #[tokio::test]
    async fn rejects_foreign_payload() {
        let envelope = EventEnvelope {
            event_id: EventId::new(),
            event_type: "survey.response_submitted.v1".to_string(),
            schema_version: 1,
            aggregate_id: "x".to_string(),
            aggregate_type: "SurveyResponse".to_string(),
            occurred_at: Timestamp::now(),
            payload: serde_json::json!({"unexpected": true}),
            metadata: EventMetadata::default(),
        };

        let err = SubmissionLogger::new().handle(envelope).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InternalError);
    }
}
