//! SubmitResponseHandler - Command handler for final submission.

use std::sync::Arc;

use super::load_response;
use crate::domain::foundation::{CommandMetadata, ResponseId, SerializableDomainEvent};
use crate::domain::survey::{PairwiseSurvey, SubmissionAck, SurveyError, SurveySubmitted};
use crate::ports::{EventPublisher, SurveyResponseRepository};

/// Command to submit a response.
#[derive(Debug, Clone)]
pub struct SubmitResponseCommand {
    pub response_id: ResponseId,
}

/// Result of an accepted submission.
#[derive(Debug, Clone)]
pub struct SubmitResponseResult {
    pub ack: SubmissionAck,
    pub event: SurveySubmitted,
}

/// Handler for submissions.
///
/// A rejected submission publishes nothing and leaves the response editable.
/// An accepted one is handed to subscribers via `SurveySubmitted`.
pub struct SubmitResponseHandler {
    survey: Arc<PairwiseSurvey>,
    repository: Arc<dyn SurveyResponseRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl SubmitResponseHandler {
    pub fn new(
        survey: Arc<PairwiseSurvey>,
        repository: Arc<dyn SurveyResponseRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            survey,
            repository,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitResponseCommand,
        metadata: CommandMetadata,
    ) -> Result<SubmitResponseResult, SurveyError> {
        let response = load_response(self.repository.as_ref(), &cmd.response_id).await?;

        let ack = match self.survey.submit(&response) {
            Ok(ack) => ack,
            Err(err) => {
                tracing::warn!(
                    response_id = %cmd.response_id,
                    code = %err.code(),
                    error = %err,
                    "Submission rejected"
                );
                return Err(err);
            }
        };

        let event = SurveySubmitted::from_ack(cmd.response_id, &ack);
        let mut envelope = event
            .to_envelope()
            .with_correlation_id(metadata.correlation_id());
        if let Some(source) = metadata.source() {
            envelope = envelope.with_source(source);
        }
        self.event_publisher.publish(envelope).await?;

        tracing::info!(
            response_id = %cmd.response_id,
            respondent = %ack.respondent,
            answered = ack.entries.len(),
            unanswered = ack.unanswered.len(),
            "Survey response submitted"
        );

        Ok(SubmitResponseResult { ack, event })
    }
}
