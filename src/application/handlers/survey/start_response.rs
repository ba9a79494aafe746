//! StartResponseHandler - Command handler for starting a new response.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, EventId, SerializableDomainEvent};
use crate::domain::survey::{PairwiseSurvey, ResponseStarted, SurveyError, SurveyResponse};
use crate::ports::{EventPublisher, SurveyResponseRepository};

/// Command to start a response.
#[derive(Debug, Clone, Default)]
pub struct StartResponseCommand {
    /// Name entered up front, if the form collects it first.
    pub respondent: Option<String>,
}

/// Result of starting a response.
#[derive(Debug, Clone)]
pub struct StartResponseResult {
    pub response: SurveyResponse,
    pub event: ResponseStarted,
}

/// Handler for starting responses.
pub struct StartResponseHandler {
    survey: Arc<PairwiseSurvey>,
    repository: Arc<dyn SurveyResponseRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl StartResponseHandler {
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
        cmd: StartResponseCommand,
        metadata: CommandMetadata,
    ) -> Result<StartResponseResult, SurveyError> {
        let mut response = self.survey.start_response();
        if let Some(name) = cmd.respondent {
            response.set_respondent_name(name);
        }

        self.repository.save(&response).await?;

        let event = ResponseStarted {
            event_id: EventId::new(),
            response_id: *response.id(),
            mode: self.survey.mode(),
            started_at: *response.created_at(),
        };

        let mut envelope = event
            .to_envelope()
            .with_correlation_id(metadata.correlation_id());
        if let Some(source) = metadata.source() {
            envelope = envelope.with_source(source);
        }
        self.event_publisher.publish(envelope).await?;

        tracing::info!(response_id = %response.id(), mode = %self.survey.mode(), "Survey response started");

        Ok(StartResponseResult { response, event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::survey::test_support::{bus, repository, survey};
    use crate::domain::survey::ScoringMode;

    #[tokio::test]
    async fn stores_an_empty_response() {
        let repo = repository();
        let handler = StartResponseHandler::new(survey(ScoringMode::Frequency), repo.clone(), bus());

        let result = handler
            .handle(StartResponseCommand::default(), CommandMetadata::new())
            .await
            .unwrap();

        let stored = repo.find_by_id(result.response.id()).await.unwrap().unwrap();
        assert_eq!(stored.answered_count(), 0);
        assert_eq!(stored.respondent_name(), "");
    }

    #[tokio::test]
    async fn keeps_name_given_at_start() {
        let handler =
            StartResponseHandler::new(survey(ScoringMode::Frequency), repository(), bus());

        let result = handler
            .handle(
                StartResponseCommand {
                    respondent: Some("Petrov".to_string()),
                },
                CommandMetadata::new(),
            )
            .await
            .unwrap();

        assert_eq!(result.response.identity(), Some("Petrov"));
    }

    #[tokio::test]
    async fn publishes_response_started_with_correlation() {
        let events = bus();
        let handler =
            StartResponseHandler::new(survey(ScoringMode::FixedSplit), repository(), events.clone());

        let result = handler
            .handle(
                StartResponseCommand::default(),
                CommandMetadata::new()
                    .with_correlation_id("req-1")
                    .with_source("test"),
            )
            .await
            .unwrap();

        let published = events.published_events();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].event_type, "survey.response_started.v1");
        assert_eq!(published[0].aggregate_id, result.response.id().to_string());
        assert_eq!(published[0].metadata.correlation_id.as_deref(), Some("req-1"));
        assert_eq!(published[0].metadata.source.as_deref(), Some("test"));
        assert_eq!(result.event.mode, ScoringMode::FixedSplit);
    }

    #[tokio::test]
    async fn responses_get_distinct_ids() {
        let handler =
            StartResponseHandler::new(survey(ScoringMode::Frequency), repository(), bus());
        let a = handler
            .handle(StartResponseCommand::default(), CommandMetadata::new())
            .await
            .unwrap();
        let b = handler
            .handle(StartResponseCommand::default(), CommandMetadata::new())
            .await
            .unwrap();
        assert_ne!(a.response.id(), b.response.id());
    }
}
