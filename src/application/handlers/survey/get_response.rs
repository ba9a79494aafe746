//! GetResponseHandler - Query handler for reviewing a response.

use std::sync::Arc;

use super::load_response;
use crate::domain::foundation::{ResponseId, Timestamp};
use crate::domain::survey::{PairReview, PairwiseSurvey, Progress, SurveyError};
use crate::ports::SurveyResponseRepository;

/// Query for one response.
#[derive(Debug, Clone)]
pub struct GetResponseQuery {
    pub response_id: ResponseId,
}

/// Read model of a response: every pair in enumeration order with its
/// entry and status.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseView {
    pub id: ResponseId,
    pub respondent: String,
    pub reviews: Vec<PairReview>,
    pub progress: Progress,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

pub struct GetResponseHandler {
    survey: Arc<PairwiseSurvey>,
    repository: Arc<dyn SurveyResponseRepository>,
}

impl GetResponseHandler {
    pub fn new(survey: Arc<PairwiseSurvey>, repository: Arc<dyn SurveyResponseRepository>) -> Self {
        Self { survey, repository }
    }

    pub async fn handle(&self, query: GetResponseQuery) -> Result<ResponseView, SurveyError> {
        let response = load_response(self.repository.as_ref(), &query.response_id).await?;

        Ok(ResponseView {
            id: *response.id(),
            respondent: response.respondent_name().to_string(),
            reviews: self.survey.review(&response),
            progress: self.survey.progress(&response),
            created_at: *response.created_at(),
            updated_at: *response.updated_at(),
        })
    }
}
