//! SetRespondentNameHandler - Command handler for entering the respondent's name.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, ResponseId};
use crate::domain::survey::{SurveyError, SurveyResponse};
use crate::ports::SurveyResponseRepository;

/// Command to set the respondent's name.
#[derive(Debug, Clone)]
pub struct SetRespondentNameCommand {
    pub response_id: ResponseId,
    pub name: String,
}

/// Result of setting the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetRespondentNameResult {
    pub response_id: ResponseId,
    /// Whether the name is usable for submission (non-blank).
    pub has_identity: bool,
}

/// Handler for setting respondent names.
///
/// Blank names are stored as entered; submission is where they are rejected.
pub struct SetRespondentNameHandler {
    repository: Arc<dyn SurveyResponseRepository>,
}

impl SetRespondentNameHandler {
    pub fn new(repository: Arc<dyn SurveyResponseRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: SetRespondentNameCommand,
        _metadata: CommandMetadata,
    ) -> Result<SetRespondentNameResult, SurveyError> {
        let response = self
            .repository
            .modify(&cmd.response_id, &mut |response: &mut SurveyResponse| {
                response.set_respondent_name(cmd.name.as_str());
                true
            })
            .await?
            .ok_or(SurveyError::NotFound(cmd.response_id))?;

        Ok(SetRespondentNameResult {
            response_id: cmd.response_id,
            has_identity: response.identity().is_some(),
        })
    }
}
