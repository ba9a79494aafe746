//! Survey command and query handlers.

mod get_response;
mod record_score;
mod set_respondent_name;
mod start_response;
mod submit_response;

pub use get_response::{GetResponseHandler, GetResponseQuery, ResponseView};
pub use record_score::{RecordScoreCommand, RecordScoreHandler, RecordScoreResult};
pub use set_respondent_name::{
    SetRespondentNameCommand, SetRespondentNameHandler, SetRespondentNameResult,
};
pub use start_response::{StartResponseCommand, StartResponseHandler, StartResponseResult};
pub use submit_response::{SubmitResponseCommand, SubmitResponseHandler, SubmitResponseResult};

use crate::domain::foundation::ResponseId;
use crate::domain::survey::{SurveyError, SurveyResponse};
use crate::ports::SurveyResponseRepository;

/// Loads a response or fails with `NotFound`.
async fn load_response(
    repository: &dyn SurveyResponseRepository,
    id: &ResponseId,
) -> Result<SurveyResponse, SurveyError> {
    repository
        .find_by_id(id)
        .await?
        .ok_or(SurveyError::NotFound(*id))
}
