//! HTTP adapter for survey endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    EntryDto, ErrorResponse, NameUpdatedResponse, OptionDto, PairDto, PairReviewDto,
    PairScoreResponse, ProgressDto, RecordScoreRequest, ResponseCreatedResponse,
    ResponseDetailResponse, SetNameRequest, StartResponseRequest, SubmissionResponse,
    SubmittedEntryDto, SurveyDefinitionResponse,
};
pub use handlers::{SurveyHandlers, REQUEST_ID_HEADER};
pub use routes::survey_routes;
