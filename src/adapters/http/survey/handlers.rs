//! HTTP handlers for survey endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::application::{
    GetResponseHandler, GetResponseQuery, RecordScoreCommand, RecordScoreHandler,
    SetRespondentNameCommand, SetRespondentNameHandler, StartResponseCommand,
    StartResponseHandler, SubmitResponseCommand, SubmitResponseHandler,
};
use crate::domain::foundation::{CommandMetadata, ResponseId};
use crate::domain::survey::{PairwiseSurvey, SurveyError};
use crate::ports::{EventPublisher, SurveyResponseRepository};

use super::dto::{
    ErrorResponse, NameUpdatedResponse, PairScoreResponse, RecordScoreRequest,
    ResponseCreatedResponse, ResponseDetailResponse, SetNameRequest, StartResponseRequest,
    SubmissionResponse, SurveyDefinitionResponse,
};

/// Header carrying a caller-supplied correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SurveyHandlers {
    survey: Arc<PairwiseSurvey>,
    start_handler: Arc<StartResponseHandler>,
    name_handler: Arc<SetRespondentNameHandler>,
    score_handler: Arc<RecordScoreHandler>,
    submit_handler: Arc<SubmitResponseHandler>,
    get_handler: Arc<GetResponseHandler>,
}

impl SurveyHandlers {
    pub fn new(
        survey: Arc<PairwiseSurvey>,
        start_handler: Arc<StartResponseHandler>,
        name_handler: Arc<SetRespondentNameHandler>,
        score_handler: Arc<RecordScoreHandler>,
        submit_handler: Arc<SubmitResponseHandler>,
        get_handler: Arc<GetResponseHandler>,
    ) -> Self {
        Self {
            survey,
            start_handler,
            name_handler,
            score_handler,
            submit_handler,
            get_handler,
        }
    }

    /// Wires every handler against the same survey and ports.
    pub fn wire(
        survey: Arc<PairwiseSurvey>,
        repository: Arc<dyn SurveyResponseRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self::new(
            survey.clone(),
            Arc::new(StartResponseHandler::new(
                survey.clone(),
                repository.clone(),
                event_publisher.clone(),
            )),
            Arc::new(SetRespondentNameHandler::new(repository.clone())),
            Arc::new(RecordScoreHandler::new(survey.clone(), repository.clone())),
            Arc::new(SubmitResponseHandler::new(
                survey.clone(),
                repository.clone(),
                event_publisher,
            )),
            Arc::new(GetResponseHandler::new(survey, repository)),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/survey - Survey definition
pub async fn get_survey(State(handlers): State<SurveyHandlers>) -> Response {
    let response = SurveyDefinitionResponse::from(handlers.survey.as_ref());
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /api/responses - Start a new response
pub async fn start_response(
    State(handlers): State<SurveyHandlers>,
    headers: HeaderMap,
    body: Option<Json<StartResponseRequest>>,
) -> Response {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let cmd = StartResponseCommand {
        respondent: req.respondent,
    };

    match handlers.start_handler.handle(cmd, command_metadata(&headers)).await {
        Ok(result) => {
            let response = ResponseCreatedResponse {
                response_id: result.response.id().to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_survey_error(e),
    }
}

/// GET /api/responses/:id - Response with every pair's status
pub async fn get_response(
    State(handlers): State<SurveyHandlers>,
    Path(response_id): Path<String>,
) -> Response {
    let response_id = match parse_response_id(&response_id) {
        Ok(id) => id,
        Err(rejection) => return rejection,
    };

    match handlers
        .get_handler
        .handle(GetResponseQuery { response_id })
        .await
    {
        Ok(view) => {
            let response: ResponseDetailResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_survey_error(e),
    }
}

/// PUT /api/responses/:id/name - Set the respondent's name
pub async fn set_name(
    State(handlers): State<SurveyHandlers>,
    headers: HeaderMap,
    Path(response_id): Path<String>,
    body: Result<Json<SetNameRequest>, JsonRejection>,
) -> Response {
    let response_id = match parse_response_id(&response_id) {
        Ok(id) => id,
        Err(rejection) => return rejection,
    };
    let req = match json_body(body) {
        Ok(req) => req,
        Err(rejection) => return rejection,
    };

    let cmd = SetRespondentNameCommand {
        response_id,
        name: req.name,
    };

    match handlers.name_handler.handle(cmd, command_metadata(&headers)).await {
        Ok(result) => {
            let response = NameUpdatedResponse {
                response_id: result.response_id.to_string(),
                has_identity: result.has_identity,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_survey_error(e),
    }
}

/// PUT /api/responses/:id/pairs/:index - Record one pair's scores
pub async fn record_score(
    State(handlers): State<SurveyHandlers>,
    headers: HeaderMap,
    Path((response_id, pair_index)): Path<(String, String)>,
    body: Result<Json<RecordScoreRequest>, JsonRejection>,
) -> Response {
    let response_id = match parse_response_id(&response_id) {
        Ok(id) => id,
        Err(rejection) => return rejection,
    };
    let pair_index = match pair_index.parse::<usize>() {
        Ok(index) => index,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid pair index")),
            )
                .into_response()
        }
    };

    let req = match json_body(body) {
        Ok(req) => req,
        Err(rejection) => return rejection,
    };

    let cmd = RecordScoreCommand {
        response_id,
        pair_index,
        score_first: req.first,
        score_second: req.second,
    };

    match handlers.score_handler.handle(cmd, command_metadata(&headers)).await {
        Ok(result) => {
            let response: PairScoreResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_survey_error(e),
    }
}

/// POST /api/responses/:id/submit - Validate and submit
pub async fn submit_response(
    State(handlers): State<SurveyHandlers>,
    headers: HeaderMap,
    Path(response_id): Path<String>,
) -> Response {
    let response_id = match parse_response_id(&response_id) {
        Ok(id) => id,
        Err(rejection) => return rejection,
    };

    match handlers
        .submit_handler
        .handle(SubmitResponseCommand { response_id }, command_metadata(&headers))
        .await
    {
        Ok(result) => {
            let response: SubmissionResponse = result.ack.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_survey_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

fn parse_response_id(raw: &str) -> Result<ResponseId, Response> {
    raw.parse::<ResponseId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid response ID")),
        )
            .into_response()
    })
}

/// Malformed or mistyped bodies get the same error shape as everything else.
fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, Response> {
    body.map(|Json(req)| req).map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(rejection.body_text())),
        )
            .into_response()
    })
}

fn command_metadata(headers: &HeaderMap) -> CommandMetadata {
    let metadata = CommandMetadata::new().with_source("http");
    match headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
    {
        Some(request_id) => metadata.with_correlation_id(request_id),
        None => metadata,
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

pub(crate) fn handle_survey_error(error: SurveyError) -> Response {
    let code = error.code();
    let message = error.message();
    match error {
        SurveyError::MissingIdentity => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::new(code, message)),
        )
            .into_response(),
        SurveyError::InconsistentScores(pairs) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::inconsistent(code, message, &pairs)),
        )
            .into_response(),
        SurveyError::InvalidScoreRange { ref field, .. } => {
            let mut body = ErrorResponse::new(code, message);
            body.details = Some(serde_json::json!({ "field": field }));
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        }
        SurveyError::ValidationFailed { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(code, message)),
        )
            .into_response(),
        SurveyError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Response", &id.to_string())),
        )
            .into_response(),
        SurveyError::UnknownPair(_) | SurveyError::PairIndexOutOfRange { .. } => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(code, message)),
        )
            .into_response(),
        SurveyError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Survey request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal(msg)),
            )
                .into_response()
        }
    }
}
