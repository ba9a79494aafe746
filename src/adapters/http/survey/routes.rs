//! HTTP routes for survey endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    get_response, get_survey, record_score, set_name, start_response, submit_response,
    SurveyHandlers,
};

/// Creates the survey router with all endpoints.
pub fn survey_routes(handlers: SurveyHandlers) -> Router {
    Router::new()
        .route("/survey", get(get_survey))
        .route("/responses", post(start_response))
        .route("/responses/:id", get(get_response))
        .route("/responses/:id/name", put(set_name))
        .route("/responses/:id/pairs/:index", put(record_score))
        .route("/responses/:id/submit", post(submit_response))
        .with_state(handlers)
}
