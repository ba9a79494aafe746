//! HTTP adapters - REST API implementations.

pub mod survey;

use axum::{routing::get, Router};

pub use survey::{survey_routes, SurveyHandlers, REQUEST_ID_HEADER};

/// Full application router: survey endpoints under `/api` plus `/health`.
pub fn app_router(handlers: SurveyHandlers) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .nest("/api", survey_routes(handlers))
}
