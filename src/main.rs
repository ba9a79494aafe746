//! Pairwise Survey server binary.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pairwise_survey::adapters::http::{app_router, SurveyHandlers};
use pairwise_survey::adapters::{InMemoryEventBus, InMemoryResponseRepository, SubmissionLogger};
use pairwise_survey::config::{AppConfig, ServerConfig};
use pairwise_survey::domain::survey::SurveySubmitted;
use pairwise_survey::ports::EventSubscriber;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    init_tracing(&config);
    config.validate()?;

    let survey = Arc::new(config.survey.build_survey()?);
    tracing::info!(
        title = %survey.title(),
        mode = %survey.mode(),
        options = survey.options().len(),
        pairs = survey.pair_count(),
        "Survey configured"
    );

    let event_bus = Arc::new(InMemoryEventBus::new());
    event_bus.subscribe(SurveySubmitted::EVENT_TYPE, Arc::new(SubmissionLogger::new()));
    let repository = Arc::new(InMemoryResponseRepository::with_limit(
        config.survey.max_responses,
    ));

    let handlers = SurveyHandlers::wire(survey, repository, event_bus);
    let app = app_router(handlers)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// JSON logs in production, compact human-readable logs elsewhere.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().compact())
            .init();
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
