//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Survey needs at least {min} options, got {actual}")]
    TooFewOptions { min: usize, actual: usize },

    #[error("Survey option {position} has a blank label")]
    BlankOptionLabel { position: usize },

    #[error("Survey title cannot be empty")]
    EmptySurveyTitle,

    #[error("Response limit must be at least 1")]
    InvalidResponseLimit,
}
