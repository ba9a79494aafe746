//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PAIRWISE_SURVEY` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use pairwise_survey::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod error;
mod server;
mod survey;

pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use survey::{SurveyConfig, DEFAULT_OPTIONS, OPTION_SEPARATOR};

use serde::Deserialize;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "PAIRWISE_SURVEY";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// development setup with the shopping-centre survey.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Survey configuration (title, mode, options)
    #[serde(default)]
    pub survey: SurveyConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PAIRWISE_SURVEY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PAIRWISE_SURVEY__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PAIRWISE_SURVEY__SURVEY__MODE=fixed_split` -> `survey.mode = fixed_split`
    /// - `PAIRWISE_SURVEY__SURVEY__OPTIONS="A;B;C"` -> three options
    /// - `PAIRWISE_SURVEY__SURVEY__MAX_RESPONSES=500` -> keep at most 500 responses
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.survey.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
