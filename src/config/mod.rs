//! Application configuration module
//!
//! Configuration is loaded from environment variables using the `config` and
//! `dotenvy` crates. Variables carry the `COVERAGE_CONTEXT` prefix and nested
//! values are separated by double underscores. Every value has a default, so
//! an empty environment yields a usable configuration.
//!
//! # Example
//!
//! ```no_run
//! use coverage_context::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! config.logging.init().expect("Failed to install tracing subscriber");
//! ```

mod engine;
mod error;
mod logging;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Context engine behavior (optional questions, vehicle year bounds)
    #[serde(default)]
    pub engine: EngineConfig,

    /// Tracing output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `COVERAGE_CONTEXT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `COVERAGE_CONTEXT__ENGINE__ASK_OPTIONAL_FIELDS=true` -> `engine.ask_optional_fields = true`
    /// - `COVERAGE_CONTEXT__LOGGING__LEVEL=debug` -> `logging.level = "debug"`
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
                    .prefix("COVERAGE_CONTEXT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
