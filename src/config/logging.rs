//! Logging configuration

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::error::{ConfigError, ValidationError};

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|_| ValidationError::InvalidLogLevel(self.level.clone()))
    }

    /// Install the global tracing subscriber.
    ///
    /// `RUST_LOG` takes precedence over the configured level.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the filter is invalid or a subscriber is
    /// already installed.
    pub fn init(&self) -> Result<(), ConfigError> {
        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(&self.level)
                .map_err(|_| ValidationError::InvalidLogLevel(self.level.clone()))?,
        };

        let builder = tracing_subscriber::fmt().with_env_filter(filter);
        let result = if self.json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };

        result.map_err(|e| ConfigError::TracingInit(e.to_string()))
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
