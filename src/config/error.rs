//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Tracing subscriber initialization failed: {0}")]
    TracingInit(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("min_vehicle_year exceeds max_vehicle_year")]
    InvalidVehicleYearRange,

    #[error("min_vehicle_year {0} is older than the oldest supported model year (1900)")]
    VehicleYearTooOld(u16),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
