//! Engine configuration

use chrono::Datelike;
use serde::Deserialize;
use std::ops::RangeInclusive;

use super::error::ValidationError;

/// Earliest model year the engine will ever accept.
const OLDEST_SUPPORTED_VEHICLE_YEAR: u16 = 1900;

/// Context engine configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// Also ask about optional fields (travelers, trip purpose, breed)
    #[serde(default)]
    pub ask_optional_fields: bool,

    /// Oldest vehicle model year accepted as a specific `year`
    #[serde(default = "default_min_vehicle_year")]
    pub min_vehicle_year: u16,

    /// Newest vehicle model year accepted; defaults to next calendar year
    #[serde(default)]
    pub max_vehicle_year: Option<u16>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ask_optional_fields: false,
            min_vehicle_year: default_min_vehicle_year(),
            max_vehicle_year: None,
        }
    }
}

impl EngineConfig {
    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_vehicle_year < OLDEST_SUPPORTED_VEHICLE_YEAR {
            return Err(ValidationError::VehicleYearTooOld(self.min_vehicle_year));
        }
        if self.min_vehicle_year > self.resolved_max_vehicle_year() {
            return Err(ValidationError::InvalidVehicleYearRange);
        }
        Ok(())
    }

    /// Newest accepted model year, resolving the default against the clock.
    pub fn resolved_max_vehicle_year(&self) -> u16 {
        self.max_vehicle_year.unwrap_or_else(|| {
            u16::try_from(chrono::Utc::now().year() + 1).unwrap_or(u16::MAX)
        })
    }

    /// Accepted model years.
    pub fn vehicle_years(&self) -> RangeInclusive<u16> {
        self.min_vehicle_year..=self.resolved_max_vehicle_year()
    }
}

fn default_min_vehicle_year() -> u16 {
    1950
}
