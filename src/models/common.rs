use serde::Deserialize;

use crate::error::ValidationError;

// Query parameters for the earliest-fit search
#[derive(Debug, Deserialize)]
pub struct FindFreeParams {
    #[serde(default = "default_interval_duration")]
    pub interval_duration: i64,
}

pub fn default_interval_duration() -> i64 {
    60
}

impl FindFreeParams {
    /// Requested duration in minutes; negative values are rejected.
    pub fn duration_minutes(&self) -> Result<u32, ValidationError> {
        if self.interval_duration < 0 {
            return Err(ValidationError::NegativeDuration(self.interval_duration));
        }
        // Anything beyond u32 cannot fit into a single day anyway
        Ok(u32::try_from(self.interval_duration).unwrap_or(u32::MAX))
    }
}
