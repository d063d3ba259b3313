//! Booking configuration

use serde::{Deserialize, Serialize};

/// Booking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Length of the candidate booking window, in days (today inclusive)
    #[serde(default = "default_window_days")]
    pub window_days: u32,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
        }
    }
}

impl BookingConfig {
    /// Merge booking configurations (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        if other.window_days != default_window_days() {
            self.window_days = other.window_days;
        }
        self
    }

    /// Validate booking configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.window_days == 0 {
            return Err("Booking window must be at least one day".to_string());
        }

        if self.window_days > 90 {
            return Err("Booking window must not exceed 90 days".to_string());
        }

        Ok(())
    }
}

fn default_window_days() -> u32 {
    14
}
