//! Configuration models

mod access;
mod booking;

pub use access::AccessConfig;
pub use booking::BookingConfig;

use crate::utils::error::{PlatformError, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Platform configuration aggregate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Access-control configuration
    #[serde(default)]
    pub access: AccessConfig,
    /// Booking configuration
    #[serde(default)]
    pub booking: BookingConfig,
}

impl PlatformConfig {
    /// Merge platform configurations (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.access = self.access.merge(other.access);
        self.booking = self.booking.merge(other.booking);
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(window) = env::var("CAREGATE_WINDOW_DAYS") {
            config.booking.window_days = window
                .parse()
                .map_err(|e| PlatformError::Config(format!("Invalid window days: {}", e)))?;
        }
        if let Ok(route) = env::var("CAREGATE_LOGIN_ROUTE") {
            config.access.login_route = route;
        }
        if let Ok(route) = env::var("CAREGATE_UNAUTHORIZED_ROUTE") {
            config.access.unauthorized_route = route;
        }
        if let Ok(roles) = env::var("CAREGATE_DASHBOARD_ROLES") {
            config.access.dashboard_roles = roles
                .split(',')
                .map(|role| role.trim().to_string())
                .filter(|role| !role.is_empty())
                .collect();
        }

        Ok(config)
    }
}
