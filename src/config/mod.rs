//! Configuration management for the platform core
//!
//! This module handles loading, validation, and merging of configuration.

pub mod models;

pub use models::*;

use crate::utils::error::{PlatformError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the platform core
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Platform configuration
    pub platform: PlatformConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| PlatformError::Config(format!("Failed to read config file: {}", e)))?;

        let platform: PlatformConfig = serde_yaml::from_str(&content)
            .map_err(|e| PlatformError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { platform };

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let platform = PlatformConfig::from_env()?;
        let config = Self { platform };

        config.validate()?;
        Ok(config)
    }

    /// Get access-control configuration
    pub fn access(&self) -> &AccessConfig {
        &self.platform.access
    }

    /// Get booking configuration
    pub fn booking(&self) -> &BookingConfig {
        &self.platform.booking
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.platform
            .access
            .validate()
            .map_err(|e| PlatformError::Config(format!("Access config error: {}", e)))?;

        self.platform
            .booking
            .validate()
            .map_err(|e| PlatformError::Config(format!("Booking config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.platform = self.platform.merge(other.platform);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.platform).map_err(|e| {
            PlatformError::Config(format!("Failed to serialize config to JSON: {}", e))
        })
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.platform).map_err(|e| {
            PlatformError::Config(format!("Failed to serialize config to YAML: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_config_from_file() {
        let config_content = r#"
access:
  dashboard_roles: ["admin", "manager", "staff", "consultant"]
  login_route: "/login"
  unauthorized_route: "/unauthorized"

booking:
  window_days: 14
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(config_content.as_bytes()).unwrap();

        let config = Config::from_file(temp_file.path()).await.unwrap();

        assert_eq!(config.booking().window_days, 14);
        assert_eq!(config.access().login_route, "/login");
        assert_eq!(config.access().dashboard_roles.len(), 4);
    }

    #[tokio::test]
    async fn test_config_from_file_applies_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"booking:\n  window_days: 7\n").unwrap();

        let config = Config::from_file(temp_file.path()).await.unwrap();

        assert_eq!(config.booking().window_days, 7);
        assert_eq!(config.access().unauthorized_route, "/unauthorized");
    }

    #[tokio::test]
    async fn test_config_from_file_rejects_invalid_window() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"booking:\n  window_days: 0\n").unwrap();

        let result = Config::from_file(temp_file.path()).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();

        let json = config.to_json().unwrap();
        assert!(!json.is_empty());

        let yaml = config.to_yaml().unwrap();
        assert!(!yaml.is_empty());
    }

    #[test]
    fn test_config_merge_prefers_overrides() {
        let base = Config::default();
        let mut other = Config::default();
        other.platform.booking.window_days = 21;
        other.platform.access.login_route = "/signin".to_string();

        let merged = base.merge(other);

        assert_eq!(merged.booking().window_days, 21);
        assert_eq!(merged.access().login_route, "/signin");
    }
}
