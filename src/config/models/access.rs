//! Access-control configuration

use serde::{Deserialize, Serialize};

/// Access-control configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Roles granted access to internal operational routes
    #[serde(default = "default_dashboard_roles")]
    pub dashboard_roles: Vec<String>,
    /// Route an unauthenticated session is redirected to
    #[serde(default = "default_login_route")]
    pub login_route: String,
    /// Route a forbidden session is redirected to
    #[serde(default = "default_unauthorized_route")]
    pub unauthorized_route: String,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            dashboard_roles: default_dashboard_roles(),
            login_route: default_login_route(),
            unauthorized_route: default_unauthorized_route(),
        }
    }
}

impl AccessConfig {
    /// Merge access configurations (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        if other.dashboard_roles != default_dashboard_roles() {
            self.dashboard_roles = other.dashboard_roles;
        }
        if other.login_route != default_login_route() {
            self.login_route = other.login_route;
        }
        if other.unauthorized_route != default_unauthorized_route() {
            self.unauthorized_route = other.unauthorized_route;
        }
        self
    }

    /// Validate access configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.dashboard_roles.is_empty() {
            return Err("Dashboard role list cannot be empty".to_string());
        }

        for route in [&self.login_route, &self.unauthorized_route] {
            if !route.starts_with('/') {
                return Err(format!("Route must start with '/': {}", route));
            }
        }

        Ok(())
    }
}

fn default_dashboard_roles() -> Vec<String> {
    ["admin", "manager", "staff", "consultant"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_login_route() -> String {
    "/login".to_string()
}

fn default_unauthorized_route() -> String {
    "/unauthorized".to_string()
}
