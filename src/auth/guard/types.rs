//! Route guard type definitions

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::helpers::{display_roles, parse_role_spec};

/// Role requirement attached to a navigable route
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteRequirement {
    /// Canonical required roles; `None` means public/any-authenticated
    pub required_roles: Option<BTreeSet<String>>,
    /// Original comma-separated specification, kept for display
    raw: Option<String>,
}

impl RouteRequirement {
    /// A route with no role requirement
    pub fn public() -> Self {
        Self::default()
    }

    /// Parse a comma-separated role specification.
    ///
    /// Fragments are trimmed and lower-cased; empty fragments contribute
    /// nothing. A specification yielding no roles is equivalent to a public
    /// route.
    pub fn from_spec<S: Into<String>>(spec: S) -> Self {
        let raw = spec.into();
        let roles = parse_role_spec(&raw);

        Self {
            required_roles: if roles.is_empty() { None } else { Some(roles) },
            raw: Some(raw),
        }
    }

    /// The requirement in its original comma-joined form, for display
    pub fn display_required(&self) -> String {
        match (&self.raw, &self.required_roles) {
            (Some(raw), _) => raw.trim().to_string(),
            (None, Some(roles)) => roles.iter().cloned().collect::<Vec<_>>().join(", "),
            (None, None) => String::new(),
        }
    }
}

/// Result of evaluating a route requirement against a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The session may enter the route
    Allow,
    /// The session is not authenticated; redirect to login
    DenyUnauthenticated,
    /// The session lacks the required role; redirect to the unauthorized view
    DenyForbidden {
        /// Roles the route requires
        required_roles: BTreeSet<String>,
        /// Canonical roles the session actually holds
        actual_roles: Vec<String>,
    },
}

impl AccessOutcome {
    /// Whether the outcome grants access
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Diagnostic payload handed to the unauthorized view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnauthorizedContext {
    /// The route's requirement in its original comma-joined form
    pub required_role: String,
    /// The session's roles, display-formatted
    pub user_role: String,
}

impl UnauthorizedContext {
    /// Build the payload from a forbidden outcome's two sides
    pub fn new(requirement: &RouteRequirement, actual_roles: &[String]) -> Self {
        Self {
            required_role: requirement.display_required(),
            user_role: display_roles(actual_roles),
        }
    }
}

/// Navigation decision produced for a deny outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectTarget {
    /// Route the caller should navigate to
    pub route: String,
    /// Diagnostic payload for the unauthorized view, when applicable
    pub context: Option<UnauthorizedContext>,
}
