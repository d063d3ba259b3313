//! Access-decision procedure

use std::collections::BTreeSet;

use tracing::debug;

use crate::auth::claims::{GUEST_ROLE, normalize_claim};
use crate::auth::session::Session;
use crate::config::AccessConfig;

use super::helpers::intersects;
use super::types::{AccessOutcome, RedirectTarget, RouteRequirement, UnauthorizedContext};

/// Role that marks the customer tier of routes
const CUSTOMER_ROLE: &str = "customer";

/// Route guard evaluating sessions against route requirements.
///
/// Stateless between calls; every route entry is evaluated afresh.
///
/// Any role in the dashboard tier satisfies any dashboard-gated
/// requirement. This coarse policy matches the product as shipped and is a
/// known privilege gap pending product clarification; do not tighten it
/// here without a policy decision.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    dashboard_roles: BTreeSet<String>,
    login_route: String,
    unauthorized_route: String,
}

impl RouteGuard {
    /// Build a guard from access configuration.
    ///
    /// Configured dashboard roles are trimmed and lower-cased so requirement
    /// comparison stays case-insensitive.
    pub fn new(config: &AccessConfig) -> Self {
        let dashboard_roles = config
            .dashboard_roles
            .iter()
            .map(|role| role.trim().to_lowercase())
            .filter(|role| !role.is_empty())
            .collect();

        Self {
            dashboard_roles,
            login_route: config.login_route.clone(),
            unauthorized_route: config.unauthorized_route.clone(),
        }
    }

    /// Evaluate a session against a route requirement.
    ///
    /// Pure decision: no navigation, no logging of the caller's concern.
    /// Malformed role claims degrade to the guest role; every input resolves
    /// to one of the three outcomes.
    pub fn evaluate(&self, session: &Session, requirement: &RouteRequirement) -> AccessOutcome {
        if !session.authenticated {
            debug!("Denying unauthenticated session");
            return AccessOutcome::DenyUnauthenticated;
        }

        let Some(required_roles) = &requirement.required_roles else {
            return AccessOutcome::Allow;
        };

        let actual_roles = normalize_claim(&session.role_claim);

        let allowed = if intersects(required_roles.iter(), &self.dashboard_roles) {
            // Coarse tier rule: membership in any dashboard role satisfies a
            // dashboard-gated route, not just the exact required one
            intersects(&actual_roles, &self.dashboard_roles)
        } else if required_roles.contains(CUSTOMER_ROLE) {
            actual_roles
                .iter()
                .any(|role| role == CUSTOMER_ROLE || role == GUEST_ROLE)
        } else {
            intersects(&actual_roles, required_roles)
        };

        if allowed {
            AccessOutcome::Allow
        } else {
            debug!(
                "Denying session: required {:?}, actual {:?}",
                required_roles, actual_roles
            );
            AccessOutcome::DenyForbidden {
                required_roles: required_roles.clone(),
                actual_roles,
            }
        }
    }

    /// Navigation decision for a deny outcome.
    ///
    /// `Allow` yields no redirect; performing the navigation remains the
    /// caller's responsibility.
    pub fn redirect_for(
        &self,
        outcome: &AccessOutcome,
        requirement: &RouteRequirement,
    ) -> Option<RedirectTarget> {
        match outcome {
            AccessOutcome::Allow => None,
            AccessOutcome::DenyUnauthenticated => Some(RedirectTarget {
                route: self.login_route.clone(),
                context: None,
            }),
            AccessOutcome::DenyForbidden { actual_roles, .. } => Some(RedirectTarget {
                route: self.unauthorized_route.clone(),
                context: Some(UnauthorizedContext::new(requirement, actual_roles)),
            }),
        }
    }

    /// The configured dashboard tier
    pub fn dashboard_roles(&self) -> &BTreeSet<String> {
        &self.dashboard_roles
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new(&AccessConfig::default())
    }
}
