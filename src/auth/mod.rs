//! Authorization system
//!
//! Session and role-claim models, claim normalization, and the route guard
//! that produces allow/deny decisions for navigable routes. Authentication
//! itself (token issuance and verification) belongs to an external
//! collaborator; this module only consumes its results.

pub mod claims;
pub mod guard;
pub mod session;

// Re-export commonly used types
pub use claims::{GUEST_ROLE, normalize_claim};
pub use guard::{AccessOutcome, RedirectTarget, RouteGuard, RouteRequirement, UnauthorizedContext};
pub use session::{RoleClaim, RoleClaimEntry, RoleDescriptor, Session, SessionProvider};
