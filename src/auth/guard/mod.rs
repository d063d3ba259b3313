//! Route guard
//!
//! The access-decision procedure that gates navigable routes.

mod decision;
mod helpers;
mod types;

// Re-export public types and structs
pub use decision::RouteGuard;
pub use types::{AccessOutcome, RedirectTarget, RouteRequirement, UnauthorizedContext};
