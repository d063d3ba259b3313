//! # Caregate
//!
//! Access-control and consultation-booking core for a gender-sensitive
//! healthcare services platform. The crate supplies the two decision
//! procedures the routed frontend consumes as library calls: the route
//! guard (allow/deny with redirect targets) and the availability engine
//! (bookable dates and slots, session-local reservations).
//!
//! ## Features
//!
//! - **Route guard**: role-based allow/deny decisions over untrusted role
//!   claims, with redirect targets and diagnostic payloads for denied
//!   sessions
//! - **Claim normalization**: heterogeneous role-claim shapes (string,
//!   list, descriptor object) resolved at the ingestion boundary, degrading
//!   to a guest role instead of failing
//! - **Availability engine**: candidate booking windows, per-slot booked
//!   predicates, and order-preserving date filtering over consultant shift
//!   tables
//! - **Session overlay**: reservations committed during the session are
//!   tracked locally until the external data provider reflects them
//! - **Async submission boundary**: the booking collaborator sits behind a
//!   trait, with a latency-simulating implementation for development
//!
//! ## Quick Start
//!
//! ```rust
//! use caregate::{AccessOutcome, RoleClaim, RouteGuard, RouteRequirement, Session};
//!
//! let guard = RouteGuard::default();
//! let session = Session::authenticated(RoleClaim::Name("staff".to_string()));
//! let requirement = RouteRequirement::from_spec("admin,manager");
//!
//! // Any dashboard-tier role reaches a dashboard-gated route
//! assert_eq!(guard.evaluate(&session, &requirement), AccessOutcome::Allow);
//! ```
//!
//! ## Booking
//!
//! ```rust
//! use caregate::{AvailabilityEngine, ConsultantSchedule, ReservationOverlay, SlotId};
//! use chrono::NaiveDate;
//! use uuid::Uuid;
//!
//! let engine = AvailabilityEngine::default();
//! let consultant = ConsultantSchedule::new(Uuid::new_v4(), "Dr. Quyen");
//! let mut overlay = ReservationOverlay::new();
//!
//! let today = NaiveDate::from_ymd_opt(2025, 6, 6).unwrap();
//! let window = engine.candidate_window(today);
//! let open = engine.available_dates(&window, &consultant, &overlay);
//! assert_eq!(open.len(), 14);
//!
//! engine
//!     .commit_reservation(&consultant, &mut overlay, window[0], SlotId(1))
//!     .unwrap();
//! assert!(engine.is_slot_booked(&consultant, &overlay, &window[0], SlotId(1)));
//! ```

#![warn(clippy::all)]

// Public module exports
pub mod auth;
pub mod booking;
pub mod config;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{PlatformError, Result};

// Export the authorization surface
pub use auth::{
    AccessOutcome, GUEST_ROLE, RedirectTarget, RoleClaim, RoleClaimEntry, RoleDescriptor,
    RouteGuard, RouteRequirement, Session, SessionProvider, UnauthorizedContext, normalize_claim,
};

// Export the booking surface
pub use booking::{
    AvailabilityEngine, BookingDesk, BookingForm, BookingRequest, BookingSubmitter,
    ConsultantSchedule, DateKey, ReservationOverlay, SimulatedSubmitter, Slot, SlotId,
};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
