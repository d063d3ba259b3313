//! Availability computation
//!
//! Pure predicates over consultant shift tables and the session-local
//! reservation overlay.

mod engine;

// Re-export public types and structs
pub use engine::AvailabilityEngine;
