//! Consultation booking
//!
//! Availability computation over consultant shift tables and the
//! session-local reservation overlay, plus the asynchronous submission
//! boundary that confirms a booking with the external collaborator.

pub mod availability;
pub mod catalog;
pub mod submission;
pub mod types;

// Re-export commonly used types
pub use availability::AvailabilityEngine;
pub use catalog::{Slot, slot, slots, time_label};
pub use submission::{BookingDesk, BookingForm, BookingRequest, BookingSubmitter, SimulatedSubmitter};
pub use types::{ConsultantSchedule, DateKey, ReservationOverlay, SlotId};
