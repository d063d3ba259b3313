//! Availability engine core functionality

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::config::BookingConfig;
use crate::utils::error::{PlatformError, Result};

use super::super::types::{ConsultantSchedule, DateKey, ReservationOverlay, SlotId};

/// Availability engine for consultation booking.
///
/// Every operation is a function of the consultant record and the overlay;
/// the engine holds no booking state of its own. A slot counts as booked
/// when either table lists it, and absent keys read as empty sets.
#[derive(Debug, Clone)]
pub struct AvailabilityEngine {
    window_days: u32,
}

impl AvailabilityEngine {
    /// Create an engine from booking configuration
    pub fn new(config: &BookingConfig) -> Self {
        Self {
            window_days: config.window_days,
        }
    }

    /// Length of the candidate window, in days
    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    /// Consecutive candidate days starting at `today` inclusive
    pub fn candidate_window(&self, today: NaiveDate) -> Vec<DateKey> {
        (0..self.window_days)
            .filter_map(|offset| today.checked_add_days(Days::new(offset as u64)))
            .map(DateKey::new)
            .collect()
    }

    /// Whether the slot is booked in the consultant record or the overlay
    pub fn is_slot_booked(
        &self,
        consultant: &ConsultantSchedule,
        overlay: &ReservationOverlay,
        date: &DateKey,
        slot: SlotId,
    ) -> bool {
        consultant.is_shift_booked(date, slot) || overlay.contains(consultant.id, date, slot)
    }

    /// Whether at least one of the four shifts is open on the date
    pub fn has_open_slot(
        &self,
        consultant: &ConsultantSchedule,
        overlay: &ReservationOverlay,
        date: &DateKey,
    ) -> bool {
        SlotId::ALL
            .iter()
            .any(|slot| !self.is_slot_booked(consultant, overlay, date, *slot))
    }

    /// Dates from the window with at least one open shift, in window order.
    ///
    /// A fully-booked date is silently excluded; an empty result is a normal
    /// outcome, not an error.
    pub fn available_dates(
        &self,
        window: &[DateKey],
        consultant: &ConsultantSchedule,
        overlay: &ReservationOverlay,
    ) -> Vec<DateKey> {
        let available: Vec<DateKey> = window
            .iter()
            .filter(|date| self.has_open_slot(consultant, overlay, date))
            .copied()
            .collect();

        debug!(
            "Consultant {}: {} of {} candidate dates available",
            consultant.id,
            available.len(),
            window.len()
        );

        available
    }

    /// Record a confirmed reservation in the overlay.
    ///
    /// Re-checks the consultant's source-of-truth table and returns
    /// [`PlatformError::SlotConflict`] when it already holds the slot.
    /// Re-committing a slot the session itself reserved is an idempotent
    /// no-op: set semantics, the slot stays present exactly once.
    pub fn commit_reservation(
        &self,
        consultant: &ConsultantSchedule,
        overlay: &mut ReservationOverlay,
        date: DateKey,
        slot: SlotId,
    ) -> Result<()> {
        if consultant.is_shift_booked(&date, slot) {
            return Err(PlatformError::SlotConflict {
                consultant_id: consultant.id,
                date,
                slot,
            });
        }

        overlay.reserve(consultant.id, date, slot);
        debug!(
            "Reserved slot {} on {} for consultant {}",
            slot, date, consultant.id
        );
        Ok(())
    }
}

impl Default for AvailabilityEngine {
    fn default() -> Self {
        Self::new(&BookingConfig::default())
    }
}
