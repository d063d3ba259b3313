//! Booking submission boundary
//!
//! The external collaborator that persists a confirmed booking lives behind
//! [`BookingSubmitter`]. [`BookingDesk`] orchestrates one booking: validate
//! the contact form, check the slot, await the collaborator once, then
//! commit the reservation to the session overlay. There is no cancellation
//! path; once the submitter completes, the overlay mutation is immediate
//! and unconditional.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::BookingConfig;
use crate::utils::error::{PlatformError, Result};

use super::availability::AvailabilityEngine;
use super::types::{ConsultantSchedule, DateKey, ReservationOverlay, SlotId};

/// Contact form accompanying a booking; opaque to the availability engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingForm {
    /// Contact name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Reason for the consultation
    pub reason: String,
}

impl BookingForm {
    /// Light sanity check before handing the form to the collaborator
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PlatformError::validation("Contact name is required"));
        }

        let email = self.email.trim();
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            return Err(PlatformError::validation("Contact email is not valid"));
        }

        Ok(())
    }
}

/// A booking to submit: the targeted slot plus the contact form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Targeted consultant
    pub consultant_id: Uuid,
    /// Targeted calendar day
    pub date: DateKey,
    /// Targeted shift
    pub slot: SlotId,
    /// Contact form, passed through untouched
    pub form: BookingForm,
}

/// External booking-submission collaborator
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingSubmitter: Send + Sync {
    /// Submit a confirmed booking. Invoked exactly once per booking.
    async fn submit(&self, request: &BookingRequest) -> Result<()>;
}

/// Submitter that simulates the collaborator's network latency
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    /// Create a submitter that sleeps for `delay` before acknowledging
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Duration::from_millis(400))
    }
}

#[async_trait]
impl BookingSubmitter for SimulatedSubmitter {
    async fn submit(&self, request: &BookingRequest) -> Result<()> {
        debug!(
            "Simulating submission latency for consultant {}",
            request.consultant_id
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

/// Booking orchestration over the availability engine and the submitter
pub struct BookingDesk {
    engine: AvailabilityEngine,
    submitter: Arc<dyn BookingSubmitter>,
}

impl BookingDesk {
    /// Create a desk from booking configuration and a submitter
    pub fn new(config: &BookingConfig, submitter: Arc<dyn BookingSubmitter>) -> Self {
        Self {
            engine: AvailabilityEngine::new(config),
            submitter,
        }
    }

    /// The underlying availability engine
    pub fn engine(&self) -> &AvailabilityEngine {
        &self.engine
    }

    /// Run one booking end to end.
    ///
    /// Refuses with [`PlatformError::SlotConflict`] before invoking the
    /// submitter when either the consultant record or the overlay already
    /// holds the slot, so the collaborator is never called for a doomed
    /// booking.
    pub async fn book(
        &self,
        consultant: &ConsultantSchedule,
        overlay: &mut ReservationOverlay,
        request: BookingRequest,
    ) -> Result<()> {
        request.form.validate()?;

        if self
            .engine
            .is_slot_booked(consultant, overlay, &request.date, request.slot)
        {
            return Err(PlatformError::SlotConflict {
                consultant_id: consultant.id,
                date: request.date,
                slot: request.slot,
            });
        }

        self.submitter.submit(&request).await?;

        self.engine
            .commit_reservation(consultant, overlay, request.date, request.slot)?;

        info!(
            "Booked slot {} on {} with consultant {}",
            request.slot, request.date, consultant.id
        );
        Ok(())
    }
}
