//! Booking flow integration tests
//!
//! Covers the end-to-end scenarios from the booking page's point of view:
//! scan the window, pick an open slot, submit, and observe the overlay.

use std::sync::Arc;
use std::time::Duration;

use caregate::{
    AvailabilityEngine, BookingDesk, BookingForm, BookingRequest, PlatformError,
    ReservationOverlay, SimulatedSubmitter, SlotId,
};
use chrono::NaiveDate;

use crate::common::fixtures::{consultant, consultant_with_booked};

fn form() -> BookingForm {
    BookingForm {
        name: "An Nguyen".to_string(),
        email: "an.nguyen@example.com".to_string(),
        phone: "+84 90 123 4567".to_string(),
        reason: "Hormone therapy follow-up".to_string(),
    }
}

#[test]
fn test_partially_booked_date_stays_available() {
    let engine = AvailabilityEngine::default();
    let record = consultant_with_booked("6/6/2025", &[0]);
    let overlay = ReservationOverlay::new();
    let date = "6/6/2025".parse().unwrap();

    assert!(engine.is_slot_booked(&record, &overlay, &date, SlotId(0)));
    assert!(!engine.is_slot_booked(&record, &overlay, &date, SlotId(1)));
    assert!(engine.has_open_slot(&record, &overlay, &date));

    let today = NaiveDate::from_ymd_opt(2025, 6, 6).unwrap();
    let window = engine.candidate_window(today);
    let available = engine.available_dates(&window, &record, &overlay);
    assert_eq!(available.len(), 14);
}

#[test]
fn test_commit_then_recheck_via_overlay() {
    let engine = AvailabilityEngine::default();
    let record = consultant_with_booked("6/6/2025", &[0]);
    let mut overlay = ReservationOverlay::new();
    let date = "6/6/2025".parse().unwrap();

    engine
        .commit_reservation(&record, &mut overlay, date, SlotId(1))
        .unwrap();

    assert!(engine.is_slot_booked(&record, &overlay, &date, SlotId(1)));
    assert!(!engine.is_slot_booked(&record, &overlay, &date, SlotId(2)));
}

#[tokio::test]
async fn test_booking_desk_flow_with_simulated_latency() {
    let record = consultant();
    let mut overlay = ReservationOverlay::new();
    let desk = BookingDesk::new(
        &Default::default(),
        Arc::new(SimulatedSubmitter::new(Duration::from_millis(5))),
    );

    let date = "6/6/2025".parse().unwrap();
    let request = BookingRequest {
        consultant_id: record.id,
        date,
        slot: SlotId(2),
        form: form(),
    };

    desk.book(&record, &mut overlay, request).await.unwrap();

    assert!(desk.engine().is_slot_booked(&record, &overlay, &date, SlotId(2)));
}

#[tokio::test]
async fn test_booking_desk_refuses_taken_slot() {
    let record = consultant_with_booked("6/6/2025", &[3]);
    let mut overlay = ReservationOverlay::new();
    let desk = BookingDesk::new(
        &Default::default(),
        Arc::new(SimulatedSubmitter::new(Duration::from_millis(1))),
    );

    let request = BookingRequest {
        consultant_id: record.id,
        date: "6/6/2025".parse().unwrap(),
        slot: SlotId(3),
        form: form(),
    };

    let result = desk.book(&record, &mut overlay, request).await;
    assert!(matches!(result, Err(PlatformError::SlotConflict { .. })));
    assert!(overlay.is_empty());
}

#[test]
fn test_fully_booked_consultant_offers_nothing() {
    let engine = AvailabilityEngine::default();
    let mut record = consultant();
    let today = NaiveDate::from_ymd_opt(2025, 6, 6).unwrap();
    let window = engine.candidate_window(today);

    for date in &window {
        record
            .booked_shifts
            .insert(*date, SlotId::ALL.into_iter().collect());
    }

    let overlay = ReservationOverlay::new();
    assert!(engine.available_dates(&window, &record, &overlay).is_empty());
}
