//! Tests for error types and helpers

use super::types::PlatformError;
use crate::booking::types::{DateKey, SlotId};
use chrono::NaiveDate;

#[test]
fn test_error_helpers() {
    let err = PlatformError::config("missing section");
    assert!(matches!(err, PlatformError::Config(_)));

    let err = PlatformError::validation("window too long");
    assert!(matches!(err, PlatformError::Validation(_)));

    let err = PlatformError::submission("collaborator unreachable");
    assert!(matches!(err, PlatformError::Submission(_)));
}

#[test]
fn test_error_display() {
    let err = PlatformError::not_found("consultant");
    assert_eq!(err.to_string(), "Not found: consultant");
}

#[test]
fn test_slot_conflict_display_carries_context() {
    let date = DateKey::new(NaiveDate::from_ymd_opt(2025, 6, 6).unwrap());
    let err = PlatformError::SlotConflict {
        consultant_id: uuid::Uuid::nil(),
        date,
        slot: SlotId(0),
    };

    let rendered = err.to_string();
    assert!(rendered.contains("6/6/2025"));
    assert!(rendered.contains("slot 0"));
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: PlatformError = io_err.into();
    assert!(matches!(err, PlatformError::Io(_)));
}
