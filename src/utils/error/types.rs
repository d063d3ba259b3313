//! Error types for the platform core

use thiserror::Error;

use crate::booking::types::{DateKey, SlotId};

/// Result type alias for the platform core
pub type Result<T> = std::result::Result<T, PlatformError>;

/// Main error type for the platform core
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Session errors
    #[error("Session error: {0}")]
    Session(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// A reservation targeted a slot that is already booked
    #[error("Slot conflict: consultant {consultant_id}, date {date}, slot {slot}")]
    SlotConflict {
        /// Consultant whose shift table holds the conflict
        consultant_id: uuid::Uuid,
        /// Calendar day of the conflicting shift
        date: DateKey,
        /// Conflicting shift
        slot: SlotId,
    },

    /// Booking submission errors
    #[error("Submission error: {0}")]
    Submission(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
