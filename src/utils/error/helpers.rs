//! Helper functions for creating specific error types

use super::types::PlatformError;

/// Helper functions for creating specific errors
impl PlatformError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn session<S: Into<String>>(message: S) -> Self {
        Self::Session(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn submission<S: Into<String>>(message: S) -> Self {
        Self::Submission(message.into())
    }
}
