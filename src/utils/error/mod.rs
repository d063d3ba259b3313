//! Error handling for the platform core
//!
//! This module provides the crate-wide error type and result alias.

mod helpers;
#[cfg(test)]
mod tests;
mod types;

// Re-export public types
pub use types::{PlatformError, Result};
