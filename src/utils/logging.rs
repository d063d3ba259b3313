//! Logging initialization
//!
//! Thin wrapper around `tracing-subscriber` so embedding applications get a
//! consistent format without wiring the subscriber themselves.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// The filter honors `CAREGATE_LOG` when set, otherwise falls back to the
/// provided default directive (e.g. `"info"`). Returns quietly if a global
/// subscriber is already installed, so tests can call this repeatedly.
pub fn init_logging(default_directive: &str) {
    let filter = EnvFilter::try_from_env("CAREGATE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .try_init();
}
