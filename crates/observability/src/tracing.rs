//! Tracing/logging initialization.
//!
//! The mapper itself only emits `tracing` events; whoever hosts it decides
//! where they go. This default setup renders JSON lines and honors
//! `RUST_LOG`, falling back to `info` with mapper crates at `debug` so the
//! degradation notices (absent config, absent user) stay visible.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,grantmap_mapper=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
