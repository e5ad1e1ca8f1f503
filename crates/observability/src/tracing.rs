//! Tracing/logging initialization.
//!
//! Events are written to stdout as one JSON object per line, with a system
//! timestamp and the emitting target (e.g. `northwind_contacts::supplier`).
//! The filter comes from `RUST_LOG`; without it only `info` and above are
//! emitted. Use `RUST_LOG=northwind_contacts=trace` to see every build.

use tracing_subscriber::EnvFilter;

/// Default directive when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        ::tracing::debug!(default_filter = DEFAULT_FILTER, "tracing initialized");
    }
}
