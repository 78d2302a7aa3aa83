//! Tracing subscriber setup for host processes
//!
//! The library itself only emits `tracing` events; embedding binaries call
//! [`init`] once at startup to install a subscriber. Filtering follows
//! `RUST_LOG`.

use tracing_subscriber::{EnvFilter, prelude::*};

/// Install the global tracing subscriber. Call once at process startup.
pub fn init() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(
            tracing_subscriber::fmt::layer()
                .with_line_number(true)
                .with_file(true),
        )
        .init();
}
