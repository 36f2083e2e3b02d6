//! Tracing subscriber setup
//!
//! Console logging only; the format comes from configuration and the
//! filter from `RUST_LOG` when set.

mod subscriber;

pub use subscriber::{TelemetryError, init_tracing};
