//! Infrastructure layer
//!
//! Loads configuration, builds the network registry from the EFA and HAFAS
//! integration crates and installs the tracing subscriber.

pub mod config;
pub mod registry;
pub mod telemetry;

pub use config::{AppConfig, ConfigurationError, LogFormat, NetworkOverride};
pub use registry::{NetworkRegistry, build_strategy};
pub use telemetry::{TelemetryError, init_tracing};
