//! Subscriber initialization

use thiserror::Error;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogFormat;

/// Tracing setup failures
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A global subscriber is already installed
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over `filter`. Fails if a subscriber is
/// already installed.
///
/// # Example
///
/// ```ignore
/// use infrastructure::{LogFormat, init_tracing};
///
/// init_tracing(LogFormat::Json, "normalization=debug,info")?;
/// ```
pub fn init_tracing(format: LogFormat, filter: &str) -> Result<(), TelemetryError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    let result = match format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };
    result.map_err(|e| TelemetryError::Init(e.to_string()))?;

    debug!(%format, "Tracing initialized");
    Ok(())
}
