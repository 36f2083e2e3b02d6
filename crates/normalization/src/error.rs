//! Customization layer error types
//!
//! Hooks never fail at runtime. These errors only surface while static
//! tables and strategies are being constructed.

use thiserror::Error;

use crate::network::NetworkId;

/// Errors that can occur while building network strategies
#[derive(Debug, Error)]
pub enum CustomizationError {
    /// A static table is malformed
    #[error("Invalid table for {network}: {reason}")]
    InvalidTable {
        /// Network owning the table
        network: NetworkId,
        /// What is wrong with it
        reason: String,
    },

    /// A keyword matcher could not be compiled
    #[error("Keyword matcher failed to build: {0}")]
    Matcher(#[from] aho_corasick::BuildError),

    /// A network identifier did not resolve
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    /// A network is disabled by configuration
    #[error("Network disabled: {0}")]
    NetworkDisabled(NetworkId),
}

impl CustomizationError {
    /// Create an invalid table error
    pub fn invalid_table(network: NetworkId, reason: impl Into<String>) -> Self {
        Self::InvalidTable {
            network,
            reason: reason.into(),
        }
    }
}
