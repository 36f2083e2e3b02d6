//! Domain-level errors

use thiserror::Error;

/// Errors that can occur while constructing canonical values
#[derive(Debug, Error)]
pub enum DomainError {
    /// Latitude or longitude out of range
    #[error("Invalid coordinates: {latitude}, {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// Color literal could not be parsed
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Unknown product code or name
    #[error("Unknown product: {0}")]
    UnknownProduct(String),
}

impl DomainError {
    /// Create an invalid coordinates error
    pub const fn invalid_coordinates(latitude: f64, longitude: f64) -> Self {
        Self::InvalidCoordinates {
            latitude,
            longitude,
        }
    }
}
