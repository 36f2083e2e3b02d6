//! Geographic point value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A WGS84 coordinate as delivered by upstream backends
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

impl GeoPoint {
    /// Create a new point with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::invalid_coordinates(latitude, longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a point from micro-degrees, the integer encoding used by
    /// both EFA and HAFAS responses
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if the decoded point is out of range
    pub fn from_micro_degrees(lat_e6: i32, lon_e6: i32) -> Result<Self, DomainError> {
        Self::new(f64::from(lat_e6) / 1e6, f64::from(lon_e6) / 1e6)
    }

    /// Create a point without validation (for static tables)
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let point = GeoPoint::new(52.52, 13.405).expect("valid coordinates");
        assert!((point.latitude() - 52.52).abs() < f64::EPSILON);
        assert!((point.longitude() - 13.405).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boundary_coordinates() {
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).is_ok());
        assert!(GeoPoint::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_coordinates() {
        assert!(GeoPoint::new(91.0, 0.0).is_err());
        assert!(GeoPoint::new(0.0, -181.0).is_err());
    }

    #[test]
    fn test_from_micro_degrees() {
        let point = GeoPoint::from_micro_degrees(51_451_140, 7_013_814).expect("valid");
        assert!((point.latitude() - 51.451_14).abs() < 1e-9);
        assert!((point.longitude() - 7.013_814).abs() < 1e-9);

        assert!(GeoPoint::from_micro_degrees(95_000_000, 0).is_err());
    }

    #[test]
    fn test_display() {
        let point = GeoPoint::new(52.52, 13.405).expect("valid");
        assert_eq!(point.to_string(), "52.520000, 13.405000");
    }
}
