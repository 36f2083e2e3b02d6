//! Canonical location entity

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::GeoPoint;

/// Kind of location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    /// Stop or station
    Station,
    /// Point of interest
    Poi,
    /// Street address
    Address,
    /// Bare coordinate
    Coordinate,
    /// Unknown or unspecified
    #[default]
    Any,
}

/// A location decoded from an upstream response
///
/// `place` and `name` are the two parts of the upstream display string.
/// At most one of them is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Location kind
    #[serde(rename = "type")]
    pub location_type: LocationType,
    /// Upstream identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Coordinate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coord: Option<GeoPoint>,
    /// Town or municipality
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    /// Name within the place
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Location {
    /// Create a location
    #[must_use]
    pub fn new(
        location_type: LocationType,
        id: Option<String>,
        coord: Option<GeoPoint>,
        place: Option<String>,
        name: Option<String>,
    ) -> Self {
        Self {
            location_type,
            id,
            coord,
            place,
            name,
        }
    }

    /// Create a coordinate-only location
    #[must_use]
    pub fn coordinate(coord: GeoPoint) -> Self {
        Self::new(LocationType::Coordinate, None, Some(coord), None, None)
    }

    /// Whether the location can be used to identify a stop upstream
    #[must_use]
    pub fn is_identified(&self) -> bool {
        match self.location_type {
            LocationType::Station => self.id.is_some(),
            LocationType::Coordinate => self.coord.is_some(),
            _ => self.id.is_some() || self.coord.is_some(),
        }
    }

    /// Name with the place prepended, for single-line display
    #[must_use]
    pub fn unique_short_name(&self) -> Option<String> {
        match (&self.place, &self.name) {
            (Some(place), Some(name)) => Some(format!("{place}, {name}")),
            (None, Some(name)) => Some(name.clone()),
            (Some(place), None) => Some(place.clone()),
            (None, None) => None,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unique_short_name() {
            Some(name) => write!(f, "{name}"),
            None => match self.coord {
                Some(coord) => write!(f, "{coord}"),
                None => write!(f, "?"),
            },
        }
    }
}
