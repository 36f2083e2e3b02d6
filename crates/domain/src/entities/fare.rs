//! Fare entity

use serde::{Deserialize, Serialize};

/// Passenger category a fare applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FareType {
    #[default]
    Adult,
    Child,
    Youth,
    Student,
    Military,
    Senior,
    Disabled,
    Bike,
}

/// A fare offered for a trip
///
/// Whether a fare is shown is derived per network and never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fare {
    /// Tariff network the fare belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    /// Passenger category
    pub fare_type: FareType,
    /// Display name (e.g. "Einzel-Ticket", "Abo Monatskarte")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// ISO 4217 currency code
    pub currency: String,
    /// Price in currency units
    pub price: f64,
    /// Name of the tariff unit (e.g. "Zone", "Preisstufe")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units_name: Option<String>,
    /// Number or code of tariff units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

impl Fare {
    /// Create an adult fare with just a name and price
    #[must_use]
    pub fn named(name: impl Into<String>, currency: impl Into<String>, price: f64) -> Self {
        Self {
            network: None,
            fare_type: FareType::Adult,
            name: Some(name.into()),
            currency: currency.into(),
            price,
            units_name: None,
            units: None,
        }
    }

    /// Same fare for another passenger category
    #[must_use]
    pub fn with_type(mut self, fare_type: FareType) -> Self {
        self.fare_type = fare_type;
        self
    }
}
