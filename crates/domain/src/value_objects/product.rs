//! Transport product value object
//!
//! The closed set of canonical transport modes. Raw, network-specific mode
//! codes are mapped onto this enum by a network's products map; codes that
//! have no sensible classification stay unclassified instead of guessing.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Canonical transport product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Product {
    /// ICE, IC, EC, TGV, Railjet
    HighSpeedTrain,
    /// RE, RB, IRE and private regional operators
    RegionalTrain,
    /// S-Bahn
    SuburbanTrain,
    /// U-Bahn / metro
    Subway,
    /// Tram, Stadtbahn, light rail
    Tram,
    /// Bus
    Bus,
    /// Ferry / ship
    Ferry,
    /// Cable car, rack railway, suspension railway
    Cablecar,
    /// Demand-responsive transport (AST, Rufbus)
    OnDemand,
}

impl Product {
    /// All products in canonical order
    pub const ALL: [Self; 9] = [
        Self::HighSpeedTrain,
        Self::RegionalTrain,
        Self::SuburbanTrain,
        Self::Subway,
        Self::Tram,
        Self::Bus,
        Self::Ferry,
        Self::Cablecar,
        Self::OnDemand,
    ];

    /// Single character code used in compact representations
    #[must_use]
    pub const fn code(&self) -> char {
        match self {
            Self::HighSpeedTrain => 'I',
            Self::RegionalTrain => 'R',
            Self::SuburbanTrain => 'S',
            Self::Subway => 'U',
            Self::Tram => 'T',
            Self::Bus => 'B',
            Self::Ferry => 'F',
            Self::Cablecar => 'C',
            Self::OnDemand => 'P',
        }
    }

    /// Resolve a product from its single character code
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }

    /// Whether this product runs on heavy rail
    #[must_use]
    pub const fn is_train(&self) -> bool {
        matches!(
            self,
            Self::HighSpeedTrain | Self::RegionalTrain | Self::SuburbanTrain
        )
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::HighSpeedTrain => "High-speed train",
            Self::RegionalTrain => "Regional train",
            Self::SuburbanTrain => "Suburban train",
            Self::Subway => "Subway",
            Self::Tram => "Tram",
            Self::Bus => "Bus",
            Self::Ferry => "Ferry",
            Self::Cablecar => "Cable car",
            Self::OnDemand => "On demand",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Product {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(product) = Self::from_code(c) {
                return Ok(product);
            }
        }
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "high_speed_train" | "highspeed" | "ice" => Ok(Self::HighSpeedTrain),
            "regional_train" | "regional" => Ok(Self::RegionalTrain),
            "suburban_train" | "suburban" | "sbahn" | "s_bahn" => Ok(Self::SuburbanTrain),
            "subway" | "ubahn" | "u_bahn" | "metro" => Ok(Self::Subway),
            "tram" => Ok(Self::Tram),
            "bus" => Ok(Self::Bus),
            "ferry" | "ship" => Ok(Self::Ferry),
            "cablecar" | "cable_car" => Ok(Self::Cablecar),
            "on_demand" | "ondemand" => Ok(Self::OnDemand),
            _ => Err(DomainError::UnknownProduct(s.to_string())),
        }
    }
}
