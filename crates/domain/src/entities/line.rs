//! Canonical line entity

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entities::LineStyle;
use crate::value_objects::Product;

/// Extra facts about a line that upstream encodes in its raw fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineAttribute {
    /// Ring line running clockwise
    CircleClockwise,
    /// Ring line running anticlockwise
    CircleAnticlockwise,
    /// Replacement service (Schienenersatzverkehr)
    ServiceReplacement,
    /// Serves an airport
    LineAirport,
    /// Step-free vehicle
    WheelChairAccess,
    /// Bicycles carried
    Bicycle,
}

/// A transit line as presented to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Upstream line identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Operating network or operator, as reported upstream
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    /// Canonical product (`None` = unclassified mode code)
    pub product: Option<Product>,
    /// Short human-facing identifier (e.g. "ICE 123", "S3")
    pub label: Option<String>,
    /// Long descriptive name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Badge style, if the network defines one for this label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<LineStyle>,
    /// Attribute flags
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub attributes: BTreeSet<LineAttribute>,
    /// Free-text line message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Line {
    /// Create a line with the mandatory classification fields
    #[must_use]
    pub fn new(
        id: Option<String>,
        network: Option<String>,
        product: Option<Product>,
        label: Option<String>,
    ) -> Self {
        Self {
            id,
            network,
            product,
            label,
            name: None,
            style: None,
            attributes: BTreeSet::new(),
            message: None,
        }
    }

    /// Set the long name
    #[must_use]
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Set the style
    #[must_use]
    pub fn with_style(mut self, style: Option<LineStyle>) -> Self {
        self.style = style;
        self
    }

    /// Add attributes
    #[must_use]
    pub fn with_attributes(mut self, attributes: impl IntoIterator<Item = LineAttribute>) -> Self {
        self.attributes.extend(attributes);
        self
    }

    /// Whether the line carries an attribute
    #[must_use]
    pub fn has_attribute(&self, attribute: LineAttribute) -> bool {
        self.attributes.contains(&attribute)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = self.product.map_or('?', |p| p.code());
        write!(f, "{code}{}", self.label.as_deref().unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Line {
        Line::new(
            Some("ddb:90E43".to_string()),
            Some("DB".to_string()),
            Some(Product::HighSpeedTrain),
            Some("ICE123".to_string()),
        )
    }

    #[test]
    fn display_uses_product_code() {
        assert_eq!(sample().to_string(), "IICE123");

        let unclassified = Line::new(None, None, None, Some("X".to_string()));
        assert_eq!(unclassified.to_string(), "?X");
    }

    #[test]
    fn attributes_accumulate() {
        let line = sample()
            .with_attributes([LineAttribute::ServiceReplacement])
            .with_attributes([LineAttribute::Bicycle, LineAttribute::ServiceReplacement]);
        assert_eq!(line.attributes.len(), 2);
        assert!(line.has_attribute(LineAttribute::Bicycle));
        assert!(!line.has_attribute(LineAttribute::LineAirport));
    }

    #[test]
    fn serialization_skips_empty_fields() {
        let json = serde_json::to_string(&sample()).expect("serialize");
        assert!(json.contains("\"label\":\"ICE123\""));
        assert!(!json.contains("attributes"));
        assert!(!json.contains("style"));
    }
}
