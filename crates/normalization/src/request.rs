//! Request parameter port
//!
//! The transport layer owns the actual request builder; this layer only
//! needs idempotent key/value edits on it. [`ParameterSet`] is the in-process
//! implementation used by the CLI and tests.

use std::fmt;

use domain::Product;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

/// Mutable view of an outgoing request's parameters
#[cfg_attr(test, automock)]
pub trait RequestParameters {
    /// Set a parameter, replacing any previous value for the key
    fn set(&mut self, key: &str, value: &str);

    /// Remove a parameter if present
    fn remove(&mut self, key: &str);

    /// Whether a parameter is present
    fn contains(&self, key: &str) -> bool;
}

/// Kind of upstream request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    /// Location search by name
    StopFinder,
    /// Stations around a coordinate
    Nearby,
    /// Departure board
    Departures,
    /// Trip search
    Trip,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StopFinder => write!(f, "stop_finder"),
            Self::Nearby => write!(f, "nearby"),
            Self::Departures => write!(f, "departures"),
            Self::Trip => write!(f, "trip"),
        }
    }
}

impl std::str::FromStr for RequestKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "stop_finder" | "stopfinder" | "suggest" => Ok(Self::StopFinder),
            "nearby" => Ok(Self::Nearby),
            "departures" | "departure" => Ok(Self::Departures),
            "trip" | "trips" => Ok(Self::Trip),
            _ => Err(format!(
                "Invalid request kind: {s}. Use 'stop_finder', 'nearby', 'departures' or 'trip'"
            )),
        }
    }
}

/// Caller options that influence parameter sets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Requested products (`None` = all)
    pub products: Option<Vec<Product>>,
    /// Response language
    pub language: String,
}

impl Default for RequestContext {
    fn default() -> Self {
        Self {
            products: None,
            language: "de".to_string(),
        }
    }
}

impl RequestContext {
    /// Context restricted to some products
    #[must_use]
    pub fn with_products(products: impl Into<Vec<Product>>) -> Self {
        Self {
            products: Some(products.into()),
            ..Self::default()
        }
    }

    /// Whether a product was requested
    #[must_use]
    pub fn includes(&self, product: Product) -> bool {
        self.products.as_ref().is_none_or(|p| p.contains(&product))
    }
}

/// Ordered, idempotent key/value parameter list
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParameterSet {
    entries: Vec<(String, String)>,
}

impl ParameterSet {
    /// Empty parameter set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for a key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of parameters
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no parameters are set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RequestParameters for ParameterSet {
    fn set(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    fn remove(&mut self, key: &str) {
        self.entries.retain(|(k, _)| k != key);
    }

    fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_is_idempotent() {
        let mut params = ParameterSet::new();
        params.set("a", "1");
        params.set("b", "2");
        params.set("a", "3");
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("a"), Some("3"));
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn remove_and_contains() {
        let mut params = ParameterSet::new();
        params.set("a", "1");
        assert!(params.contains("a"));
        params.remove("a");
        params.remove("missing");
        assert!(!params.contains("a"));
        assert!(params.is_empty());
    }

    #[test]
    fn context_includes() {
        assert!(RequestContext::default().includes(Product::Ferry));
        let ctx = RequestContext::with_products([Product::Bus]);
        assert!(ctx.includes(Product::Bus));
        assert!(!ctx.includes(Product::Tram));
    }

    #[test]
    fn request_kind_parse() {
        assert_eq!("trip".parse::<RequestKind>().ok(), Some(RequestKind::Trip));
        assert_eq!(
            "stop-finder".parse::<RequestKind>().ok(),
            Some(RequestKind::StopFinder)
        );
        assert!("bogus".parse::<RequestKind>().is_err());
    }
}
