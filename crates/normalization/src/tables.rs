//! Static per-network configuration tables
//!
//! Built once when a strategy is constructed and read-only afterwards, so
//! they can be shared freely across threads.

use std::collections::HashMap;

use domain::{LineStyle, Product};
use serde::{Deserialize, Serialize};

use crate::network::Protocol;
use crate::patterns;

/// Ordered mapping from raw mode code (by index) to a canonical product
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductsMap(Vec<Option<Product>>);

impl ProductsMap {
    /// Standard EFA `motType` mapping (codes 0 to 19)
    pub const EFA: [Option<Product>; 20] = [
        Some(Product::RegionalTrain),  // 0 Zug
        Some(Product::SuburbanTrain),  // 1 S-Bahn
        Some(Product::Subway),         // 2 U-Bahn
        Some(Product::Tram),           // 3 Stadtbahn
        Some(Product::Tram),           // 4 Straßenbahn
        Some(Product::Bus),            // 5 Stadtbus
        Some(Product::Bus),            // 6 Regionalbus
        Some(Product::Bus),            // 7 Schnellbus
        Some(Product::Cablecar),       // 8 Seil-/Zahnradbahn
        Some(Product::Ferry),          // 9 Schiff
        Some(Product::OnDemand),       // 10 AST/Rufbus
        None,                          // 11 Sonstige
        Some(Product::Bus),            // 12 Schulbus
        Some(Product::RegionalTrain),  // 13 Regionalzug
        Some(Product::HighSpeedTrain), // 14 Nationaler Zug
        Some(Product::HighSpeedTrain), // 15 Internationaler Zug
        Some(Product::HighSpeedTrain), // 16 Hochgeschwindigkeitszug
        Some(Product::Bus),            // 17 Schienenersatzverkehr
        Some(Product::RegionalTrain),  // 18 Schienenshuttle
        Some(Product::Bus),            // 19 Bürgerbus
    ];

    /// Standard HAFAS product class mapping (bit index of the class mask)
    pub const HAFAS: [Option<Product>; 10] = [
        Some(Product::HighSpeedTrain), // 1 ICE
        Some(Product::HighSpeedTrain), // 2 IC/EC
        Some(Product::RegionalTrain),  // 4 IR/D
        Some(Product::RegionalTrain),  // 8 RE/RB
        Some(Product::SuburbanTrain),  // 16 S-Bahn
        Some(Product::Bus),            // 32 Bus
        Some(Product::Ferry),          // 64 Schiff
        Some(Product::Subway),         // 128 U-Bahn
        Some(Product::Tram),           // 256 Tram
        Some(Product::OnDemand),       // 512 Anrufverkehr
    ];

    /// Create a map from an ordered list
    #[must_use]
    pub fn new(entries: impl Into<Vec<Option<Product>>>) -> Self {
        Self(entries.into())
    }

    /// Default map for a protocol family
    #[must_use]
    pub fn for_protocol(protocol: Protocol) -> Self {
        match protocol {
            Protocol::Efa => Self::new(Self::EFA),
            Protocol::Hafas => Self::new(Self::HAFAS),
        }
    }

    /// Resolve a raw mode code
    ///
    /// Missing, non-numeric and out-of-range codes, as well as `None`
    /// entries, all yield `None`.
    #[must_use]
    pub fn get(&self, code: Option<&str>) -> Option<Product> {
        let index: usize = patterns::non_blank(code)?.parse().ok()?;
        self.0.get(index).copied().flatten()
    }

    /// Replace the entry at `index`, growing the map with unclassified
    /// entries if needed
    #[must_use]
    pub fn with(mut self, index: usize, product: Option<Product>) -> Self {
        if self.0.len() <= index {
            self.0.resize(index + 1, None);
        }
        self.0[index] = product;
        self
    }

    /// Indices mapped to any of the given products
    pub fn codes_for<'a>(&'a self, products: &'a [Product]) -> impl Iterator<Item = usize> + 'a {
        self.0
            .iter()
            .enumerate()
            .filter(move |(_, p)| p.is_some_and(|p| products.contains(&p)))
            .map(|(i, _)| i)
    }

    /// Indices that classify to some product
    pub fn classified_codes(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_some())
            .map(|(i, _)| i)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A place and the alternative spellings that denote it as a prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceEntry {
    /// Canonical place name
    pub name: String,
    /// Abbreviations or variants, e.g. `F` for Frankfurt
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl PlaceEntry {
    /// Create an entry without aliases
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
        }
    }

    /// Spellings tried as prefixes, longest first so that
    /// `"Frankfurt (Main)"` wins over `"Frankfurt"`
    fn spellings(&self) -> Vec<&str> {
        let mut spellings: Vec<&str> = std::iter::once(self.name.as_str())
            .chain(self.aliases.iter().map(String::as_str))
            .collect();
        spellings.sort_by_key(|s| std::cmp::Reverse(s.len()));
        spellings
    }
}

/// Ordered list of known place names, first match wins
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlaceList {
    entries: Vec<PlaceEntry>,
}

impl PlaceList {
    /// Create a list from entries
    #[must_use]
    pub fn new(entries: Vec<PlaceEntry>) -> Self {
        Self { entries }
    }

    /// Create a list of bare place names
    #[must_use]
    pub fn of(names: &[&str]) -> Self {
        Self::new(names.iter().map(|n| PlaceEntry::new(*n)).collect())
    }

    /// Add an alias for `place`, appending the place if it is not listed yet
    #[must_use]
    pub fn alias(mut self, place: &str, alias: &str) -> Self {
        match self.entries.iter_mut().find(|e| e.name == place) {
            Some(entry) => entry.aliases.push(alias.to_string()),
            None => self.entries.push(PlaceEntry {
                name: place.to_string(),
                aliases: vec![alias.to_string()],
            }),
        }
        self
    }

    /// Append entries with lower precedence than the existing ones
    pub fn extend(&mut self, entries: impl IntoIterator<Item = PlaceEntry>) {
        self.entries.extend(entries);
    }

    /// Entries in precedence order
    #[must_use]
    pub fn entries(&self) -> &[PlaceEntry] {
        &self.entries
    }

    /// Whether no places are configured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Split a display string at the first listed place prefix
    ///
    /// Returns the canonical place name and the remainder.
    #[must_use]
    pub fn split_prefix<'s, 'a>(&'s self, s: &'a str) -> Option<(&'s str, &'a str)> {
        self.entries.iter().find_map(|entry| {
            entry
                .spellings()
                .into_iter()
                .find_map(|spelling| patterns::strip_place_prefix(s, spelling))
                .map(|rest| (entry.name.as_str(), rest))
        })
    }

    /// Canonical spelling of a place produced by another rule
    #[must_use]
    pub fn canonical<'a>(&'a self, place: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|e| e.aliases.iter().any(|a| a == place))
            .map_or(place, |e| e.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct StyleEntry {
    network: Option<String>,
    product: Option<Product>,
    style: LineStyle,
}

/// Line styles keyed by label, optionally namespaced by network/operator
/// and product
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleTable {
    by_label: HashMap<String, Vec<StyleEntry>>,
}

impl StyleTable {
    /// Separator between network namespace and label in table keys
    pub const NAMESPACE_SEPARATOR: char = '|';

    /// Build a table from `"[network|]label"` keys
    #[must_use]
    pub fn from_entries(entries: &[(&str, LineStyle)]) -> Self {
        let mut table = Self::default();
        for (key, style) in entries {
            table.insert(key, None, *style);
        }
        table
    }

    /// Add a style restricted to one product
    #[must_use]
    pub fn with_product_entries(mut self, product: Product, entries: &[(&str, LineStyle)]) -> Self {
        for (key, style) in entries {
            self.insert(key, Some(product), *style);
        }
        self
    }

    fn insert(&mut self, key: &str, product: Option<Product>, style: LineStyle) {
        let (network, label) = match key.split_once(Self::NAMESPACE_SEPARATOR) {
            Some((network, label)) => (Some(network.to_string()), label),
            None => (None, key),
        };
        let entries = self.by_label.entry(label.to_string()).or_default();
        entries.retain(|e| !(e.network == network && e.product == product));
        entries.push(StyleEntry {
            network,
            product,
            style,
        });
    }

    /// Look up a style
    ///
    /// Precedence: network and product, network only, product only,
    /// label only. Entries scoped to another network or product never match.
    #[must_use]
    pub fn lookup(
        &self,
        network: Option<&str>,
        product: Option<Product>,
        label: &str,
    ) -> Option<LineStyle> {
        self.by_label
            .get(label)?
            .iter()
            .filter_map(|entry| {
                let network_rank = match (&entry.network, network) {
                    (None, _) => 1,
                    (Some(n), Some(q)) if n == q => 0,
                    (Some(_), _) => return None,
                };
                let product_rank = match (entry.product, product) {
                    (None, _) => 1,
                    (Some(p), Some(q)) if p == q => 0,
                    (Some(_), _) => return None,
                };
                Some((network_rank * 2 + product_rank, entry.style))
            })
            .min_by_key(|(rank, _)| *rank)
            .map(|(_, style)| style)
    }

    /// Number of distinct labels
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_label.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_label.is_empty()
    }
}

/// Everything a strategy consults besides its own rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkTables {
    /// Raw mode code to product
    pub products: ProductsMap,
    /// Known places, first match wins
    pub places: PlaceList,
    /// Line styles
    pub styles: StyleTable,
}

impl NetworkTables {
    /// Protocol defaults with no places and no styles
    #[must_use]
    pub fn for_protocol(protocol: Protocol) -> Self {
        Self {
            products: ProductsMap::for_protocol(protocol),
            places: PlaceList::default(),
            styles: StyleTable::default(),
        }
    }

    /// Replace the products map
    #[must_use]
    pub fn with_products(mut self, products: ProductsMap) -> Self {
        self.products = products;
        self
    }

    /// Replace the place list
    #[must_use]
    pub fn with_places(mut self, places: PlaceList) -> Self {
        self.places = places;
        self
    }

    /// Replace the style table
    #[must_use]
    pub fn with_styles(mut self, styles: StyleTable) -> Self {
        self.styles = styles;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_map_lookup() {
        let map = ProductsMap::for_protocol(Protocol::Efa);
        assert_eq!(map.get(Some("0")), Some(Product::RegionalTrain));
        assert_eq!(map.get(Some("2")), Some(Product::Subway));
        assert_eq!(map.get(Some(" 9 ")), Some(Product::Ferry));
        assert_eq!(map.get(Some("11")), None);
        assert_eq!(map.get(Some("99")), None);
        assert_eq!(map.get(Some("-1")), None);
        assert_eq!(map.get(Some("bus")), None);
        assert_eq!(map.get(None), None);
    }

    #[test]
    fn products_map_with_grows() {
        let map = ProductsMap::new(vec![Some(Product::Bus)]).with(3, Some(Product::Ferry));
        assert_eq!(map.len(), 4);
        assert_eq!(map.get(Some("2")), None);
        assert_eq!(map.get(Some("3")), Some(Product::Ferry));
    }

    #[test]
    fn products_map_codes_for() {
        let map = ProductsMap::for_protocol(Protocol::Hafas);
        let codes: Vec<usize> = map.codes_for(&[Product::HighSpeedTrain]).collect();
        assert_eq!(codes, vec![0, 1]);
        assert_eq!(map.classified_codes().count(), 10);
    }

    #[test]
    fn place_list_first_match_wins() {
        let places = PlaceList::of(&["Essen", "Essen-Steele"]);
        assert_eq!(
            places.split_prefix("Essen-Steele Bf"),
            Some(("Essen", "Steele Bf"))
        );
    }

    #[test]
    fn place_list_alias() {
        let places = PlaceList::of(&["Frankfurt"]).alias("Frankfurt", "F");
        assert_eq!(
            places.split_prefix("F Hauptbahnhof"),
            Some(("Frankfurt", "Hauptbahnhof"))
        );
        assert_eq!(places.split_prefix("Fulda Bf"), None);
        assert_eq!(places.canonical("F"), "Frankfurt");
        assert_eq!(places.canonical("Mainz"), "Mainz");
    }

    #[test]
    fn place_list_longest_spelling_first() {
        let places = PlaceList::of(&["Frankfurt"]).alias("Frankfurt", "Frankfurt (Main)");
        assert_eq!(
            places.split_prefix("Frankfurt (Main) Hauptbahnhof"),
            Some(("Frankfurt", "Hauptbahnhof"))
        );
    }

    #[test]
    fn place_list_extend_appends() {
        let mut places = PlaceList::of(&["Kassel"]);
        places.extend([PlaceEntry::new("Baunatal")]);
        assert_eq!(places.entries().len(), 2);
        assert_eq!(places.entries()[1].name, "Baunatal");
    }

    #[test]
    fn style_table_namespace_precedence() {
        let plain = LineStyle::rgb(0x11_11_11, 0xff_ff_ff);
        let namespaced = LineStyle::rgb(0x22_22_22, 0xff_ff_ff);
        let table =
            StyleTable::from_entries(&[("T1", plain), ("Innsbrucker Verkehrsbetriebe|T1", namespaced)]);

        assert_eq!(
            table.lookup(Some("Innsbrucker Verkehrsbetriebe"), None, "T1"),
            Some(namespaced)
        );
        assert_eq!(table.lookup(Some("Postbus"), None, "T1"), Some(plain));
        assert_eq!(table.lookup(None, None, "T1"), Some(plain));
        assert_eq!(table.lookup(None, None, "T2"), None);
    }

    #[test]
    fn style_table_product_scope() {
        let tram = LineStyle::rgb(0xcc_00_00, 0xff_ff_ff);
        let bus = LineStyle::rgb(0x00_00_cc, 0xff_ff_ff);
        let table = StyleTable::default()
            .with_product_entries(Product::Tram, &[("1", tram)])
            .with_product_entries(Product::Bus, &[("1", bus)]);

        assert_eq!(table.lookup(None, Some(Product::Tram), "1"), Some(tram));
        assert_eq!(table.lookup(None, Some(Product::Bus), "1"), Some(bus));
        assert_eq!(table.lookup(None, None, "1"), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn style_table_later_entry_replaces_same_key() {
        let first = LineStyle::rgb(0x11_11_11, 0);
        let second = LineStyle::rgb(0x22_22_22, 0);
        let table = StyleTable::from_entries(&[("S1", first), ("S1", second)]);
        assert_eq!(table.lookup(None, None, "S1"), Some(second));
    }
}
