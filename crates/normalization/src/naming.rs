//! Name decomposition rules
//!
//! A network describes how it splits display strings as an ordered slice of
//! [`NameRule`]s. Suffix rules rewrite the string and evaluation continues;
//! every other rule either produces the final split or passes. Whatever is
//! left when no rule matched goes to the base algorithm's default split.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::patterns;
use crate::tables::PlaceList;

/// Result of splitting a display string
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NameParts {
    /// Town or municipality
    pub place: Option<String>,
    /// Name within the place
    pub name: Option<String>,
}

impl NameParts {
    /// Build from borrowed parts, mapping empty strings to `None`
    ///
    /// If only a place would remain it becomes the name, so that a
    /// non-empty input never decomposes into an empty name.
    #[must_use]
    pub fn new(place: Option<&str>, name: Option<&str>) -> Self {
        let place = place.map(str::trim).filter(|s| !s.is_empty());
        let name = name.map(str::trim).filter(|s| !s.is_empty());
        match (place, name) {
            (Some(place), None) => Self::name_only(place),
            (place, name) => Self {
                place: place.map(str::to_string),
                name: name.map(str::to_string),
            },
        }
    }

    /// A name without place
    #[must_use]
    pub fn name_only(name: &str) -> Self {
        Self {
            place: None,
            name: Some(name.to_string()),
        }
    }

    /// Nothing to split
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            place: None,
            name: None,
        }
    }

    /// Borrowed view as a tuple
    #[must_use]
    pub fn as_tuple(&self) -> (Option<&str>, Option<&str>) {
        (self.place.as_deref(), self.name.as_deref())
    }
}

/// Order of the two components around a comma
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommaOrder {
    /// `"Place, Name"`
    PlaceFirst,
    /// `"Name, Place"`
    NameFirst,
}

/// One step of a name decomposition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRule {
    /// Drop a literal trailing annotation and continue
    StripSuffix(&'static str),
    /// Drop a trailing `[...]` annotation and continue
    StripBracketed,
    /// Split at the first entry of the network's place list
    PlacePrefix,
    /// `"Name (Place)"`, place at least three characters
    ParenPlace,
    /// Split at the first top-level comma
    Comma(CommaOrder),
    /// Split at the last top-level comma
    LastComma(CommaOrder),
    /// Split only if there is exactly one top-level comma
    SingleComma(CommaOrder),
    /// `"12345 Town, Street"`, postcode dropped
    PostcodePlace,
}

/// Outcome of running rules over a display string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// A rule produced the split
    Split(NameParts),
    /// No rule matched; the possibly rewritten input goes to the default
    Unmatched(&'a str),
}

fn ordered(order: CommaOrder, first: &str, second: &str, places: &PlaceList) -> NameParts {
    match order {
        CommaOrder::PlaceFirst => NameParts::new(Some(places.canonical(first)), Some(second)),
        CommaOrder::NameFirst => NameParts::new(Some(places.canonical(second)), Some(first)),
    }
}

impl NameRule {
    /// Evaluate rules in order against a non-blank display string
    #[must_use]
    pub fn resolve<'a>(rules: &[Self], places: &PlaceList, input: &'a str) -> Resolution<'a> {
        let mut current = input.trim();
        for (index, rule) in rules.iter().enumerate() {
            let split = match *rule {
                Self::StripSuffix(suffix) => {
                    if let Some(rest) = patterns::strip_literal_suffix(current, suffix) {
                        current = rest;
                    }
                    None
                },
                Self::StripBracketed => {
                    if let Some(rest) = patterns::strip_bracketed_suffix(current) {
                        current = rest;
                    }
                    None
                },
                Self::PlacePrefix => places
                    .split_prefix(current)
                    .map(|(place, name)| NameParts::new(Some(place), Some(name))),
                Self::ParenPlace => patterns::paren_place(current, 3)
                    .map(|(place, name)| NameParts::new(Some(places.canonical(place)), Some(name))),
                Self::Comma(order) => patterns::first_top_level_comma(current)
                    .map(|(first, second)| ordered(order, first, second, places)),
                Self::LastComma(order) => patterns::last_top_level_comma(current)
                    .map(|(first, second)| ordered(order, first, second, places)),
                Self::SingleComma(order) => (patterns::top_level_comma_count(current) == 1)
                    .then(|| patterns::first_top_level_comma(current))
                    .flatten()
                    .map(|(first, second)| ordered(order, first, second, places)),
                Self::PostcodePlace => patterns::postcode_place(current)
                    .map(|(town, street)| NameParts::new(Some(town), Some(street))),
            };
            if let Some(parts) = split {
                trace!(rule = index, ?parts, "Name rule matched");
                return Resolution::Split(parts);
            }
        }
        Resolution::Unmatched(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(rules: &[NameRule], places: &PlaceList, input: &str) -> Option<(Option<String>, Option<String>)> {
        match NameRule::resolve(rules, places, input) {
            Resolution::Split(parts) => Some((parts.place, parts.name)),
            Resolution::Unmatched(_) => None,
        }
    }

    fn owned(place: Option<&str>, name: &str) -> Option<(Option<String>, Option<String>)> {
        Some((place.map(str::to_string), Some(name.to_string())))
    }

    #[test]
    fn name_parts_never_leave_only_place() {
        assert_eq!(NameParts::new(Some("Essen"), Some("")), NameParts::name_only("Essen"));
        assert_eq!(NameParts::new(Some(""), Some("Hbf")), NameParts::name_only("Hbf"));
        assert_eq!(NameParts::new(None, None), NameParts::empty());
    }

    #[test]
    fn place_prefix_rule() {
        let places = PlaceList::of(&["Mainz", "Wiesbaden"]);
        assert_eq!(
            split(&[NameRule::PlacePrefix], &places, "Wiesbaden Hauptbahnhof"),
            owned(Some("Wiesbaden"), "Hauptbahnhof")
        );
        assert_eq!(split(&[NameRule::PlacePrefix], &places, "Darmstadt Hbf"), None);
    }

    #[test]
    fn comma_orders() {
        let places = PlaceList::default();
        assert_eq!(
            split(&[NameRule::Comma(CommaOrder::PlaceFirst)], &places, "Bern, Bahnhof"),
            owned(Some("Bern"), "Bahnhof")
        );
        assert_eq!(
            split(&[NameRule::Comma(CommaOrder::NameFirst)], &places, "Central Station, Sydney"),
            owned(Some("Sydney"), "Central Station")
        );
    }

    #[test]
    fn single_comma_rejects_ambiguous() {
        let rules = [NameRule::SingleComma(CommaOrder::NameFirst)];
        let places = PlaceList::default();
        assert_eq!(split(&rules, &places, "Hbf, Essen"), owned(Some("Essen"), "Hbf"));
        assert_eq!(split(&rules, &places, "A, B, C"), None);
    }

    #[test]
    fn comma_canonicalizes_alias() {
        let places = PlaceList::of(&["Berlin"]).alias("Berlin", "Bln");
        assert_eq!(
            split(&[NameRule::Comma(CommaOrder::PlaceFirst)], &places, "Bln, Hauptbahnhof"),
            owned(Some("Berlin"), "Hauptbahnhof")
        );
    }

    #[test]
    fn suffix_is_stripped_before_other_rules() {
        let rules = [NameRule::StripSuffix(" (Bus)"), NameRule::PlacePrefix];
        let places = PlaceList::of(&["Ulm"]);
        assert_eq!(split(&rules, &places, "Ulm Rathaus (Bus)"), owned(Some("Ulm"), "Rathaus"));
        assert_eq!(
            NameRule::resolve(&rules, &places, "Neu-Ulm Bf (Bus)"),
            Resolution::Unmatched("Neu-Ulm Bf")
        );
    }

    #[test]
    fn bracketed_then_paren() {
        let rules = [NameRule::StripBracketed, NameRule::ParenPlace];
        let places = PlaceList::default();
        assert_eq!(
            split(&rules, &places, "Bahnhof (Potsdam) [Bus]"),
            owned(Some("Potsdam"), "Bahnhof")
        );
    }

    #[test]
    fn empty_place_before_comma_means_no_place() {
        let places = PlaceList::default();
        assert_eq!(
            split(&[NameRule::Comma(CommaOrder::PlaceFirst)], &places, ", Markt"),
            owned(None, "Markt")
        );
    }

    #[test]
    fn postcode_rule() {
        let places = PlaceList::default();
        assert_eq!(
            split(&[NameRule::PostcodePlace], &places, "34117 Kassel, Königsplatz 1"),
            owned(Some("Kassel"), "Königsplatz 1")
        );
    }
}
