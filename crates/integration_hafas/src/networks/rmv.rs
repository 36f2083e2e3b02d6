//! Rhein-Main-Verkehrsverbund
//!
//! RMV abbreviates the larger towns with their licence plate code
//! (`"F Hauptbahnhof"`, `"OF Marktplatz"`).

use domain::{Line, Product};
use normalization::{
    BaseAlgorithm, CommaOrder, CustomizationError, Field, Label, LineFields, LineRule, ModeFilter,
    NameParts, NameRule, NetworkId, NetworkStrategy, NetworkTables, NetworkUnit, PlaceList, Protocol,
    When,
};

use crate::rules;

const STATION_RULES: &[NameRule] = &[NameRule::PlacePrefix, NameRule::Comma(CommaOrder::PlaceFirst)];

const LINES: &[LineRule] = &[LineRule::new(
    ModeFilter::Any,
    When::Any(&[When::Is(Field::TrainType, "AST"), When::StartsWith(Field::Name, "AST")]),
    Product::OnDemand,
    Label::StripPrefix(Field::Name, "AST"),
)];

fn places() -> PlaceList {
    PlaceList::of(&["Frankfurt", "Offenbach", "Mainz", "Wiesbaden", "Darmstadt", "Hanau"])
        .alias("Frankfurt", "F")
        .alias("Frankfurt", "Frankfurt (Main)")
        .alias("Frankfurt", "Frankfurt am Main")
        .alias("Offenbach", "OF")
        .alias("Offenbach", "Offenbach am Main")
        .alias("Mainz", "MZ")
        .alias("Wiesbaden", "WI")
        .alias("Darmstadt", "DA")
}

/// RMV customization unit
#[derive(Debug)]
pub struct Rmv {
    base: BaseAlgorithm,
}

impl NetworkUnit for Rmv {
    const ID: NetworkId = NetworkId::Rmv;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Hafas).with_places(places())
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
        })
    }
}

impl NetworkStrategy for Rmv {
    fn base(&self) -> &BaseAlgorithm {
        &self.base
    }

    fn split_station_name(&self, raw: Option<&str>) -> NameParts {
        self.base.split_with(STATION_RULES, raw)
    }

    fn split_poi(&self, raw: Option<&str>) -> NameParts {
        self.base.split_with(STATION_RULES, raw)
    }

    fn build_line(&self, fields: &LineFields) -> Line {
        self.base.classify_with(&rules::chain(LINES), fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rmv() -> Rmv {
        Rmv::build().expect("RMV tables")
    }

    #[test]
    fn licence_plate_prefix() {
        let rmv = rmv();
        assert_eq!(
            rmv.split_station_name(Some("F Hauptbahnhof")).as_tuple(),
            (Some("Frankfurt"), Some("Hauptbahnhof"))
        );
        assert_eq!(
            rmv.split_station_name(Some("OF-Marktplatz")).as_tuple(),
            (Some("Offenbach"), Some("Marktplatz"))
        );
    }

    #[test]
    fn longest_spelling_first() {
        assert_eq!(
            rmv().split_station_name(Some("Frankfurt (Main) Hauptbahnhof")).as_tuple(),
            (Some("Frankfurt"), Some("Hauptbahnhof"))
        );
    }

    #[test]
    fn abbreviation_needs_separator() {
        assert_eq!(
            rmv().split_station_name(Some("Fulda, Bahnhof")).as_tuple(),
            (Some("Fulda"), Some("Bahnhof"))
        );
    }

    #[test]
    fn call_collective_taxi() {
        let line = rmv().classify_line(&LineFields::new().mode("9").train_type("AST").name("AST 53"));
        assert_eq!(line.product, Some(Product::OnDemand));
        assert_eq!(line.label.as_deref(), Some("53"));
    }
}
