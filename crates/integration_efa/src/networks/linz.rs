//! Linz AG Linien

use domain::{Fare, Line, LineStyle, Product};
use normalization::{
    BaseAlgorithm, CustomizationError, FareFilter, LineFields, NameParts, NameRule, NetworkId,
    NetworkStrategy, NetworkTables, NetworkUnit, PlaceList, Protocol, StyleTable,
};

use crate::rules;

const STATION_RULES: &[NameRule] = &[NameRule::PlacePrefix];

const DENIED_FARES: &[&str] = &["jahreskarte", "monatskarte", "wochenkarte", "klimaticket"];

const TRAM_STYLES: &[(&str, LineStyle)] = &[
    ("1", LineStyle::rgb(0xe3_00_0f, 0xff_ff_ff)),
    ("2", LineStyle::rgb(0xe3_00_0f, 0xff_ff_ff)),
    ("3", LineStyle::rgb(0xe3_00_0f, 0xff_ff_ff)),
    ("4", LineStyle::rgb(0xe3_00_0f, 0xff_ff_ff)),
    ("50", LineStyle::rgb(0x6b_8e_23, 0xff_ff_ff)),
];

/// Linz customization unit
#[derive(Debug)]
pub struct Linz {
    base: BaseAlgorithm,
    fares: FareFilter,
}

impl NetworkUnit for Linz {
    const ID: NetworkId = NetworkId::Linz;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Efa)
            .with_places(PlaceList::of(&["Linz", "Leonding", "Traun"]))
            .with_styles(StyleTable::default().with_product_entries(Product::Tram, TRAM_STYLES))
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
            fares: FareFilter::deny(Self::ID, DENIED_FARES)?,
        })
    }
}

impl NetworkStrategy for Linz {
    fn base(&self) -> &BaseAlgorithm {
        &self.base
    }

    fn split_station_name(&self, raw: Option<&str>) -> NameParts {
        self.base.split_with(STATION_RULES, raw)
    }

    fn build_line(&self, fields: &LineFields) -> Line {
        self.base.classify_with(&rules::COMMON, fields)
    }

    fn hide_fare(&self, fare: &Fare) -> bool {
        self.fares.hides(fare)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_passes_are_hidden() {
        let linz = Linz::build().expect("Linz tables");
        assert!(linz.hide_fare(&Fare::named("Jahreskarte Kernzone", "EUR", 285.0)));
        assert!(!linz.hide_fare(&Fare::named("Einzelfahrt Mini", "EUR", 1.3)));
    }

    #[test]
    fn tram_style_only_for_trams() {
        let linz = Linz::build().expect("Linz tables");
        let tram = linz.classify_line(&LineFields::new().mode("4").symbol("2"));
        assert!(tram.style.is_some());
        let bus = linz.classify_line(&LineFields::new().mode("5").symbol("2"));
        assert!(bus.style.is_none());
    }

    #[test]
    fn hyphenated_place_prefix() {
        let linz = Linz::build().expect("Linz tables");
        assert_eq!(
            linz.split_station_name(Some("Linz-Hauptbahnhof")).as_tuple(),
            (Some("Linz"), Some("Hauptbahnhof"))
        );
        assert_eq!(
            linz.split_station_name(Some("Pasching, Plus City")).as_tuple(),
            (Some("Pasching"), Some("Plus City"))
        );
    }
}
