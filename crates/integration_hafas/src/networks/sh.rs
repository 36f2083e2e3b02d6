//! Nahverkehrsverbund Schleswig-Holstein
//!
//! The backend is DB-operated and shares its line conventions.

use domain::{Fare, Line, Product};
use normalization::{
    BaseAlgorithm, CommaOrder, CustomizationError, FareFilter, Field, Label, LineFields, LineRule,
    ModeFilter, NameParts, NameRule, NetworkId, NetworkStrategy, NetworkTables, NetworkUnit,
    PlaceList, Protocol, When,
};

use super::db::DB_LINES;
use crate::rules;

const STATION_RULES: &[NameRule] = &[NameRule::PlacePrefix, NameRule::Comma(CommaOrder::PlaceFirst)];

const LINES: &[LineRule] = &[LineRule::new(
    ModeFilter::Any,
    When::Is(Field::TrainType, "AKN"),
    Product::RegionalTrain,
    Label::FirstOf(&[Field::Symbol, Field::TrainType]),
)];

const DENIED_FARES: &[&str] = &["abo", "monatskarte", "semesterticket"];

/// SH customization unit
#[derive(Debug)]
pub struct Sh {
    base: BaseAlgorithm,
    fares: FareFilter,
}

impl NetworkUnit for Sh {
    const ID: NetworkId = NetworkId::Sh;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Hafas)
            .with_places(PlaceList::of(&["Kiel", "Lübeck", "Flensburg", "Neumünster"]))
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
            fares: FareFilter::deny(Self::ID, DENIED_FARES)?,
        })
    }
}

impl NetworkStrategy for Sh {
    fn base(&self) -> &BaseAlgorithm {
        &self.base
    }

    fn split_station_name(&self, raw: Option<&str>) -> NameParts {
        self.base.split_with(STATION_RULES, raw)
    }

    fn build_line(&self, fields: &LineFields) -> Line {
        self.base.classify_with(
            &[LINES, DB_LINES, rules::COMMON[0], rules::COMMON[1], rules::COMMON[2]],
            fields,
        )
    }

    fn hide_fare(&self, fare: &Fare) -> bool {
        self.fares.hides(fare)
    }
}
