//! Verkehrsverbund Mittelsachsen
//!
//! The fare response lists every ticket the tariff knows; only single
//! tickets are meaningful for a trip.

use domain::{Fare, Line, Product};
use normalization::{
    BaseAlgorithm, CommaOrder, CustomizationError, FareFilter, Field, Label, LineFields, LineRule,
    ModeFilter, NameParts, NameRule, NetworkId, NetworkStrategy, NetworkTables, NetworkUnit,
    PlaceList, Protocol, When,
};

use crate::rules;

const STATION_RULES: &[NameRule] = &[NameRule::PlacePrefix, NameRule::Comma(CommaOrder::PlaceFirst)];

const LINES: &[LineRule] = &[LineRule::new(
    ModeFilter::OneOf(&["3", "4"]),
    When::StartsWith(Field::Symbol, "C"),
    Product::RegionalTrain,
    Label::Field(Field::Symbol),
)];

const ALLOWED_FARES: &[&str] = &["einzel-ticket"];

/// VMS customization unit
#[derive(Debug)]
pub struct Vms {
    base: BaseAlgorithm,
    fares: FareFilter,
}

impl NetworkUnit for Vms {
    const ID: NetworkId = NetworkId::Vms;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Efa)
            .with_places(PlaceList::of(&["Chemnitz", "Zwickau", "Mittweida", "Freiberg"]))
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
            fares: FareFilter::allow(Self::ID, ALLOWED_FARES)?,
        })
    }
}

impl NetworkStrategy for Vms {
    fn base(&self) -> &BaseAlgorithm {
        &self.base
    }

    fn split_station_name(&self, raw: Option<&str>) -> NameParts {
        self.base.split_with(STATION_RULES, raw)
    }

    fn build_line(&self, fields: &LineFields) -> Line {
        self.base.classify_with(&rules::chain(LINES), fields)
    }

    fn hide_fare(&self, fare: &Fare) -> bool {
        self.fares.hides(fare)
    }
}
