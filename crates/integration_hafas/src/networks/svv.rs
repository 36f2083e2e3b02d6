//! Salzburger Verkehrsverbund

use domain::{Line, Product};
use normalization::{
    BaseAlgorithm, CommaOrder, CustomizationError, Field, Label, LineFields, LineRule, ModeFilter,
    NameParts, NameRule, NetworkId, NetworkStrategy, NetworkTables, NetworkUnit, PlaceList, Protocol,
    When,
};

use crate::rules;

const STATION_RULES: &[NameRule] = &[NameRule::PlacePrefix, NameRule::Comma(CommaOrder::PlaceFirst)];

const LINES: &[LineRule] = &[
    LineRule::new(
        ModeFilter::Any,
        When::StartsWith(Field::Name, "Obus"),
        Product::Bus,
        Label::StripPrefix(Field::Name, "Obus"),
    ),
    LineRule::new(
        ModeFilter::Any,
        When::Is(Field::TrainName, "Salzburger Lokalbahn"),
        Product::SuburbanTrain,
        Label::FirstOf(&[Field::Symbol, Field::Name]),
    ),
];

/// SVV customization unit
#[derive(Debug)]
pub struct Svv {
    base: BaseAlgorithm,
}

impl NetworkUnit for Svv {
    const ID: NetworkId = NetworkId::Svv;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Hafas)
            .with_places(PlaceList::of(&["Salzburg", "Hallein", "Wals-Siezenheim"]))
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
        })
    }
}

impl NetworkStrategy for Svv {
    fn base(&self) -> &BaseAlgorithm {
        &self.base
    }

    fn split_station_name(&self, raw: Option<&str>) -> NameParts {
        self.base.split_with(STATION_RULES, raw)
    }

    fn build_line(&self, fields: &LineFields) -> Line {
        self.base.classify_with(&rules::chain(LINES), fields)
    }
}
