//! Verkehrsverbund Bremen/Niedersachsen

use domain::{Line, Product};
use normalization::{
    BaseAlgorithm, CommaOrder, CustomizationError, Field, Label, LineFields, LineRule, ModeFilter,
    NameParts, NameRule, NetworkId, NetworkStrategy, NetworkTables, NetworkUnit, PlaceList, Protocol,
    When,
};

use crate::rules;

const STATION_RULES: &[NameRule] = &[NameRule::PlacePrefix, NameRule::Comma(CommaOrder::PlaceFirst)];

const ADDRESS_RULES: &[NameRule] = &[NameRule::PostcodePlace];

const LINES: &[LineRule] = &[
    LineRule::train(ModeFilter::Any, "NWB", Product::RegionalTrain),
    LineRule::new(
        ModeFilter::Any,
        When::Is(Field::TrainName, "NordWestBahn"),
        Product::RegionalTrain,
        Label::FirstOf(&[Field::Symbol, Field::TrainNum]),
    ),
];

/// VBN customization unit
#[derive(Debug)]
pub struct Vbn {
    base: BaseAlgorithm,
}

impl NetworkUnit for Vbn {
    const ID: NetworkId = NetworkId::Vbn;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Hafas).with_places(
            PlaceList::of(&["Bremen", "Bremerhaven", "Oldenburg (Oldb)", "Delmenhorst"])
                .alias("Oldenburg (Oldb)", "Oldenburg"),
        )
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
        })
    }
}

impl NetworkStrategy for Vbn {
    fn base(&self) -> &BaseAlgorithm {
        &self.base
    }

    fn split_station_name(&self, raw: Option<&str>) -> NameParts {
        self.base.split_with(STATION_RULES, raw)
    }

    fn split_address(&self, raw: Option<&str>) -> NameParts {
        self.base.split_with(ADDRESS_RULES, raw)
    }

    fn build_line(&self, fields: &LineFields) -> Line {
        self.base.classify_with(&rules::chain(LINES), fields)
    }
}
