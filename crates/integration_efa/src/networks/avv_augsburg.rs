//! Augsburger Verkehrs- und Tarifverbund

use domain::{Line, Product};
use normalization::{
    BaseAlgorithm, CommaOrder, CustomizationError, Field, Label, LineFields, LineRule, ModeFilter,
    NameParts, NameRule, NetworkId, NetworkStrategy, NetworkTables, NetworkUnit, PlaceList, Protocol,
    When,
};

use crate::rules::{self, RAIL};

const STATION_RULES: &[NameRule] = &[NameRule::PlacePrefix, NameRule::Comma(CommaOrder::PlaceFirst)];

const LINES: &[LineRule] = &[
    LineRule::train(RAIL, "ag", Product::RegionalTrain),
    LineRule::new(
        RAIL,
        When::Is(Field::TrainName, "Go-Ahead"),
        Product::RegionalTrain,
        Label::FirstOf(&[Field::Symbol, Field::TrainNum]),
    ),
    LineRule::new(
        ModeFilter::Is("10"),
        When::Present(Field::Symbol),
        Product::OnDemand,
        Label::StripPrefix(Field::Symbol, "AST"),
    ),
];

/// AVV Augsburg customization unit
#[derive(Debug)]
pub struct AvvAugsburg {
    base: BaseAlgorithm,
}

impl NetworkUnit for AvvAugsburg {
    const ID: NetworkId = NetworkId::AvvAugsburg;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Efa)
            .with_places(PlaceList::of(&["Augsburg", "Friedberg", "Königsbrunn", "Gersthofen"]))
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
        })
    }
}

impl NetworkStrategy for AvvAugsburg {
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
