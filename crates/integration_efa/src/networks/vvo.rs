//! Verkehrsverbund Oberelbe

use domain::{Line, Product};
use normalization::{
    BaseAlgorithm, CommaOrder, CustomizationError, Field, Label, LineFields, LineRule, NameParts,
    NameRule, NetworkId, NetworkStrategy, NetworkTables, NetworkUnit, PlaceList, Protocol, When,
};

use crate::rules::{self, RAIL};

const PLACES: &[&str] = &["Dresden", "Pirna", "Meißen", "Freital", "Radebeul"];

const STATION_RULES: &[NameRule] = &[NameRule::PlacePrefix, NameRule::Comma(CommaOrder::PlaceFirst)];

const LINES: &[LineRule] = &[
    LineRule::new(
        RAIL,
        When::Any(&[When::Is(Field::TrainName, "Trilex"), When::Is(Field::TrainType, "TLX")]),
        Product::RegionalTrain,
        Label::Prefixed("TLX", Field::TrainNum),
    ),
    LineRule::train(RAIL, "OE", Product::RegionalTrain),
    LineRule::new(
        RAIL,
        When::Is(Field::TrainType, "SB"),
        Product::RegionalTrain,
        Label::FirstOf(&[Field::Symbol, Field::TrainType]),
    ),
    LineRule::new(
        RAIL,
        When::Is(Field::TrainName, "Städtebahn Sachsen"),
        Product::RegionalTrain,
        Label::FirstOf(&[Field::Symbol, Field::Name]),
    ),
];

/// VVO customization unit
#[derive(Debug)]
pub struct Vvo {
    base: BaseAlgorithm,
}

impl NetworkUnit for Vvo {
    const ID: NetworkId = NetworkId::Vvo;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Efa).with_places(PlaceList::of(PLACES))
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
        })
    }
}

impl NetworkStrategy for Vvo {
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
