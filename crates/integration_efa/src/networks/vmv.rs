//! Verkehrsgesellschaft Mecklenburg-Vorpommern

use domain::{Line, Product};
use normalization::{
    BaseAlgorithm, CommaOrder, CustomizationError, Field, Label, LineFields, LineRule, NameParts,
    NameRule, NetworkId, NetworkStrategy, NetworkTables, NetworkUnit, PlaceList, Protocol, When,
};

use crate::rules::{self, RAIL};

const PLACES: &[&str] = &["Rostock", "Schwerin", "Stralsund", "Greifswald", "Wismar"];

const STATION_RULES: &[NameRule] = &[NameRule::PlacePrefix, NameRule::Comma(CommaOrder::PlaceFirst)];

const LINES: &[LineRule] = &[
    LineRule::new(
        RAIL,
        When::Any(&[When::Is(Field::TrainType, "UBB"), When::Is(Field::TrainName, "Usedomer Bäderbahn")]),
        Product::RegionalTrain,
        Label::Prefixed("UBB", Field::TrainNum),
    ),
    LineRule::train(RAIL, "ODEG", Product::RegionalTrain),
];

/// VMV customization unit
#[derive(Debug)]
pub struct Vmv {
    base: BaseAlgorithm,
}

impl NetworkUnit for Vmv {
    const ID: NetworkId = NetworkId::Vmv;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Efa).with_places(PlaceList::of(PLACES))
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
        })
    }
}

impl NetworkStrategy for Vmv {
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
