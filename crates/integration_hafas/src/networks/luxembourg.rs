//! Mobilitéitszentral Luxembourg
//!
//! Station names carry the operator's stop code in brackets, which is
//! dropped.

use domain::{Line, Product};
use normalization::{
    BaseAlgorithm, CommaOrder, CustomizationError, Field, Label, LineFields, LineRule, ModeFilter,
    NameParts, NameRule, NetworkId, NetworkStrategy, NetworkTables, NetworkUnit, PlaceList, Protocol,
    When,
};

use crate::rules;

const STATION_RULES: &[NameRule] = &[
    NameRule::StripBracketed,
    NameRule::PlacePrefix,
    NameRule::Comma(CommaOrder::PlaceFirst),
];

const LINES: &[LineRule] = &[
    LineRule::new(
        ModeFilter::Any,
        When::OneOf(Field::TrainType, &["TRAM", "Tram"]),
        Product::Tram,
        Label::Literal("T1"),
    ),
    LineRule::new(
        ModeFilter::Any,
        When::Is(Field::TrainType, "FUN"),
        Product::Cablecar,
        Label::Literal("Funiculaire"),
    ),
    LineRule::train(ModeFilter::Any, "CRE", Product::RegionalTrain),
];

/// Luxembourg customization unit
#[derive(Debug)]
pub struct Luxembourg {
    base: BaseAlgorithm,
}

impl NetworkUnit for Luxembourg {
    const ID: NetworkId = NetworkId::Luxembourg;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Hafas).with_places(
            PlaceList::of(&["Luxembourg", "Esch-sur-Alzette", "Differdange", "Ettelbruck"])
                .alias("Luxembourg", "Lux")
                .alias("Esch-sur-Alzette", "Esch/Alzette"),
        )
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
        })
    }
}

impl NetworkStrategy for Luxembourg {
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
