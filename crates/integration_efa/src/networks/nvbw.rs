//! Nahverkehrsgesellschaft Baden-Württemberg
//!
//! NVBW often leaves `trainType` empty and spells the category out in
//! `trainName`.

use domain::{Line, Product};
use normalization::{
    BaseAlgorithm, CustomizationError, Field, Label, LineFields, LineRule, NetworkId,
    NetworkStrategy, NetworkTables, NetworkUnit, Protocol, When,
};

use crate::rules::{self, RAIL};

const LINES: &[LineRule] = &[
    LineRule::new(
        RAIL,
        When::Is(Field::TrainName, "Regionalbahn"),
        Product::RegionalTrain,
        Label::Prefixed("RB", Field::TrainNum),
    ),
    LineRule::new(
        RAIL,
        When::Is(Field::TrainName, "Regional-Express"),
        Product::RegionalTrain,
        Label::Prefixed("RE", Field::TrainNum),
    ),
    LineRule::new(
        RAIL,
        When::Is(Field::TrainName, "Interregio-Express"),
        Product::RegionalTrain,
        Label::Prefixed("IRE", Field::TrainNum),
    ),
    LineRule::new(
        RAIL,
        When::Is(Field::TrainName, "Metropolexpress"),
        Product::RegionalTrain,
        Label::Prefixed("MEX", Field::TrainNum),
    ),
    LineRule::new(
        RAIL,
        When::All(&[When::Is(Field::TrainName, "S-Bahn"), When::Absent(Field::Symbol)]),
        Product::SuburbanTrain,
        Label::Prefixed("S", Field::TrainNum),
    ),
    LineRule::unclassified(
        RAIL,
        When::Is(Field::TrainName, "Sonderzug"),
        Label::Prefixed("SDZ", Field::TrainNum),
    ),
];

/// NVBW customization unit
#[derive(Debug)]
pub struct Nvbw {
    base: BaseAlgorithm,
}

impl NetworkUnit for Nvbw {
    const ID: NetworkId = NetworkId::Nvbw;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Efa)
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
        })
    }
}

impl NetworkStrategy for Nvbw {
    fn base(&self) -> &BaseAlgorithm {
        &self.base
    }

    fn build_line(&self, fields: &LineFields) -> Line {
        self.base.classify_with(&rules::chain(LINES), fields)
    }
}
