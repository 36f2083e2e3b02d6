//! Österreichische Bundesbahnen

use domain::{Fare, Line, Product};
use normalization::{
    BaseAlgorithm, CommaOrder, CustomizationError, FareFilter, LineFields, LineRule, ModeFilter,
    NameParts, NameRule, NetworkId, NetworkStrategy, NetworkTables, NetworkUnit, Protocol,
};

use crate::rules;

const STATION_RULES: &[NameRule] = &[NameRule::SingleComma(CommaOrder::PlaceFirst)];

const LINES: &[LineRule] = &[
    LineRule::train(ModeFilter::Any, "WB", Product::HighSpeedTrain),
    LineRule::train(ModeFilter::Any, "CJX", Product::RegionalTrain),
    LineRule::train(ModeFilter::Any, "REX", Product::RegionalTrain),
    LineRule::train(ModeFilter::Any, "R", Product::RegionalTrain),
];

const DENIED_FARES: &[&str] = &["vorteilscard", "österreichcard", "klimaticket"];

/// ÖBB customization unit
#[derive(Debug)]
pub struct Oebb {
    base: BaseAlgorithm,
    fares: FareFilter,
}

impl NetworkUnit for Oebb {
    const ID: NetworkId = NetworkId::Oebb;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Hafas)
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
            fares: FareFilter::deny(Self::ID, DENIED_FARES)?,
        })
    }
}

impl NetworkStrategy for Oebb {
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
