//! Donau-Iller-Nahverkehrsverbund

use domain::Line;
use normalization::{
    BaseAlgorithm, CommaOrder, CustomizationError, LineFields, NameParts, NameRule, NetworkId,
    NetworkStrategy, NetworkTables, NetworkUnit, PlaceList, Protocol,
};

use crate::rules;

/// `Neu-Ulm` is listed before `Ulm` so the longer place wins
const PLACES: &[&str] = &["Neu-Ulm", "Ulm", "Ehingen", "Senden", "Blaubeuren"];

const STATION_RULES: &[NameRule] = &[NameRule::PlacePrefix, NameRule::Comma(CommaOrder::PlaceFirst)];

/// DING customization unit
#[derive(Debug)]
pub struct Ding {
    base: BaseAlgorithm,
}

impl NetworkUnit for Ding {
    const ID: NetworkId = NetworkId::Ding;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Efa).with_places(PlaceList::of(PLACES))
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
        })
    }
}

impl NetworkStrategy for Ding {
    fn base(&self) -> &BaseAlgorithm {
        &self.base
    }

    fn split_station_name(&self, raw: Option<&str>) -> NameParts {
        self.base.split_with(STATION_RULES, raw)
    }

    fn build_line(&self, fields: &LineFields) -> Line {
        self.base.classify_with(&rules::COMMON, fields)
    }

    fn split_poi(&self, raw: Option<&str>) -> NameParts {
        self.base.split_with(STATION_RULES, raw)
    }
}
