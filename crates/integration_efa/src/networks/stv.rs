//! Steirischer Verkehrsverbund
//!
//! Stop names read `"Name, Place"`.

use domain::Line;
use normalization::{
    BaseAlgorithm, CommaOrder, CustomizationError, LineFields, NameParts, NameRule, NetworkId,
    NetworkStrategy, NetworkTables, NetworkUnit, PlaceList, Protocol,
};

use crate::rules;

const STATION_RULES: &[NameRule] = &[NameRule::PlacePrefix, NameRule::LastComma(CommaOrder::NameFirst)];

/// STV customization unit
#[derive(Debug)]
pub struct Stv {
    base: BaseAlgorithm,
}

impl NetworkUnit for Stv {
    const ID: NetworkId = NetworkId::Stv;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Efa).with_places(PlaceList::of(&["Graz"]))
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
        })
    }
}

impl NetworkStrategy for Stv {
    fn base(&self) -> &BaseAlgorithm {
        &self.base
    }

    fn split_station_name(&self, raw: Option<&str>) -> NameParts {
        self.base.split_with(STATION_RULES, raw)
    }

    fn build_line(&self, fields: &LineFields) -> Line {
        self.base.classify_with(&rules::COMMON, fields)
    }
}
