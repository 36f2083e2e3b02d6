//! Verkehrsverbund Tirol
//!
//! Innsbruck's tram and regional tram lines share labels with regional
//! buses, so their styles are keyed by operator.

use domain::{Line, LineStyle};
use normalization::{
    BaseAlgorithm, CommaOrder, CustomizationError, LineFields, NameParts, NameRule, NetworkId,
    NetworkStrategy, NetworkTables, NetworkUnit, PlaceList, Protocol, StyleTable,
};

use crate::rules;

const STATION_RULES: &[NameRule] = &[NameRule::PlacePrefix, NameRule::Comma(CommaOrder::PlaceFirst)];

const STYLES: &[(&str, LineStyle)] = &[
    ("Innsbrucker Verkehrsbetriebe|1", LineStyle::rgb(0x86_5b_9f, 0xff_ff_ff)),
    ("Innsbrucker Verkehrsbetriebe|2", LineStyle::rgb(0xf5_9b_00, 0x00_00_00)),
    ("Innsbrucker Verkehrsbetriebe|3", LineStyle::rgb(0xe2_00_1a, 0xff_ff_ff)),
    ("Innsbrucker Verkehrsbetriebe|5", LineStyle::rgb(0x00_94_d4, 0xff_ff_ff)),
    ("Innsbrucker Verkehrsbetriebe|6", LineStyle::rgb(0x59_a5_38, 0xff_ff_ff)),
    ("Innsbrucker Verkehrsbetriebe|T1", LineStyle::rgb(0x8d_c6_3f, 0x00_00_00)),
    ("Innsbrucker Verkehrsbetriebe|STB", LineStyle::rgb(0x9b_5e_2a, 0xff_ff_ff)),
    ("T1", LineStyle::rgb(0x99_99_99, 0xff_ff_ff)),
];

/// VVT customization unit
#[derive(Debug)]
pub struct Vvt {
    base: BaseAlgorithm,
}

impl NetworkUnit for Vvt {
    const ID: NetworkId = NetworkId::Vvt;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Efa)
            .with_places(PlaceList::of(&["Innsbruck", "Hall in Tirol", "Kufstein"]))
            .with_styles(StyleTable::from_entries(STYLES))
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
        })
    }
}

impl NetworkStrategy for Vvt {
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
