//! Karlsruher Verkehrsverbund
//!
//! The Karlsruhe model runs S-Bahn lines as tram-trains, so upstream
//! reports them on the tram `motType`s.

use domain::{Line, LineStyle, Product};
use normalization::{
    BaseAlgorithm, CommaOrder, CustomizationError, Field, Label, LineFields, LineRule, ModeFilter,
    NameParts, NameRule, NetworkId, NetworkStrategy, NetworkTables, NetworkUnit, PlaceList, Protocol,
    StyleTable, When,
};

use crate::rules;

const PLACES: &[&str] = &["Karlsruhe", "Ettlingen", "Bruchsal", "Rastatt", "Pforzheim"];

const STATION_RULES: &[NameRule] = &[
    NameRule::PlacePrefix,
    NameRule::ParenPlace,
    NameRule::Comma(CommaOrder::PlaceFirst),
];

const LINES: &[LineRule] = &[LineRule::new(
    ModeFilter::OneOf(&["3", "4"]),
    When::StartsWith(Field::Symbol, "S"),
    Product::SuburbanTrain,
    Label::Field(Field::Symbol),
)];

const STYLES: &[(&str, LineStyle)] = &[
    ("S1", LineStyle::rgb(0x00_a7_6d, 0xff_ff_ff)),
    ("S2", LineStyle::rgb(0xa0_69_aa, 0xff_ff_ff)),
    ("S4", LineStyle::rgb(0x9f_18_4c, 0xff_ff_ff)),
    ("S5", LineStyle::rgb(0xf6_9c_91, 0x00_00_00)),
    ("1", LineStyle::rgb(0xed_1c_24, 0xff_ff_ff)),
    ("2", LineStyle::rgb(0x00_71_bc, 0xff_ff_ff)),
];

/// KVV customization unit
#[derive(Debug)]
pub struct Kvv {
    base: BaseAlgorithm,
}

impl NetworkUnit for Kvv {
    const ID: NetworkId = NetworkId::Kvv;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Efa)
            .with_places(PlaceList::of(PLACES))
            .with_styles(StyleTable::from_entries(STYLES))
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
        })
    }
}

impl NetworkStrategy for Kvv {
    fn base(&self) -> &BaseAlgorithm {
        &self.base
    }

    fn split_station_name(&self, raw: Option<&str>) -> NameParts {
        self.base.split_with(STATION_RULES, raw)
    }

    fn split_poi(&self, raw: Option<&str>) -> NameParts {
        self.base.split_with(STATION_RULES, raw)
    }

    fn build_line(&self, fields: &LineFields) -> Line {
        self.base.classify_with(&rules::chain(LINES), fields)
    }
}
