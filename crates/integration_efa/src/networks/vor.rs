//! Verkehrsverbund Ost-Region (Wien, Niederösterreich, Burgenland)

use domain::{Line, LineAttribute, LineStyle, Product};
use normalization::{
    BaseAlgorithm, CommaOrder, CustomizationError, Field, Label, LineFields, LineRule, NameParts,
    NameRule, NetworkId, NetworkStrategy, NetworkTables, NetworkUnit, PlaceList, Protocol,
    StyleTable, When,
};

use crate::rules::{self, RAIL};

const STATION_RULES: &[NameRule] = &[NameRule::PlacePrefix, NameRule::Comma(CommaOrder::PlaceFirst)];

const LINES: &[LineRule] = &[
    LineRule::new(
        RAIL,
        When::Any(&[When::Is(Field::TrainType, "CAT"), When::Is(Field::TrainName, "City Airport Train")]),
        Product::RegionalTrain,
        Label::Literal("CAT"),
    )
    .with_attributes(&[LineAttribute::LineAirport]),
    LineRule::new(
        RAIL,
        When::Is(Field::TrainName, "Wiener Lokalbahnen"),
        Product::Tram,
        Label::Literal("WLB"),
    ),
    LineRule::train(RAIL, "WB", Product::HighSpeedTrain),
    LineRule::train(RAIL, "REX", Product::RegionalTrain),
];

const SUBWAY_STYLES: &[(&str, LineStyle)] = &[
    ("U1", LineStyle::rgb(0xe2_00_2a, 0xff_ff_ff)),
    ("U2", LineStyle::rgb(0x99_5f_a3, 0xff_ff_ff)),
    ("U3", LineStyle::rgb(0xee_7d_00, 0xff_ff_ff)),
    ("U4", LineStyle::rgb(0x00_96_40, 0xff_ff_ff)),
    ("U5", LineStyle::rgb(0x00_83_86, 0xff_ff_ff)),
    ("U6", LineStyle::rgb(0x9c_6b_30, 0xff_ff_ff)),
];

/// VOR customization unit
#[derive(Debug)]
pub struct Vor {
    base: BaseAlgorithm,
}

impl NetworkUnit for Vor {
    const ID: NetworkId = NetworkId::Vor;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Efa)
            .with_places(PlaceList::of(&["Wien", "St. Pölten", "Wiener Neustadt"]))
            .with_styles(
                StyleTable::from_entries(&[("CAT", LineStyle::rgb(0x00_a2_53, 0xff_ff_ff))])
                    .with_product_entries(Product::Subway, SUBWAY_STYLES),
            )
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
        })
    }
}

impl NetworkStrategy for Vor {
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
