//! Transport for NSW (Sydney)
//!
//! Stop names read `"Name, Suburb"`; only adult fares are shown.

use domain::{Fare, Line, LineStyle, Product};
use normalization::{
    BaseAlgorithm, CommaOrder, CustomizationError, FareFilter, Field, Label, LineFields, LineRule,
    ModeFilter, NameParts, NameRule, NetworkId, NetworkStrategy, NetworkTables, NetworkUnit,
    ProductsMap, Protocol, StyleTable, When,
};

use crate::rules;

const STATION_RULES: &[NameRule] = &[NameRule::Comma(CommaOrder::NameFirst)];

const TRAIN: ModeFilter = ModeFilter::Is("1");

const LINES: &[LineRule] = &[
    LineRule::new(
        ModeFilter::OneOf(&["1", "2"]),
        When::StartsWith(Field::Symbol, "M"),
        Product::Subway,
        Label::Field(Field::Symbol),
    ),
    LineRule::new(
        TRAIN,
        When::StartsWith(Field::Symbol, "T"),
        Product::SuburbanTrain,
        Label::Field(Field::Symbol),
    ),
    LineRule::new(
        TRAIN,
        When::Any(&[
            When::StartsWith(Field::Symbol, "BMT"),
            When::StartsWith(Field::Symbol, "CCN"),
            When::StartsWith(Field::Symbol, "HUN"),
            When::StartsWith(Field::Symbol, "SCO"),
            When::StartsWith(Field::Symbol, "SHL"),
        ]),
        Product::RegionalTrain,
        Label::Field(Field::Symbol),
    ),
    LineRule::new(
        ModeFilter::Is("4"),
        When::StartsWith(Field::Symbol, "L"),
        Product::Tram,
        Label::Field(Field::Symbol),
    ),
    LineRule::new(
        ModeFilter::Is("9"),
        When::Present(Field::Symbol),
        Product::Ferry,
        Label::StripPrefix(Field::Symbol, "Ferry "),
    ),
];

const ALLOWED_FARES: &[&str] = &["adult"];

const STYLES: &[(&str, LineStyle)] = &[
    ("T1", LineStyle::rgb(0xf9_9d_1c, 0xff_ff_ff)),
    ("T2", LineStyle::rgb(0x00_95_da, 0xff_ff_ff)),
    ("T3", LineStyle::rgb(0xf3_6e_22, 0xff_ff_ff)),
    ("T4", LineStyle::rgb(0x00_5a_a3, 0xff_ff_ff)),
    ("T8", LineStyle::rgb(0x00_95_4c, 0xff_ff_ff)),
    ("M1", LineStyle::rgb(0x16_8b_8c, 0xff_ff_ff)),
    ("L1", LineStyle::rgb(0xbe_12_2f, 0xff_ff_ff)),
];

/// Sydney customization unit
#[derive(Debug)]
pub struct Sydney {
    base: BaseAlgorithm,
    fares: FareFilter,
}

impl NetworkUnit for Sydney {
    const ID: NetworkId = NetworkId::Sydney;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Efa)
            .with_products(
                ProductsMap::new(ProductsMap::EFA)
                    .with(1, Some(Product::SuburbanTrain))
                    .with(7, Some(Product::Bus))
                    .with(11, Some(Product::Bus)),
            )
            .with_styles(StyleTable::from_entries(STYLES))
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
            fares: FareFilter::allow(Self::ID, ALLOWED_FARES)?,
        })
    }
}

impl NetworkStrategy for Sydney {
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

    fn hide_fare(&self, fare: &Fare) -> bool {
        self.fares.hides(fare)
    }
}
