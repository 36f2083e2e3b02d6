//! Münchner Verkehrs- und Tarifverbund

use domain::{Line, LineStyle, Product};
use normalization::{
    BaseAlgorithm, CommaOrder, CustomizationError, Field, Label, LineFields, LineRule, NameParts,
    NameRule, NetworkId, NetworkStrategy, NetworkTables, NetworkUnit, PlaceList, Protocol,
    StyleTable, When,
};

use crate::rules::{self, RAIL};

const PLACES: &[&str] = &["München", "Freising", "Dachau", "Erding", "Starnberg"];

const STATION_RULES: &[NameRule] = &[
    NameRule::StripSuffix(" (Bus)"),
    NameRule::PlacePrefix,
    NameRule::Comma(CommaOrder::PlaceFirst),
];

/// Private regional operators in Upper Bavaria, shared with the Bavarian
/// state network
pub const BAVARIAN_OPERATORS: &[LineRule] = &[
    LineRule::new(
        RAIL,
        When::Any(&[When::Is(Field::TrainName, "Meridian"), When::Is(Field::TrainType, "M")]),
        Product::RegionalTrain,
        Label::Prefixed("M", Field::TrainNum),
    ),
    LineRule::new(
        RAIL,
        When::Any(&[
            When::Is(Field::TrainName, "Bayerische Oberlandbahn"),
            When::Is(Field::TrainType, "BOB"),
        ]),
        Product::RegionalTrain,
        Label::Prefixed("BOB", Field::TrainNum),
    ),
    LineRule::new(
        RAIL,
        When::Any(&[
            When::Is(Field::TrainName, "Bayerische Regiobahn"),
            When::Is(Field::TrainType, "BRB"),
        ]),
        Product::RegionalTrain,
        Label::Prefixed("BRB", Field::TrainNum),
    ),
    LineRule::train(RAIL, "ALX", Product::RegionalTrain),
];

const SUBURBAN_STYLES: &[(&str, LineStyle)] = &[
    ("S1", LineStyle::rgb(0x16_c0_e9, 0xff_ff_ff)),
    ("S2", LineStyle::rgb(0x71_bf_44, 0xff_ff_ff)),
    ("S3", LineStyle::rgb(0x7b_10_7d, 0xff_ff_ff)),
    ("S4", LineStyle::rgb(0xee_1c_25, 0xff_ff_ff)),
    ("S6", LineStyle::rgb(0x00_8a_51, 0xff_ff_ff)),
    ("S7", LineStyle::rgb(0x96_38_33, 0xff_ff_ff)),
    ("S8", LineStyle::rgb(0x00_00_00, 0xff_cb_06)),
];

const SUBWAY_STYLES: &[(&str, LineStyle)] = &[
    ("U1", LineStyle::rgb(0x43_80_33, 0xff_ff_ff)),
    ("U2", LineStyle::rgb(0xc4_02_1f, 0xff_ff_ff)),
    ("U3", LineStyle::rgb(0xec_6b_22, 0xff_ff_ff)),
    ("U4", LineStyle::rgb(0x00_ab_85, 0xff_ff_ff)),
    ("U5", LineStyle::rgb(0xbc_7a_00, 0xff_ff_ff)),
    ("U6", LineStyle::rgb(0x00_65_ae, 0xff_ff_ff)),
];

/// MVV customization unit
#[derive(Debug)]
pub struct Mvv {
    base: BaseAlgorithm,
}

impl NetworkUnit for Mvv {
    const ID: NetworkId = NetworkId::Mvv;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Efa)
            .with_places(PlaceList::of(PLACES))
            .with_styles(
                StyleTable::default()
                    .with_product_entries(Product::SuburbanTrain, SUBURBAN_STYLES)
                    .with_product_entries(Product::Subway, SUBWAY_STYLES),
            )
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
        })
    }
}

impl NetworkStrategy for Mvv {
    fn base(&self) -> &BaseAlgorithm {
        &self.base
    }

    fn split_station_name(&self, raw: Option<&str>) -> NameParts {
        self.base.split_with(STATION_RULES, raw)
    }

    fn build_line(&self, fields: &LineFields) -> Line {
        self.base.classify_with(&rules::chain(BAVARIAN_OPERATORS), fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mvv() -> Mvv {
        Mvv::build().expect("MVV tables")
    }

    #[test]
    fn bus_annotation_is_dropped() {
        assert_eq!(
            mvv().split_station_name(Some("München, Marienplatz (Bus)")).as_tuple(),
            (Some("München"), Some("Marienplatz"))
        );
    }

    #[test]
    fn meridian_by_train_name() {
        let line = mvv().classify_line(
            &LineFields::new().mode("0").train_name("Meridian").train_num("79021"),
        );
        assert_eq!(line.product, Some(Product::RegionalTrain));
        assert_eq!(line.label.as_deref(), Some("M79021"));
    }

    #[test]
    fn oberlandbahn_by_type() {
        let line = mvv().classify_line(&LineFields::new().mode("13").train_type("BOB").train_num("86912"));
        assert_eq!(line.label.as_deref(), Some("BOB86912"));
    }

    #[test]
    fn subway_style() {
        let line = mvv().classify_line(&LineFields::new().mode("2").symbol("U3"));
        assert_eq!(line.product, Some(Product::Subway));
        assert_eq!(line.style, Some(SUBWAY_STYLES[2].1));
    }

    #[test]
    fn plain_rail_falls_back_to_products_map() {
        let line = mvv().classify_line(&LineFields::new().mode("0"));
        assert_eq!(line.product, Some(Product::RegionalTrain));
        assert_eq!(line.label, None);
    }
}
