//! Verkehrs- und Tarifverbund Stuttgart

use domain::{Line, LineStyle, Product};
use normalization::{
    BaseAlgorithm, CommaOrder, CustomizationError, Field, Label, LineFields, LineRule, ModeFilter,
    NameParts, NameRule, NetworkId, NetworkStrategy, NetworkTables, NetworkUnit, PlaceList, Protocol,
    StyleTable, When,
};

use crate::rules;

const PLACES: &[&str] = &[
    "Stuttgart",
    "Esslingen am Neckar",
    "Ludwigsburg",
    "Böblingen",
    "Sindelfingen",
    "Waiblingen",
    "Fellbach",
    "Leonberg",
];

/// Upstream appends `" (Stuttgart)"` to city stops that already carry the
/// place prefix
const STATION_RULES: &[NameRule] = &[
    NameRule::StripSuffix(" (Stuttgart)"),
    NameRule::PlacePrefix,
    NameRule::Comma(CommaOrder::PlaceFirst),
];

const LINES: &[LineRule] = &[
    LineRule::new(
        ModeFilter::OneOf(&["3", "4"]),
        When::Any(&[When::Is(Field::Symbol, "Zacke"), When::Is(Field::Symbol, "10")]),
        Product::Cablecar,
        Label::Literal("Zacke"),
    ),
    LineRule::new(
        ModeFilter::OneOf(&["3", "4"]),
        When::Is(Field::Symbol, "20"),
        Product::Cablecar,
        Label::Literal("Seilbahn"),
    ),
    LineRule::new(
        ModeFilter::Is("7"),
        When::StartsWith(Field::Symbol, "X"),
        Product::Bus,
        Label::Field(Field::Symbol),
    ),
];

const SUBURBAN_STYLES: &[(&str, LineStyle)] = &[
    ("S1", LineStyle::rgb(0x5d_b0_30, 0xff_ff_ff)),
    ("S2", LineStyle::rgb(0xe3_00_1b, 0xff_ff_ff)),
    ("S3", LineStyle::rgb(0xf4_9b_2a, 0xff_ff_ff)),
    ("S4", LineStyle::rgb(0x00_6e_b7, 0xff_ff_ff)),
    ("S5", LineStyle::rgb(0x00_a5_e0, 0xff_ff_ff)),
    ("S6", LineStyle::rgb(0x85_67_3f, 0xff_ff_ff)),
    ("S60", LineStyle::rgb(0x8f_90_3a, 0xff_ff_ff)),
];

const STADTBAHN_STYLES: &[(&str, LineStyle)] = &[
    ("U1", LineStyle::rgb(0xb6_8b_65, 0xff_ff_ff)),
    ("U2", LineStyle::rgb(0xf3_93_00, 0xff_ff_ff)),
    ("U5", LineStyle::rgb(0x00_a5_e0, 0xff_ff_ff)),
    ("U6", LineStyle::rgb(0xe3_00_7d, 0xff_ff_ff)),
    ("U7", LineStyle::rgb(0x00_94_3d, 0xff_ff_ff)),
    ("Zacke", LineStyle::rgb(0xff_cc_00, 0x00_00_00)),
];

/// VVS customization unit
#[derive(Debug)]
pub struct Vvs {
    base: BaseAlgorithm,
}

impl NetworkUnit for Vvs {
    const ID: NetworkId = NetworkId::Vvs;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Efa)
            .with_places(PlaceList::of(PLACES).alias("Esslingen am Neckar", "Esslingen"))
            .with_styles(
                StyleTable::default()
                    .with_product_entries(Product::SuburbanTrain, SUBURBAN_STYLES)
                    .with_product_entries(Product::Tram, STADTBAHN_STYLES)
                    .with_product_entries(Product::Cablecar, &[("Zacke", STADTBAHN_STYLES[5].1)]),
            )
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
        })
    }
}

impl NetworkStrategy for Vvs {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stuttgart_suffix_is_dropped() {
        let vvs = Vvs::build().expect("VVS tables");
        assert_eq!(
            vvs.split_station_name(Some("Stuttgart Hauptbahnhof (tief) (Stuttgart)")).as_tuple(),
            (Some("Stuttgart"), Some("Hauptbahnhof (tief)"))
        );
        assert_eq!(
            vvs.split_station_name(Some("Esslingen Bahnhof")).as_tuple(),
            (Some("Esslingen am Neckar"), Some("Bahnhof"))
        );
    }

    #[test]
    fn rack_railway() {
        let vvs = Vvs::build().expect("VVS tables");
        let line = vvs.classify_line(&LineFields::new().mode("4").symbol("10"));
        assert_eq!(line.product, Some(Product::Cablecar));
        assert_eq!(line.label.as_deref(), Some("Zacke"));
        assert!(line.style.is_some());
    }

    #[test]
    fn suburban_style_is_product_scoped() {
        let vvs = Vvs::build().expect("VVS tables");
        let s1 = vvs.classify_line(&LineFields::new().mode("1").symbol("S1"));
        assert_eq!(s1.style, Some(SUBURBAN_STYLES[0].1));
        let bus = vvs.classify_line(&LineFields::new().mode("5").symbol("S1"));
        assert_eq!(bus.style, None);
    }
}
