//! Verkehrsverbund Berlin-Brandenburg
//!
//! Station names carry platform hints in brackets (`"[U2]"`) and
//! S-Bahn/U-Bahn markers (`"(S)"`, `"(U)"`, `"(S+U)"`); both are cosmetic
//! and are dropped before the place is looked for.

use domain::{Line, LineStyle, Product};
use normalization::{
    BaseAlgorithm, CommaOrder, CustomizationError, Field, Label, LineFields, LineRule, ModeFilter,
    NameParts, NameRule, NetworkId, NetworkStrategy, NetworkTables, NetworkUnit, PlaceList, Protocol,
    StyleTable, When,
};

use crate::rules;

const STATION_RULES: &[NameRule] = &[
    NameRule::StripBracketed,
    NameRule::StripSuffix(" (S+U)"),
    NameRule::StripSuffix(" (S)"),
    NameRule::StripSuffix(" (U)"),
    NameRule::ParenPlace,
    NameRule::PlacePrefix,
    NameRule::Comma(CommaOrder::PlaceFirst),
];

const LINES: &[LineRule] = &[
    LineRule::new(
        ModeFilter::Is("5"),
        When::Present(Field::Name),
        Product::Bus,
        Label::StripPrefix(Field::Name, "Bus "),
    ),
    LineRule::new(
        ModeFilter::Is("8"),
        When::Present(Field::Name),
        Product::Tram,
        Label::StripPrefix(Field::Name, "STR "),
    ),
    LineRule::new(
        ModeFilter::Is("6"),
        When::Present(Field::Name),
        Product::Ferry,
        Label::StripPrefix(Field::Name, "Fähre "),
    ),
];

const SUBURBAN_STYLES: &[(&str, LineStyle)] = &[
    ("S1", LineStyle::rgb(0xdd_6c_a6, 0xff_ff_ff)),
    ("S2", LineStyle::rgb(0x00_7a_3c, 0xff_ff_ff)),
    ("S3", LineStyle::rgb(0x00_66_ad, 0xff_ff_ff)),
    ("S5", LineStyle::rgb(0xeb_72_05, 0xff_ff_ff)),
    ("S7", LineStyle::rgb(0x81_6d_a6, 0xff_ff_ff)),
    ("S41", LineStyle::rgb(0xa2_3b_1e, 0xff_ff_ff)),
    ("S42", LineStyle::rgb(0xc2_63_1e, 0xff_ff_ff)),
];

const SUBWAY_STYLES: &[(&str, LineStyle)] = &[
    ("U1", LineStyle::rgb(0x7d_ad_4c, 0xff_ff_ff)),
    ("U2", LineStyle::rgb(0xda_42_1e, 0xff_ff_ff)),
    ("U3", LineStyle::rgb(0x00_7a_5b, 0xff_ff_ff)),
    ("U5", LineStyle::rgb(0x7e_53_30, 0xff_ff_ff)),
    ("U6", LineStyle::rgb(0x8c_6d_ab, 0xff_ff_ff)),
    ("U7", LineStyle::rgb(0x52_8d_ba, 0xff_ff_ff)),
    ("U8", LineStyle::rgb(0x22_4f_86, 0xff_ff_ff)),
    ("U9", LineStyle::rgb(0xf3_79_1d, 0xff_ff_ff)),
];

const OPERATOR_STYLES: &[(&str, LineStyle)] = &[
    ("BVG|M10", LineStyle::rgb(0xcc_00_00, 0xff_ff_ff)),
    ("BVG|M4", LineStyle::rgb(0xcc_00_00, 0xff_ff_ff)),
    ("ViP|91", LineStyle::rgb(0x00_5a_9a, 0xff_ff_ff)),
];

/// VBB customization unit
#[derive(Debug)]
pub struct Vbb {
    base: BaseAlgorithm,
}

impl NetworkUnit for Vbb {
    const ID: NetworkId = NetworkId::Vbb;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Hafas)
            .with_places(
                PlaceList::of(&["Berlin", "Potsdam", "Cottbus", "Frankfurt (Oder)"])
                    .alias("Berlin", "Bln"),
            )
            .with_styles(
                StyleTable::from_entries(OPERATOR_STYLES)
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

impl NetworkStrategy for Vbb {
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

    fn vbb() -> Vbb {
        Vbb::build().expect("VBB tables")
    }

    #[test]
    fn markers_and_brackets_dropped() {
        let vbb = vbb();
        assert_eq!(
            vbb.split_station_name(Some("S+U Alexanderplatz (Berlin) [U2]")).as_tuple(),
            (Some("Berlin"), Some("S+U Alexanderplatz"))
        );
        assert_eq!(
            vbb.split_station_name(Some("Berlin Friedrichstraße (S+U)")).as_tuple(),
            (Some("Berlin"), Some("Friedrichstraße"))
        );
        assert_eq!(
            vbb.split_station_name(Some("Potsdam Griebnitzsee (S)")).as_tuple(),
            (Some("Potsdam"), Some("Griebnitzsee"))
        );
    }

    #[test]
    fn berlin_abbreviation() {
        assert_eq!(
            vbb().split_station_name(Some("Bln Zoologischer Garten")).as_tuple(),
            (Some("Berlin"), Some("Zoologischer Garten"))
        );
    }

    #[test]
    fn frankfurt_oder_is_not_a_paren_place() {
        assert_eq!(
            vbb().split_station_name(Some("Frankfurt (Oder) Bahnhof")).as_tuple(),
            (Some("Frankfurt (Oder)"), Some("Bahnhof"))
        );
    }

    #[test]
    fn nested_paren_place() {
        assert_eq!(
            vbb().split_station_name(Some("Bahnhof (Frankfurt (Oder))")).as_tuple(),
            (Some("Frankfurt (Oder)"), Some("Bahnhof"))
        );
    }

    #[test]
    fn bus_prefix_stripped() {
        let line = vbb().classify_line(&LineFields::new().mode("5").name("Bus 100"));
        assert_eq!(line.product, Some(Product::Bus));
        assert_eq!(line.label.as_deref(), Some("100"));
    }

    #[test]
    fn metro_tram_operator_style() {
        let vbb = vbb();
        let line = vbb.classify_line(&LineFields::new().mode("8").network("BVG").name("STR M10"));
        assert_eq!(line.label.as_deref(), Some("M10"));
        assert_eq!(line.style, Some(OPERATOR_STYLES[0].1));
    }

    #[test]
    fn subway_style() {
        let line = vbb().classify_line(&LineFields::new().mode("7").symbol("U2"));
        assert_eq!(line.product, Some(Product::Subway));
        assert_eq!(line.style, Some(SUBWAY_STYLES[1].1));
    }
}
