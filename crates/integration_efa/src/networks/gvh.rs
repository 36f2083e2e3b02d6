//! Großraum-Verkehr Hannover

use domain::{Line, LineStyle, Product};
use normalization::{
    BaseAlgorithm, CommaOrder, CustomizationError, LineFields, NameParts, NameRule, NetworkId,
    NetworkStrategy, NetworkTables, NetworkUnit, PlaceList, Protocol, StyleTable,
};

use crate::rules;

const STATION_RULES: &[NameRule] = &[
    NameRule::PlacePrefix,
    NameRule::ParenPlace,
    NameRule::Comma(CommaOrder::PlaceFirst),
];

const STADTBAHN_STYLES: &[(&str, LineStyle)] = &[
    ("1", LineStyle::rgb(0xe4_00_13, 0xff_ff_ff)),
    ("2", LineStyle::rgb(0xe4_00_13, 0xff_ff_ff)),
    ("3", LineStyle::rgb(0x00_6c_b5, 0xff_ff_ff)),
    ("4", LineStyle::rgb(0xf3_9a_00, 0xff_ff_ff)),
    ("9", LineStyle::rgb(0x00_6c_b5, 0xff_ff_ff)),
    ("10", LineStyle::rgb(0x81_b6_2c, 0xff_ff_ff)),
];

/// GVH customization unit
#[derive(Debug)]
pub struct Gvh {
    base: BaseAlgorithm,
}

impl NetworkUnit for Gvh {
    const ID: NetworkId = NetworkId::Gvh;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Efa)
            .with_places(PlaceList::of(&["Hannover", "Langenhagen", "Laatzen", "Garbsen"]))
            .with_styles(StyleTable::default().with_product_entries(Product::Tram, STADTBAHN_STYLES))
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
        })
    }
}

impl NetworkStrategy for Gvh {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_rules_in_order() {
        let gvh = Gvh::build().expect("GVH tables");
        assert_eq!(
            gvh.split_station_name(Some("Hannover Kröpcke")).as_tuple(),
            (Some("Hannover"), Some("Kröpcke"))
        );
        assert_eq!(
            gvh.split_station_name(Some("Bahnhof (Lehrte)")).as_tuple(),
            (Some("Lehrte"), Some("Bahnhof"))
        );
        assert_eq!(
            gvh.split_station_name(Some("Burgdorf, Bahnhof")).as_tuple(),
            (Some("Burgdorf"), Some("Bahnhof"))
        );
    }

    #[test]
    fn stadtbahn_style() {
        let gvh = Gvh::build().expect("GVH tables");
        let line = gvh.classify_line(&LineFields::new().mode("3").symbol("10"));
        assert_eq!(line.product, Some(Product::Tram));
        assert_eq!(line.style, Some(STADTBAHN_STYLES[5].1));
    }
}
