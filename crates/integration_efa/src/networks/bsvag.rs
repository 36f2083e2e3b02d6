//! Braunschweiger Verkehrs-GmbH
//!
//! Bracketed suffixes such as `"[Bus]"` are part of the stop name here and
//! are kept.

use domain::{Line, LineStyle, Product};
use normalization::{
    BaseAlgorithm, CommaOrder, CustomizationError, LineFields, NameParts, NameRule, NetworkId,
    NetworkStrategy, NetworkTables, NetworkUnit, PlaceList, Protocol, StyleTable,
};

use crate::rules;

const STATION_RULES: &[NameRule] = &[NameRule::PlacePrefix, NameRule::Comma(CommaOrder::PlaceFirst)];

const TRAM_STYLES: &[(&str, LineStyle)] = &[
    ("M1", LineStyle::rgb(0x62_c5_8d, 0xff_ff_ff)),
    ("M2", LineStyle::rgb(0xf3_9c_00, 0xff_ff_ff)),
    ("M3", LineStyle::rgb(0x00_8d_d2, 0xff_ff_ff)),
    ("M4", LineStyle::rgb(0xe3_06_13, 0xff_ff_ff)),
    ("M5", LineStyle::rgb(0x9d_1e_83, 0xff_ff_ff)),
];

/// BSVAG customization unit
#[derive(Debug)]
pub struct Bsvag {
    base: BaseAlgorithm,
}

impl NetworkUnit for Bsvag {
    const ID: NetworkId = NetworkId::Bsvag;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Efa)
            .with_places(PlaceList::of(&["Braunschweig", "Wolfsburg", "Wolfenbüttel", "Salzgitter"]))
            .with_styles(StyleTable::default().with_product_entries(Product::Tram, TRAM_STYLES))
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
        })
    }
}

impl NetworkStrategy for Bsvag {
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
    fn brackets_stay_in_name() {
        let bsvag = Bsvag::build().expect("BSVAG tables");
        assert_eq!(
            bsvag.split_station_name(Some("Braunschweig Rathaus [Bus]")).as_tuple(),
            (Some("Braunschweig"), Some("Rathaus [Bus]"))
        );
        assert_eq!(
            bsvag.split_station_name(Some("Peine, Bahnhof [Bus]")).as_tuple(),
            (Some("Peine"), Some("Bahnhof [Bus]"))
        );
    }

    #[test]
    fn tram_styles() {
        let bsvag = Bsvag::build().expect("BSVAG tables");
        let line = bsvag.classify_line(&LineFields::new().mode("4").symbol("M5"));
        assert_eq!(line.style, Some(TRAM_STYLES[4].1));
    }
}
