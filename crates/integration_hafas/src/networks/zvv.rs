//! Zürcher Verkehrsverbund

use domain::{Line, Product};
use normalization::{
    BaseAlgorithm, CommaOrder, CustomizationError, Field, Label, LineFields, LineRule, ModeFilter,
    NameParts, NameRule, NetworkId, NetworkStrategy, NetworkTables, NetworkUnit, PlaceList,
    ProductsMap, Protocol, When,
};

use super::sbb::{SWISS_LINES, SWISS_PRODUCTS};
use crate::rules;

const STATION_RULES: &[NameRule] = &[NameRule::PlacePrefix, NameRule::Comma(CommaOrder::PlaceFirst)];

const LINES: &[LineRule] = &[
    LineRule::new(
        ModeFilter::Is("6"),
        When::Present(Field::Name),
        Product::Bus,
        Label::StripPrefix(Field::Name, "Bus "),
    ),
    LineRule::new(
        ModeFilter::Is("9"),
        When::Present(Field::Name),
        Product::Tram,
        Label::StripPrefix(Field::Name, "Tram "),
    ),
];

/// ZVV customization unit
#[derive(Debug)]
pub struct Zvv {
    base: BaseAlgorithm,
}

impl NetworkUnit for Zvv {
    const ID: NetworkId = NetworkId::Zvv;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Hafas)
            .with_products(ProductsMap::new(SWISS_PRODUCTS))
            .with_places(PlaceList::of(&["Zürich", "Winterthur", "Uster", "Dübendorf"]))
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
        })
    }
}

impl NetworkStrategy for Zvv {
    fn base(&self) -> &BaseAlgorithm {
        &self.base
    }

    fn split_station_name(&self, raw: Option<&str>) -> NameParts {
        self.base.split_with(STATION_RULES, raw)
    }

    fn build_line(&self, fields: &LineFields) -> Line {
        self.base.classify_with(
            &[LINES, SWISS_LINES, rules::COMMON[0], rules::COMMON[1], rules::COMMON[2]],
            fields,
        )
    }
}
