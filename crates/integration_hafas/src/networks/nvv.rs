//! Nordhessischer Verkehrsverbund

use domain::{Line, Product};
use normalization::{
    BaseAlgorithm, CommaOrder, CustomizationError, Field, Label, LineFields, LineRule, ModeFilter,
    NameParts, NameRule, NetworkId, NetworkStrategy, NetworkTables, NetworkUnit, PlaceList, Protocol,
    When,
};

use crate::rules;

const STATION_RULES: &[NameRule] = &[NameRule::PlacePrefix, NameRule::Comma(CommaOrder::PlaceFirst)];

const ADDRESS_RULES: &[NameRule] = &[NameRule::PostcodePlace];

const LINES: &[LineRule] = &[LineRule::new(
    ModeFilter::Any,
    When::Is(Field::TrainType, "RT"),
    Product::Tram,
    Label::FirstOf(&[Field::Symbol, Field::Name]),
)];

/// NVV customization unit
#[derive(Debug)]
pub struct Nvv {
    base: BaseAlgorithm,
}

impl NetworkUnit for Nvv {
    const ID: NetworkId = NetworkId::Nvv;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Hafas)
            .with_places(PlaceList::of(&["Kassel", "Baunatal", "Vellmar", "Fulda"]))
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
        })
    }
}

impl NetworkStrategy for Nvv {
    fn base(&self) -> &BaseAlgorithm {
        &self.base
    }

    fn split_station_name(&self, raw: Option<&str>) -> NameParts {
        self.base.split_with(STATION_RULES, raw)
    }

    fn split_address(&self, raw: Option<&str>) -> NameParts {
        self.base.split_with(ADDRESS_RULES, raw)
    }

    fn build_line(&self, fields: &LineFields) -> Line {
        self.base.classify_with(&rules::chain(LINES), fields)
    }
}
