//! Verkehrsverbund Großraum Nürnberg

use domain::{Line, LineStyle, Product};
use normalization::{
    BaseAlgorithm, CommaOrder, CustomizationError, LineFields, NameParts, NameRule, NetworkId,
    NetworkStrategy, NetworkTables, NetworkUnit, PlaceList, Protocol, RequestContext, RequestKind,
    RequestParameters, StyleTable,
};

use crate::rules;

const PLACES: &[&str] = &["Nürnberg", "Fürth", "Erlangen", "Schwabach", "Bamberg"];

const STATION_RULES: &[NameRule] = &[NameRule::PlacePrefix, NameRule::Comma(CommaOrder::PlaceFirst)];

const SUBWAY_STYLES: &[(&str, LineStyle)] = &[
    ("U1", LineStyle::rgb(0x00_6e_b6, 0xff_ff_ff)),
    ("U2", LineStyle::rgb(0xe2_00_1a, 0xff_ff_ff)),
    ("U3", LineStyle::rgb(0x00_9e_8e, 0xff_ff_ff)),
];

/// VGN customization unit
#[derive(Debug)]
pub struct Vgn {
    base: BaseAlgorithm,
}

impl NetworkUnit for Vgn {
    const ID: NetworkId = NetworkId::Vgn;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Efa)
            .with_places(PlaceList::of(PLACES))
            .with_styles(StyleTable::default().with_product_entries(Product::Subway, SUBWAY_STYLES))
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
        })
    }
}

impl NetworkStrategy for Vgn {
    fn base(&self) -> &BaseAlgorithm {
        &self.base
    }

    fn split_station_name(&self, raw: Option<&str>) -> NameParts {
        self.base.split_with(STATION_RULES, raw)
    }

    fn build_line(&self, fields: &LineFields) -> Line {
        self.base.classify_with(&rules::COMMON, fields)
    }

    fn inject_parameters(
        &self,
        kind: RequestKind,
        _ctx: &RequestContext,
        params: &mut dyn RequestParameters,
    ) {
        if kind == RequestKind::Trip {
            params.set("itdLPxx_showTariffLevel", "1");
        }
    }
}
