//! Deutsche Bahn
//!
//! DB station names carry the place first without separator
//! (`"Berlin Hbf"`); where a comma appears it separates a station name from
//! the place it belongs to. POI names use the opposite order.

use domain::{Fare, Line, LineAttribute, Product};
use normalization::{
    BaseAlgorithm, CommaOrder, CustomizationError, FareFilter, Field, Label, LineFields, LineRule,
    ModeFilter, NameParts, NameRule, NetworkId, NetworkStrategy, NetworkTables, NetworkUnit,
    Protocol, RequestContext, RequestKind, RequestParameters, When,
};

use crate::rules;

const STATION_RULES: &[NameRule] = &[NameRule::SingleComma(CommaOrder::NameFirst)];

const POI_RULES: &[NameRule] = &[NameRule::Comma(CommaOrder::PlaceFirst)];

/// Shared with DB-operated regional backends
pub const DB_LINES: &[LineRule] = &[
    LineRule::new(
        ModeFilter::Any,
        When::Any(&[When::Is(Field::TrainType, "SEV"), When::StartsWith(Field::Name, "SEV")]),
        Product::Bus,
        Label::FirstOf(&[Field::Name, Field::TrainType]),
    )
    .with_attributes(&[LineAttribute::ServiceReplacement]),
    LineRule::new(
        ModeFilter::Is("5"),
        When::Is(Field::TrainType, "Bus"),
        Product::Bus,
        Label::StripPrefix(Field::Name, "Bus"),
    ),
    LineRule::new(
        ModeFilter::Is("8"),
        When::Is(Field::TrainType, "STR"),
        Product::Tram,
        Label::StripPrefix(Field::Name, "STR"),
    ),
];

const DENIED_FARES: &[&str] = &["bahncard"];

/// DB customization unit
#[derive(Debug)]
pub struct Db {
    base: BaseAlgorithm,
    fares: FareFilter,
}

impl NetworkUnit for Db {
    const ID: NetworkId = NetworkId::Db;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Hafas)
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
            fares: FareFilter::deny(Self::ID, DENIED_FARES)?,
        })
    }
}

impl NetworkStrategy for Db {
    fn base(&self) -> &BaseAlgorithm {
        &self.base
    }

    fn split_station_name(&self, raw: Option<&str>) -> NameParts {
        self.base.split_with(STATION_RULES, raw)
    }

    fn split_poi(&self, raw: Option<&str>) -> NameParts {
        self.base.split_with(POI_RULES, raw)
    }

    fn build_line(&self, fields: &LineFields) -> Line {
        self.base.classify_with(&rules::chain(DB_LINES), fields)
    }

    fn hide_fare(&self, fare: &Fare) -> bool {
        self.fares.hides(fare)
    }

    fn inject_parameters(
        &self,
        kind: RequestKind,
        _ctx: &RequestContext,
        params: &mut dyn RequestParameters,
    ) {
        if matches!(kind, RequestKind::Departures | RequestKind::Trip) {
            params.set("rtMode", "HYBRID");
        }
    }
}
