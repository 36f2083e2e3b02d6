//! Network strategy contract
//!
//! Every hook has a provided implementation that delegates to the
//! strategy's [`BaseAlgorithm`]; a network overrides only the hooks it needs
//! and calls back into its base for unmatched input.

use std::fmt;

use domain::{Fare, GeoPoint, Line, LineStyle, Location, LocationType, Product};

use crate::base::BaseAlgorithm;
use crate::error::CustomizationError;
use crate::lines::LineFields;
use crate::naming::NameParts;
use crate::network::NetworkId;
use crate::patterns;
use crate::request::{ParameterSet, RequestContext, RequestKind, RequestParameters};
use crate::tables::{NetworkTables, PlaceEntry};

/// Capability interface implemented once per transit network
pub trait NetworkStrategy: Send + Sync + fmt::Debug {
    /// Shared default strategy for this network
    fn base(&self) -> &BaseAlgorithm;

    /// Network identifier
    fn id(&self) -> NetworkId {
        self.base().network()
    }

    /// Split a station display string into place and name
    fn split_station_name(&self, raw: Option<&str>) -> NameParts {
        self.base().split_station_name(raw)
    }

    /// Split a POI display string into place and name
    fn split_poi(&self, raw: Option<&str>) -> NameParts {
        self.base().split_poi(raw)
    }

    /// Split an address display string into place and name
    fn split_address(&self, raw: Option<&str>) -> NameParts {
        self.base().split_address(raw)
    }

    /// Product, label and attributes for raw fields
    ///
    /// Networks override this step; callers use [`Self::classify_line`].
    fn build_line(&self, fields: &LineFields) -> Line {
        self.base().classify_line(fields)
    }

    /// Build a canonical line from raw fields, styled through
    /// [`Self::line_style`]
    fn classify_line(&self, fields: &LineFields) -> Line {
        let line = self.build_line(fields);
        let style = line
            .label
            .as_deref()
            .and_then(|label| self.line_style(line.network.as_deref(), line.product, label));
        line.with_style(style)
    }

    /// Whether a fare should be hidden from the user
    fn hide_fare(&self, fare: &Fare) -> bool {
        self.base().hide_fare(fare)
    }

    /// Add or remove network specific parameters after the base populated
    /// the request
    fn inject_parameters(
        &self,
        _kind: RequestKind,
        _ctx: &RequestContext,
        _params: &mut dyn RequestParameters,
    ) {
    }

    /// Style for a line label
    fn line_style(
        &self,
        network: Option<&str>,
        product: Option<Product>,
        label: &str,
    ) -> Option<LineStyle> {
        self.base().line_style(network, product, label)
    }

    /// Build a location, splitting the display string with the hook that
    /// matches the location type
    fn location(
        &self,
        location_type: LocationType,
        id: Option<&str>,
        coord: Option<GeoPoint>,
        raw_name: Option<&str>,
    ) -> Location {
        let parts = match location_type {
            LocationType::Station => self.split_station_name(raw_name),
            LocationType::Poi => self.split_poi(raw_name),
            LocationType::Address => self.split_address(raw_name),
            LocationType::Coordinate | LocationType::Any => {
                patterns::non_blank(raw_name).map_or_else(NameParts::empty, NameParts::name_only)
            },
        };
        Location::new(
            location_type,
            patterns::non_blank(id).map(str::to_string),
            coord,
            parts.place,
            parts.name,
        )
    }
}

/// Construction contract of a network unit
pub trait NetworkUnit: NetworkStrategy + Sized {
    /// Network served by this unit
    const ID: NetworkId;

    /// Tables shipped with the unit
    fn default_tables() -> NetworkTables;

    /// Build the unit from (possibly extended) tables
    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError>;

    /// Build the unit from its shipped tables
    fn build() -> Result<Self, CustomizationError> {
        Self::with_tables(Self::default_tables())
    }

    /// Build the unit with additional places appended after the shipped
    /// ones
    fn with_extra_places(extra: &[PlaceEntry]) -> Result<Self, CustomizationError> {
        let mut tables = Self::default_tables();
        if let Some(empty) = extra.iter().find(|entry| entry.name.trim().is_empty()) {
            return Err(CustomizationError::invalid_table(
                Self::ID,
                format!("empty place name (aliases: {:?})", empty.aliases),
            ));
        }
        tables.places.extend(extra.iter().cloned());
        Self::with_tables(tables)
    }
}

/// Parameters for a request: base defaults first, then the network's
/// additions and removals
#[must_use]
pub fn build_parameters(
    strategy: &dyn NetworkStrategy,
    kind: RequestKind,
    ctx: &RequestContext,
) -> ParameterSet {
    let mut params = ParameterSet::new();
    strategy.base().populate_parameters(kind, ctx, &mut params);
    strategy.inject_parameters(kind, ctx, &mut params);
    params
}
