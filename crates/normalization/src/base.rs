//! Base normalization algorithm
//!
//! Default behavior of every hook. Each network strategy owns one
//! [`BaseAlgorithm`] built from its tables and delegates to it explicitly
//! whenever none of its own rules apply.

use domain::{Fare, Line, LineAttribute, LineStyle, Product};
use tracing::debug;

use crate::lines::{Field, LineFields, LineRule};
use crate::naming::{NameParts, NameRule, Resolution};
use crate::network::{NetworkId, Protocol};
use crate::patterns;
use crate::request::{RequestContext, RequestKind, RequestParameters};
use crate::tables::NetworkTables;

/// Shared default strategy, parameterised by protocol family and tables
#[derive(Debug, Clone)]
pub struct BaseAlgorithm {
    network: NetworkId,
    protocol: Protocol,
    tables: NetworkTables,
}

impl BaseAlgorithm {
    /// Create the base for a network
    #[must_use]
    pub fn new(network: NetworkId, tables: NetworkTables) -> Self {
        Self {
            network,
            protocol: network.protocol(),
            tables,
        }
    }

    /// Network this base belongs to
    #[must_use]
    pub const fn network(&self) -> NetworkId {
        self.network
    }

    /// Protocol family
    #[must_use]
    pub const fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Static tables
    #[must_use]
    pub const fn tables(&self) -> &NetworkTables {
        &self.tables
    }

    // --- Name decomposition ---

    /// Default split: first top-level comma as `(place, name)`, otherwise
    /// the whole string is the name
    #[must_use]
    pub fn split_default(&self, raw: Option<&str>) -> NameParts {
        let Some(s) = patterns::non_blank(raw) else {
            return NameParts::empty();
        };
        match patterns::first_top_level_comma(s) {
            Some((place, name)) => NameParts::new(Some(place), Some(name)),
            None => NameParts::name_only(s),
        }
    }

    /// Run network rules, falling back to [`Self::split_default`] on
    /// whatever input remains after suffix stripping
    #[must_use]
    pub fn split_with(&self, rules: &[NameRule], raw: Option<&str>) -> NameParts {
        let Some(s) = patterns::non_blank(raw) else {
            return NameParts::empty();
        };
        match NameRule::resolve(rules, &self.tables.places, s) {
            Resolution::Split(parts) => parts,
            Resolution::Unmatched(rest) => self.split_default(Some(rest)),
        }
    }

    /// Default station split
    #[must_use]
    pub fn split_station_name(&self, raw: Option<&str>) -> NameParts {
        self.split_default(raw)
    }

    /// Default POI split
    #[must_use]
    pub fn split_poi(&self, raw: Option<&str>) -> NameParts {
        self.split_default(raw)
    }

    /// Default address split
    #[must_use]
    pub fn split_address(&self, raw: Option<&str>) -> NameParts {
        self.split_default(raw)
    }

    // --- Line classification ---

    /// Generic constructor: product from the products map at the mode code
    /// index, label from symbol or name
    #[must_use]
    pub fn classify_line(&self, fields: &LineFields) -> Line {
        let product = self.tables.products.get(fields.mode_code());
        let label = fields
            .get(Field::Symbol)
            .or_else(|| fields.get(Field::Name))
            .map(str::to_string);
        debug!(
            network = %self.network,
            mode = ?fields.mode_code(),
            ?product,
            ?label,
            "Line classified by base algorithm"
        );
        self.new_line(fields, product, label, &[])
    }

    /// Evaluate rule sets in order, falling back to [`Self::classify_line`]
    #[must_use]
    pub fn classify_with(&self, rule_sets: &[&[LineRule]], fields: &LineFields) -> Line {
        match LineRule::first_match(rule_sets, fields) {
            Some(rule) => {
                self.new_line(fields, rule.product, rule.label.render(fields), rule.attributes)
            },
            None => self.classify_line(fields),
        }
    }

    /// Assemble a line and attach its style
    #[must_use]
    pub fn new_line(
        &self,
        fields: &LineFields,
        product: Option<Product>,
        label: Option<String>,
        attributes: &[LineAttribute],
    ) -> Line {
        let network = patterns::non_blank(fields.network.as_deref());
        let style = label
            .as_deref()
            .and_then(|label| self.line_style(network, product, label));
        Line::new(
            fields.id.clone(),
            network.map(str::to_string),
            product,
            label,
        )
        .with_name(fields.get(Field::LongName).map(str::to_string))
        .with_style(style)
        .with_attributes(attributes.iter().copied())
    }

    /// Style table lookup
    #[must_use]
    pub fn line_style(
        &self,
        network: Option<&str>,
        product: Option<Product>,
        label: &str,
    ) -> Option<LineStyle> {
        self.tables.styles.lookup(network, product, label)
    }

    // --- Fares ---

    /// Default fare visibility: never hide
    #[must_use]
    pub const fn hide_fare(&self, _fare: &Fare) -> bool {
        false
    }

    // --- Request parameters ---

    /// Populate the protocol's default parameters for a request
    pub fn populate_parameters(
        &self,
        kind: RequestKind,
        ctx: &RequestContext,
        params: &mut dyn RequestParameters,
    ) {
        match self.protocol {
            Protocol::Efa => self.populate_efa(kind, ctx, params),
            Protocol::Hafas => self.populate_hafas(kind, ctx, params),
        }
    }

    fn populate_efa(&self, kind: RequestKind, ctx: &RequestContext, params: &mut dyn RequestParameters) {
        params.set("outputFormat", "XML");
        params.set("language", &ctx.language);
        params.set("coordOutputFormat", "WGS84[DD.DDDDD]");
        params.set("stateless", "1");
        match kind {
            RequestKind::StopFinder => {
                params.set("locationServerActive", "1");
                params.set("type_sf", "any");
            },
            RequestKind::Nearby => {
                params.set("coordListOutputFormat", "STRING");
                params.set("max", "50");
                params.set("inclFilter", "1");
                params.set("type_1", "STOP");
                params.set("radius_1", "1320");
            },
            RequestKind::Departures => {
                params.set("mode", "direct");
                params.set("useRealtime", "1");
                params.set("mergeDep", "1");
                params.set("useAllStops", "1");
            },
            RequestKind::Trip => {
                params.set("sessionID", "0");
                params.set("requestID", "0");
                params.set("ptOptionsActive", "1");
                params.set("itOptionsActive", "1");
                params.set("changeSpeed", "normal");
                params.set("useRealtime", "1");
                if let Some(products) = &ctx.products {
                    params.set("includedMeans", "checkbox");
                    for code in self.tables.products.codes_for(products) {
                        params.set(&format!("inclMOT_{code}"), "on");
                    }
                }
            },
        }
    }

    fn populate_hafas(&self, kind: RequestKind, ctx: &RequestContext, params: &mut dyn RequestParameters) {
        params.set("lang", &ctx.language);
        params.set("ver", "1.34");
        match kind {
            RequestKind::StopFinder => {
                params.set("type", "ALL");
                params.set("maxLoc", "50");
            },
            RequestKind::Nearby => {
                params.set("type", "S");
                params.set("maxLoc", "50");
                params.set("getPOIs", "false");
            },
            RequestKind::Departures => {
                params.set("type", "DEP");
                params.set("stbFltrEquiv", "false");
                params.set("maxJny", "100");
            },
            RequestKind::Trip => {
                params.set("getPasslist", "false");
                params.set("getPolyline", "false");
                params.set("maxChg", "-1");
                let mask = match &ctx.products {
                    Some(products) => product_mask(self.tables.products.codes_for(products)),
                    None => product_mask(self.tables.products.classified_codes()),
                };
                params.set("jnyFltrL.prod", &mask.to_string());
            },
        }
    }
}

/// HAFAS product class bitmask from bit indices
fn product_mask(codes: impl Iterator<Item = usize>) -> u64 {
    codes
        .filter(|code| *code < 64)
        .fold(0, |mask, code| mask | (1 << code))
}
