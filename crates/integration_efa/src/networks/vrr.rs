//! Verkehrsverbund Rhein-Ruhr
//!
//! Wuppertal's Schwebebahn, Dortmund's H-Bahn and the Düsseldorf airport
//! SkyTrain all arrive as `motType` 11 ("other"). They are classified as
//! cable cars here, and trip requests for cable cars have to opt into
//! `motType` 11 explicitly.

use domain::{Fare, Line, LineAttribute, LineStyle, Product};
use normalization::{
    BaseAlgorithm, CommaOrder, CustomizationError, FareFilter, Field, Label, LineFields, LineRule,
    ModeFilter, NameParts, NameRule, NetworkId, NetworkStrategy, NetworkTables, NetworkUnit,
    PlaceList, Protocol, RequestContext, RequestKind, RequestParameters, StyleTable, When,
};

use crate::rules;

const PLACES: &[&str] = &[
    "Bochum",
    "Bottrop",
    "Dortmund",
    "Duisburg",
    "Düsseldorf",
    "Essen",
    "Gelsenkirchen",
    "Hagen",
    "Herne",
    "Krefeld",
    "Mönchengladbach",
    "Mülheim an der Ruhr",
    "Neuss",
    "Oberhausen",
    "Remscheid",
    "Solingen",
    "Wuppertal",
];

const STATION_RULES: &[NameRule] = &[NameRule::PlacePrefix, NameRule::Comma(CommaOrder::PlaceFirst)];

const OTHER: ModeFilter = ModeFilter::Is("11");

const LINES: &[LineRule] = &[
    LineRule::new(
        OTHER,
        When::Any(&[
            When::StartsWith(Field::Name, "Schwebebahn"),
            When::Is(Field::TrainName, "Schwebebahn"),
        ]),
        Product::Cablecar,
        Label::Literal("Schwebebahn"),
    ),
    LineRule::new(
        OTHER,
        When::Any(&[
            When::StartsWith(Field::Name, "H-Bahn"),
            When::Is(Field::TrainName, "H-Bahn"),
        ]),
        Product::Cablecar,
        Label::FirstOf(&[Field::Symbol, Field::Name]),
    ),
    LineRule::new(
        OTHER,
        When::Is(Field::Name, "SkyTrain"),
        Product::Cablecar,
        Label::Literal("SkyTrain"),
    )
    .with_attributes(&[LineAttribute::LineAirport]),
];

const DENIED_FARES: &[&str] = &["abo", "bahncard", "zusatzticket"];

const STYLES: &[(&str, LineStyle)] = &[
    ("Schwebebahn", LineStyle::rgb(0x00_52_9f, 0xff_ff_ff)),
    ("U18", LineStyle::rgb(0x00_82_c8, 0xff_ff_ff)),
    ("Rheinbahn|U79", LineStyle::rgb(0x00_8d_3c, 0xff_ff_ff)),
    ("DSW21|U47", LineStyle::rgb(0xe3_00_0b, 0xff_ff_ff)),
];

const SUBURBAN_STYLES: &[(&str, LineStyle)] = &[
    ("S1", LineStyle::rgb(0x00_8d_4f, 0xff_ff_ff)),
    ("S2", LineStyle::rgb(0x00_8d_4f, 0xff_ff_ff)),
    ("S6", LineStyle::rgb(0x00_8d_4f, 0xff_ff_ff)),
    ("S9", LineStyle::rgb(0x00_8d_4f, 0xff_ff_ff)),
];

/// VRR customization unit
#[derive(Debug)]
pub struct Vrr {
    base: BaseAlgorithm,
    fares: FareFilter,
}

impl NetworkUnit for Vrr {
    const ID: NetworkId = NetworkId::Vrr;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Efa)
            .with_places(PlaceList::of(PLACES).alias("Mülheim an der Ruhr", "Mülheim"))
            .with_styles(
                StyleTable::from_entries(STYLES)
                    .with_product_entries(Product::SuburbanTrain, SUBURBAN_STYLES),
            )
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
            fares: FareFilter::deny(Self::ID, DENIED_FARES)?,
        })
    }
}

impl NetworkStrategy for Vrr {
    fn base(&self) -> &BaseAlgorithm {
        &self.base
    }

    fn split_station_name(&self, raw: Option<&str>) -> NameParts {
        self.base.split_with(STATION_RULES, raw)
    }

    fn build_line(&self, fields: &LineFields) -> Line {
        self.base.classify_with(&rules::chain(LINES), fields)
    }

    fn hide_fare(&self, fare: &Fare) -> bool {
        self.fares.hides(fare)
    }

    fn inject_parameters(
        &self,
        kind: RequestKind,
        ctx: &RequestContext,
        params: &mut dyn RequestParameters,
    ) {
        let wants_cablecar = ctx
            .products
            .as_ref()
            .is_some_and(|products| products.contains(&Product::Cablecar));
        if kind == RequestKind::Trip && wants_cablecar {
            params.set("inclMOT_11", "on");
        }
    }
}

#[cfg(test)]
mod tests {
    use normalization::build_parameters;

    use super::*;

    fn vrr() -> Vrr {
        Vrr::build().expect("VRR tables")
    }

    #[test]
    fn place_prefix_and_alias() {
        let vrr = vrr();
        assert_eq!(
            vrr.split_station_name(Some("Essen Hauptbahnhof")).as_tuple(),
            (Some("Essen"), Some("Hauptbahnhof"))
        );
        assert_eq!(
            vrr.split_station_name(Some("Mülheim Hbf")).as_tuple(),
            (Some("Mülheim an der Ruhr"), Some("Hbf"))
        );
        assert_eq!(
            vrr.split_station_name(Some("Mülheim an der Ruhr Hbf")).as_tuple(),
            (Some("Mülheim an der Ruhr"), Some("Hbf"))
        );
    }

    #[test]
    fn unknown_place_uses_comma() {
        assert_eq!(
            vrr().split_station_name(Some("Marl, Mitte")).as_tuple(),
            (Some("Marl"), Some("Mitte"))
        );
    }

    #[test]
    fn schwebebahn_is_cablecar() {
        let line = vrr().classify_line(&LineFields::new().mode("11").name("Schwebebahn 60"));
        assert_eq!(line.product, Some(Product::Cablecar));
        assert_eq!(line.label.as_deref(), Some("Schwebebahn"));
        assert!(line.style.is_some());
    }

    #[test]
    fn skytrain_serves_airport() {
        let line = vrr().classify_line(&LineFields::new().mode("11").name("SkyTrain"));
        assert!(line.has_attribute(LineAttribute::LineAirport));
    }

    #[test]
    fn other_mode_without_rule_stays_unclassified() {
        let line = vrr().classify_line(&LineFields::new().mode("11").symbol("X"));
        assert_eq!(line.product, None);
        assert_eq!(line.label.as_deref(), Some("X"));
    }

    #[test]
    fn operator_namespaced_style() {
        let vrr = vrr();
        let line = vrr.classify_line(&LineFields::new().mode("4").network("Rheinbahn").symbol("U79"));
        assert_eq!(line.style, Some(LineStyle::rgb(0x00_8d_3c, 0xff_ff_ff)));
        let other = vrr.classify_line(&LineFields::new().mode("4").network("DVG").symbol("U79"));
        assert_eq!(other.style, None);
    }

    #[test]
    fn fares_hidden_case_insensitively() {
        let vrr = vrr();
        assert!(vrr.hide_fare(&Fare::named("ABO", "EUR", 80.0)));
        assert!(vrr.hide_fare(&Fare::named("abo", "EUR", 80.0)));
        assert!(vrr.hide_fare(&Fare::named("BahnCard 25", "EUR", 2.0)));
        assert!(!vrr.hide_fare(&Fare::named("EinzelTicket A", "EUR", 3.3)));
    }

    #[test]
    fn cablecar_trips_include_other_mode() {
        let vrr = vrr();
        let ctx = RequestContext::with_products([Product::Cablecar]);
        let params = build_parameters(&vrr, RequestKind::Trip, &ctx);
        assert_eq!(params.get("inclMOT_11"), Some("on"));
        assert_eq!(params.get("inclMOT_8"), Some("on"));

        let all = build_parameters(&vrr, RequestKind::Trip, &RequestContext::default());
        assert!(!all.contains("inclMOT_11"));
        let departures = build_parameters(&vrr, RequestKind::Departures, &ctx);
        assert!(!departures.contains("inclMOT_11"));
    }
}
