//! Schweizerische Bundesbahnen
//!
//! Swiss HAFAS backends number their product classes differently from the
//! German ones.

use domain::{Fare, Line, Product};
use normalization::{
    BaseAlgorithm, CommaOrder, CustomizationError, FareFilter, Field, Label, LineFields, LineRule,
    ModeFilter, NameParts, NameRule, NetworkId, NetworkStrategy, NetworkTables, NetworkUnit,
    PlaceList, ProductsMap, Protocol, When,
};

use crate::rules;

/// Swiss product classes by bit index
pub const SWISS_PRODUCTS: [Option<Product>; 10] = [
    Some(Product::HighSpeedTrain), // 1 ICE/TGV/RJ
    Some(Product::HighSpeedTrain), // 2 EC/IC
    Some(Product::RegionalTrain),  // 4 IR
    Some(Product::RegionalTrain),  // 8 RE/R
    Some(Product::Ferry),          // 16 ship
    Some(Product::SuburbanTrain),  // 32 S-Bahn
    Some(Product::Bus),            // 64 bus
    Some(Product::Cablecar),       // 128 cableway
    None,                          // 256 special
    Some(Product::Tram),           // 512 tram
];

const STATION_RULES: &[NameRule] = &[NameRule::PlacePrefix, NameRule::Comma(CommaOrder::PlaceFirst)];

/// Swiss categories, shared with ZVV
pub const SWISS_LINES: &[LineRule] = &[
    LineRule::train(ModeFilter::Any, "IR", Product::RegionalTrain),
    LineRule::train(ModeFilter::Any, "PE", Product::HighSpeedTrain),
    LineRule::new(
        ModeFilter::Any,
        When::OneOf(Field::TrainType, &["BAT", "BAV", "FAE"]),
        Product::Ferry,
        Label::FirstOf(&[Field::Symbol, Field::TrainType]),
    ),
    LineRule::new(
        ModeFilter::Any,
        When::OneOf(Field::TrainType, &["GB", "SL", "LB", "FUN", "PB"]),
        Product::Cablecar,
        Label::FirstOf(&[Field::Name, Field::TrainType]),
    ),
];

const DENIED_FARES: &[&str] = &["halbtax", "generalabonnement", "gleis 7"];

/// SBB customization unit
#[derive(Debug)]
pub struct Sbb {
    base: BaseAlgorithm,
    fares: FareFilter,
}

impl NetworkUnit for Sbb {
    const ID: NetworkId = NetworkId::Sbb;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Hafas)
            .with_products(ProductsMap::new(SWISS_PRODUCTS))
            .with_places(
                PlaceList::of(&["Zürich", "Bern", "Basel", "Genève", "Lausanne", "Luzern"])
                    .alias("Genève", "Genf"),
            )
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
            fares: FareFilter::deny(Self::ID, DENIED_FARES)?,
        })
    }
}

impl NetworkStrategy for Sbb {
    fn base(&self) -> &BaseAlgorithm {
        &self.base
    }

    fn split_station_name(&self, raw: Option<&str>) -> NameParts {
        self.base.split_with(STATION_RULES, raw)
    }

    fn build_line(&self, fields: &LineFields) -> Line {
        self.base.classify_with(&rules::chain(SWISS_LINES), fields)
    }

    fn hide_fare(&self, fare: &Fare) -> bool {
        self.fares.hides(fare)
    }
}

#[cfg(test)]
mod tests {
    use normalization::{RequestContext, RequestKind, build_parameters};

    use super::*;

    fn sbb() -> Sbb {
        Sbb::build().expect("SBB tables")
    }

    #[test]
    fn swiss_classes() {
        let sbb = sbb();
        assert_eq!(sbb.classify_line(&LineFields::new().mode("5").symbol("S3")).product, Some(Product::SuburbanTrain));
        assert_eq!(sbb.classify_line(&LineFields::new().mode("7")).product, Some(Product::Cablecar));
        assert_eq!(sbb.classify_line(&LineFields::new().mode("8")).product, None);
    }

    #[test]
    fn interregio_and_gondola() {
        let sbb = sbb();
        let ir = sbb.classify_line(&LineFields::new().mode("2").train_type("IR").train_num("2519"));
        assert_eq!(ir.label.as_deref(), Some("IR2519"));

        let gondola = sbb.classify_line(&LineFields::new().mode("7").train_type("GB").name("Männlichen"));
        assert_eq!(gondola.product, Some(Product::Cablecar));
        assert_eq!(gondola.label.as_deref(), Some("Männlichen"));
    }

    #[test]
    fn fares_for_pass_holders_hidden() {
        let sbb = sbb();
        assert!(sbb.hide_fare(&Fare::named("Halbtax 2. Klasse", "CHF", 12.0)));
        assert!(!sbb.hide_fare(&Fare::named("Einzelbillett 2. Klasse", "CHF", 24.0)));
    }

    #[test]
    fn trip_mask_uses_swiss_classes() {
        let ctx = RequestContext::with_products([Product::Tram, Product::Ferry]);
        let params = build_parameters(&sbb(), RequestKind::Trip, &ctx);
        assert_eq!(params.get("jnyFltrL.prod"), Some("528"));
    }

    #[test]
    fn geneva_alias() {
        assert_eq!(
            sbb().split_station_name(Some("Genf Cornavin")).as_tuple(),
            (Some("Genève"), Some("Cornavin"))
        );
    }
}
