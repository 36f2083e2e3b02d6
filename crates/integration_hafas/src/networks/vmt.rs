//! Verkehrsverbund Mittelthüringen

use domain::Fare;
use normalization::{
    BaseAlgorithm, CommaOrder, CustomizationError, FareFilter, NameParts, NameRule, NetworkId,
    NetworkStrategy, NetworkTables, NetworkUnit, PlaceList, Protocol,
};

const STATION_RULES: &[NameRule] = &[NameRule::PlacePrefix, NameRule::Comma(CommaOrder::PlaceFirst)];

const DENIED_FARES: &[&str] = &["übertragbar", "abo"];

/// VMT customization unit
#[derive(Debug)]
pub struct Vmt {
    base: BaseAlgorithm,
    fares: FareFilter,
}

impl NetworkUnit for Vmt {
    const ID: NetworkId = NetworkId::Vmt;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Hafas)
            .with_places(PlaceList::of(&["Erfurt", "Jena", "Gera", "Weimar", "Gotha"]))
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
            fares: FareFilter::deny(Self::ID, DENIED_FARES)?,
        })
    }
}

impl NetworkStrategy for Vmt {
    fn base(&self) -> &BaseAlgorithm {
        &self.base
    }

    fn split_station_name(&self, raw: Option<&str>) -> NameParts {
        self.base.split_with(STATION_RULES, raw)
    }

    fn split_poi(&self, raw: Option<&str>) -> NameParts {
        self.base.split_with(STATION_RULES, raw)
    }

    fn hide_fare(&self, fare: &Fare) -> bool {
        self.fares.hides(fare)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transferable_passes_hidden() {
        let vmt = Vmt::build().expect("VMT tables");
        assert!(vmt.hide_fare(&Fare::named("Monatskarte ÜBERTRAGBAR", "EUR", 60.0)));
        assert!(!vmt.hide_fare(&Fare::named("Einzelfahrt", "EUR", 2.3)));
    }

    #[test]
    fn poi_uses_station_rules() {
        let vmt = Vmt::build().expect("VMT tables");
        assert_eq!(
            vmt.split_poi(Some("Weimar Goethehaus")).as_tuple(),
            (Some("Weimar"), Some("Goethehaus"))
        );
    }
}
