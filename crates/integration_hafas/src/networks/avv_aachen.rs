//! Aachener Verkehrsverbund
//!
//! Stops are written either `"Aachen, Bushof"` or with the licence plate
//! code, `"AC Bushof"`; both resolve to Aachen.

use domain::Fare;
use normalization::{
    BaseAlgorithm, CommaOrder, CustomizationError, FareFilter, NameParts, NameRule, NetworkId,
    NetworkStrategy, NetworkTables, NetworkUnit, PlaceList, Protocol,
};

const STATION_RULES: &[NameRule] = &[NameRule::Comma(CommaOrder::PlaceFirst), NameRule::PlacePrefix];

const DENIED_FARES: &[&str] = &["abo", "jobticket"];

/// AVV Aachen customization unit
#[derive(Debug)]
pub struct AvvAachen {
    base: BaseAlgorithm,
    fares: FareFilter,
}

impl NetworkUnit for AvvAachen {
    const ID: NetworkId = NetworkId::AvvAachen;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Hafas).with_places(
            PlaceList::of(&["Aachen", "Düren", "Heinsberg", "Eschweiler", "Stolberg (Rhld.)"])
                .alias("Aachen", "AC")
                .alias("Düren", "DN")
                .alias("Heinsberg", "HS")
                .alias("Stolberg (Rhld.)", "Stolberg"),
        )
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
            fares: FareFilter::deny(Self::ID, DENIED_FARES)?,
        })
    }
}

impl NetworkStrategy for AvvAachen {
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

    fn avv() -> AvvAachen {
        AvvAachen::build().expect("AVV tables")
    }

    #[test]
    fn comma_and_prefix_agree() {
        let avv = avv();
        assert_eq!(
            avv.split_station_name(Some("Aachen, Hauptbahnhof")).as_tuple(),
            (Some("Aachen"), Some("Hauptbahnhof"))
        );
        assert_eq!(
            avv.split_station_name(Some("AC Hauptbahnhof")).as_tuple(),
            (Some("Aachen"), Some("Hauptbahnhof"))
        );
        assert_eq!(
            avv.split_station_name(Some("AC, Hauptbahnhof")).as_tuple(),
            (Some("Aachen"), Some("Hauptbahnhof"))
        );
    }

    #[test]
    fn other_plates() {
        assert_eq!(
            avv().split_station_name(Some("DN Kaiserplatz")).as_tuple(),
            (Some("Düren"), Some("Kaiserplatz"))
        );
        assert_eq!(
            avv().split_station_name(Some("Stolberg Mühle")).as_tuple(),
            (Some("Stolberg (Rhld.)"), Some("Mühle"))
        );
    }

    #[test]
    fn job_tickets_hidden() {
        assert!(avv().hide_fare(&Fare::named("JobTicket", "EUR", 50.0)));
    }
}
