//! Ingolstädter Verkehrsgesellschaft

use domain::{Line, Product};
use normalization::{
    BaseAlgorithm, CommaOrder, CustomizationError, Field, Label, LineFields, LineRule, ModeFilter,
    NameParts, NameRule, NetworkId, NetworkStrategy, NetworkTables, NetworkUnit, PlaceList, Protocol,
    When,
};

use crate::rules;

const STATION_RULES: &[NameRule] = &[
    NameRule::StripSuffix(" (Ingolstadt)"),
    NameRule::PlacePrefix,
    NameRule::Comma(CommaOrder::PlaceFirst),
];

const LINES: &[LineRule] = &[
    LineRule::new(
        ModeFilter::Is("5"),
        When::StartsWith(Field::Name, "Bus "),
        Product::Bus,
        Label::StripPrefix(Field::Name, "Bus "),
    ),
    LineRule::new(
        ModeFilter::Is("5"),
        When::StartsWith(Field::Name, "N"),
        Product::Bus,
        Label::Field(Field::Name),
    ),
];

/// INVG customization unit
#[derive(Debug)]
pub struct Invg {
    base: BaseAlgorithm,
}

impl NetworkUnit for Invg {
    const ID: NetworkId = NetworkId::Invg;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Hafas)
            .with_places(PlaceList::of(&["Ingolstadt", "Gaimersheim", "Manching"]))
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
        })
    }
}

impl NetworkStrategy for Invg {
    fn base(&self) -> &BaseAlgorithm {
        &self.base
    }

    fn split_station_name(&self, raw: Option<&str>) -> NameParts {
        self.base.split_with(STATION_RULES, raw)
    }

    fn build_line(&self, fields: &LineFields) -> Line {
        self.base.classify_with(&rules::chain(LINES), fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_suffix_then_prefix() {
        let invg = Invg::build().expect("INVG tables");
        assert_eq!(
            invg.split_station_name(Some("Ingolstadt Nordbahnhof (Ingolstadt)")).as_tuple(),
            (Some("Ingolstadt"), Some("Nordbahnhof"))
        );
        assert_eq!(
            invg.split_station_name(Some("Rathausplatz (Ingolstadt)")).as_tuple(),
            (None, Some("Rathausplatz"))
        );
    }

    #[test]
    fn bus_labels() {
        let invg = Invg::build().expect("INVG tables");
        assert_eq!(
            invg.classify_line(&LineFields::new().mode("5").name("Bus 10")).label.as_deref(),
            Some("10")
        );
        assert_eq!(
            invg.classify_line(&LineFields::new().mode("5").name("N9")).label.as_deref(),
            Some("N9")
        );
    }
}
