//! Bayern state-wide EFA (Bayerische Eisenbahngesellschaft)

use domain::{Line, Product};
use normalization::{
    BaseAlgorithm, CustomizationError, Field, Label, LineFields, LineRule, NameParts, NameRule,
    NetworkId, NetworkStrategy, NetworkTables, NetworkUnit, Protocol, When,
};

use super::mvv::BAVARIAN_OPERATORS;
use crate::rules::{self, RAIL};

const POI_RULES: &[NameRule] = &[NameRule::ParenPlace];

const LINES: &[LineRule] = &[
    LineRule::train(RAIL, "ag", Product::RegionalTrain),
    LineRule::new(
        RAIL,
        When::Is(Field::TrainName, "Waldbahn"),
        Product::RegionalTrain,
        Label::Prefixed("WBA", Field::TrainNum),
    ),
];

/// Bayern customization unit
#[derive(Debug)]
pub struct Bayern {
    base: BaseAlgorithm,
}

impl NetworkUnit for Bayern {
    const ID: NetworkId = NetworkId::Bayern;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Efa)
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
        })
    }
}

impl NetworkStrategy for Bayern {
    fn base(&self) -> &BaseAlgorithm {
        &self.base
    }

    fn split_poi(&self, raw: Option<&str>) -> NameParts {
        self.base.split_with(POI_RULES, raw)
    }

    fn build_line(&self, fields: &LineFields) -> Line {
        self.base.classify_with(
            &[LINES, BAVARIAN_OPERATORS, rules::COMMON[0], rules::COMMON[1], rules::COMMON[2]],
            fields,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_shared_with_munich() {
        let bayern = Bayern::build().expect("Bayern tables");
        let line = bayern.classify_line(
            &LineFields::new().mode("0").train_name("Bayerische Regiobahn").train_num("79533"),
        );
        assert_eq!(line.label.as_deref(), Some("BRB79533"));
    }

    #[test]
    fn agilis() {
        let bayern = Bayern::build().expect("Bayern tables");
        let line = bayern.classify_line(&LineFields::new().mode("0").train_type("ag").train_num("84155"));
        assert_eq!(line.product, Some(Product::RegionalTrain));
        assert_eq!(line.label.as_deref(), Some("ag84155"));
    }

    #[test]
    fn poi_with_parenthesised_place() {
        let bayern = Bayern::build().expect("Bayern tables");
        assert_eq!(
            bayern.split_poi(Some("Dom St. Peter (Regensburg)")).as_tuple(),
            (Some("Regensburg"), Some("Dom St. Peter"))
        );
        assert_eq!(
            bayern.split_station_name(Some("Regensburg, Hbf")).as_tuple(),
            (Some("Regensburg"), Some("Hbf"))
        );
    }
}
