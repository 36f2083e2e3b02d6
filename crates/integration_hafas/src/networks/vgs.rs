//! Saarländischer Verkehrsverbund

use domain::{Line, LineStyle, Product};
use normalization::{
    BaseAlgorithm, CommaOrder, CustomizationError, Field, Label, LineFields, LineRule, ModeFilter,
    NameParts, NameRule, NetworkId, NetworkStrategy, NetworkTables, NetworkUnit, PlaceList, Protocol,
    StyleTable, When,
};

use crate::rules;

const STATION_RULES: &[NameRule] = &[NameRule::PlacePrefix, NameRule::Comma(CommaOrder::PlaceFirst)];

const LINES: &[LineRule] = &[LineRule::new(
    ModeFilter::Any,
    When::Any(&[When::StartsWith(Field::Name, "Saarbahn"), When::Is(Field::TrainType, "Saarbahn")]),
    Product::Tram,
    Label::Literal("S1"),
)];

/// VGS customization unit
#[derive(Debug)]
pub struct Vgs {
    base: BaseAlgorithm,
}

impl NetworkUnit for Vgs {
    const ID: NetworkId = NetworkId::Vgs;

    fn default_tables() -> NetworkTables {
        NetworkTables::for_protocol(Protocol::Hafas)
            .with_places(PlaceList::of(&["Saarbrücken", "Völklingen", "Saarlouis", "Neunkirchen"]))
            .with_styles(
                StyleTable::default()
                    .with_product_entries(Product::Tram, &[("S1", LineStyle::rgb(0xe3_00_0b, 0xff_ff_ff))]),
            )
    }

    fn with_tables(tables: NetworkTables) -> Result<Self, CustomizationError> {
        Ok(Self {
            base: BaseAlgorithm::new(Self::ID, tables),
        })
    }
}

impl NetworkStrategy for Vgs {
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
    fn saarbahn_is_tram_s1() {
        let vgs = Vgs::build().expect("VGS tables");
        let line = vgs.classify_line(&LineFields::new().mode("4").name("Saarbahn S1"));
        assert_eq!(line.product, Some(Product::Tram));
        assert_eq!(line.label.as_deref(), Some("S1"));
        assert!(line.style.is_some());
    }

    #[test]
    fn suburban_s1_has_no_tram_style() {
        let vgs = Vgs::build().expect("VGS tables");
        let line = vgs.classify_line(&LineFields::new().mode("4").train_type("S").symbol("S1"));
        assert_eq!(line.product, Some(Product::SuburbanTrain));
        assert!(line.style.is_none());
    }
}
