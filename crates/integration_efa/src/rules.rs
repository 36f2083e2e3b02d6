//! Line rules shared by EFA networks
//!
//! EFA reports trains under several rail `motType`s (regional, national,
//! international, high speed) and names the train category in `trainType`.
//! Networks put their own rules in front of these.

use domain::{LineAttribute, Product};
use normalization::{Field, Label, LineRule, ModeFilter, When};

/// Every rail `motType`
pub const RAIL: ModeFilter = ModeFilter::OneOf(&["0", "13", "14", "15", "16", "18"]);

/// Long distance train categories
pub const LONG_DISTANCE: &[LineRule] = &[
    LineRule::train(RAIL, "ICE", Product::HighSpeedTrain),
    LineRule::train(RAIL, "IC", Product::HighSpeedTrain),
    LineRule::train(RAIL, "EC", Product::HighSpeedTrain),
    LineRule::train(RAIL, "ECE", Product::HighSpeedTrain),
    LineRule::train(RAIL, "EN", Product::HighSpeedTrain),
    LineRule::train(RAIL, "NJ", Product::HighSpeedTrain),
    LineRule::train(RAIL, "RJ", Product::HighSpeedTrain),
    LineRule::train(RAIL, "RJX", Product::HighSpeedTrain),
    LineRule::train(RAIL, "TGV", Product::HighSpeedTrain),
    LineRule::train(RAIL, "THA", Product::HighSpeedTrain),
    LineRule::train(RAIL, "FLX", Product::HighSpeedTrain),
    LineRule::new(
        RAIL,
        When::Is(Field::TrainName, "InterCityExpress"),
        Product::HighSpeedTrain,
        Label::Prefixed("ICE", Field::TrainNum),
    ),
    LineRule::new(
        RAIL,
        When::Is(Field::TrainName, "InterCity"),
        Product::HighSpeedTrain,
        Label::Prefixed("IC", Field::TrainNum),
    ),
];

/// Regional train categories
pub const REGIONAL: &[LineRule] = &[
    LineRule::train(RAIL, "RE", Product::RegionalTrain),
    LineRule::train(RAIL, "RB", Product::RegionalTrain),
    LineRule::train(RAIL, "IRE", Product::RegionalTrain),
    LineRule::train(RAIL, "MEX", Product::RegionalTrain),
    LineRule::train(RAIL, "R", Product::RegionalTrain),
    LineRule::train(RAIL, "D", Product::RegionalTrain),
];

/// S-Bahn reported on a rail `motType`, and rail replacement buses
pub const SUBURBAN_AND_REPLACEMENT: &[LineRule] = &[
    LineRule::new(
        RAIL,
        When::Is(Field::TrainName, "S-Bahn"),
        Product::SuburbanTrain,
        Label::FirstOf(&[Field::Symbol, Field::Name]),
    ),
    LineRule::new(
        ModeFilter::Any,
        When::Any(&[
            When::Is(Field::TrainType, "SEV"),
            When::Is(Field::TrainName, "Schienenersatzverkehr"),
            When::StartsWith(Field::Symbol, "SEV"),
        ]),
        Product::Bus,
        Label::FirstOf(&[Field::Symbol, Field::TrainType]),
    )
    .with_attributes(&[LineAttribute::ServiceReplacement]),
];

/// Shared rules in evaluation order
pub const COMMON: [&[LineRule]; 3] = [LONG_DISTANCE, REGIONAL, SUBURBAN_AND_REPLACEMENT];

/// Network rules followed by the shared rules
#[must_use]
pub fn chain<'r>(network: &'r [LineRule]) -> [&'r [LineRule]; 4] {
    [network, COMMON[0], COMMON[1], COMMON[2]]
}

#[cfg(test)]
mod tests {
    use normalization::LineFields;

    use super::*;

    fn classify(fields: &LineFields) -> Option<(Option<Product>, Option<String>)> {
        LineRule::first_match(&COMMON, fields).map(|rule| (rule.product, rule.label.render(fields)))
    }

    #[test]
    fn intercity_express_by_type() {
        let fields = LineFields::new().mode("0").train_type("ICE").train_num("123");
        assert_eq!(
            classify(&fields),
            Some((Some(Product::HighSpeedTrain), Some("ICE123".to_string())))
        );
    }

    #[test]
    fn intercity_by_name_on_national_mode() {
        let fields = LineFields::new().mode("14").train_name("InterCity").train_num("2013");
        assert_eq!(
            classify(&fields),
            Some((Some(Product::HighSpeedTrain), Some("IC2013".to_string())))
        );
    }

    #[test]
    fn regional_express() {
        let fields = LineFields::new().mode("13").train_type("RE").train_num("4");
        assert_eq!(
            classify(&fields),
            Some((Some(Product::RegionalTrain), Some("RE4".to_string())))
        );
    }

    #[test]
    fn replacement_bus_on_any_mode() {
        let fields = LineFields::new().mode("17").symbol("SEV S1");
        let rule = LineRule::first_match(&COMMON, &fields).expect("rule");
        assert_eq!(rule.product, Some(Product::Bus));
        assert_eq!(rule.attributes, &[LineAttribute::ServiceReplacement]);
    }

    #[test]
    fn train_type_ignored_off_rail() {
        let fields = LineFields::new().mode("5").train_type("ICE").train_num("1");
        assert!(classify(&fields).is_none());
    }

    #[test]
    fn empty_rail_fields_match_nothing() {
        assert!(classify(&LineFields::new().mode("0")).is_none());
    }
}
