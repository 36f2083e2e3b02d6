//! Line rules shared by HAFAS networks
//!
//! HAFAS reports the product class as a bit index and the category
//! abbreviation (`catOut`) as the train type, with the journey number as
//! train number. The class alone is too coarse on some backends, so the
//! category decides first.

use domain::Product;
use normalization::{Field, Label, LineRule, ModeFilter, When};

/// Long distance categories, labelled category plus journey number
pub const LONG_DISTANCE: &[LineRule] = &[
    LineRule::train(ModeFilter::Any, "ICE", Product::HighSpeedTrain),
    LineRule::train(ModeFilter::Any, "IC", Product::HighSpeedTrain),
    LineRule::train(ModeFilter::Any, "EC", Product::HighSpeedTrain),
    LineRule::train(ModeFilter::Any, "ECE", Product::HighSpeedTrain),
    LineRule::train(ModeFilter::Any, "EN", Product::HighSpeedTrain),
    LineRule::train(ModeFilter::Any, "NJ", Product::HighSpeedTrain),
    LineRule::train(ModeFilter::Any, "RJ", Product::HighSpeedTrain),
    LineRule::train(ModeFilter::Any, "RJX", Product::HighSpeedTrain),
    LineRule::train(ModeFilter::Any, "TGV", Product::HighSpeedTrain),
    LineRule::train(ModeFilter::Any, "FLX", Product::HighSpeedTrain),
];

/// Regional categories
pub const REGIONAL: &[LineRule] = &[
    LineRule::train(ModeFilter::Any, "IRE", Product::RegionalTrain),
    LineRule::train(ModeFilter::Any, "RE", Product::RegionalTrain),
    LineRule::train(ModeFilter::Any, "RB", Product::RegionalTrain),
    LineRule::train(ModeFilter::Any, "MEX", Product::RegionalTrain),
];

/// S-Bahn category, labelled by line rather than journey
pub const SUBURBAN: &[LineRule] = &[LineRule::new(
    ModeFilter::Any,
    When::Is(Field::TrainType, "S"),
    Product::SuburbanTrain,
    Label::FirstOf(&[Field::Symbol, Field::Name]),
)];

/// Shared rules in evaluation order
pub const COMMON: [&[LineRule]; 3] = [LONG_DISTANCE, REGIONAL, SUBURBAN];

/// Network rules followed by the shared rules
#[must_use]
pub fn chain<'r>(network: &'r [LineRule]) -> [&'r [LineRule]; 4] {
    [network, COMMON[0], COMMON[1], COMMON[2]]
}
