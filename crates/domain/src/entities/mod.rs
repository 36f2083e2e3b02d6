//! Entities - canonical records created per upstream response

mod fare;
mod line;
mod line_style;
mod location;

pub use fare::{Fare, FareType};
pub use line::{Line, LineAttribute};
pub use line_style::{LineStyle, Shape};
pub use location::{Location, LocationType};
