//! Value Objects - Immutable, identity-less transit primitives

mod color;
mod geo_point;
mod product;

pub use color::Color;
pub use geo_point::GeoPoint;
pub use product::Product;
