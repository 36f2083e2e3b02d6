//! Canonical transit model
//!
//! Value types produced by every network strategy regardless of which upstream
//! backend a record came from: locations, lines, products, fares and line
//! styles. This crate carries no behavior beyond construction and validation.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
