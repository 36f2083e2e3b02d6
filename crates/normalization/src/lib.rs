//! Provider customization layer
//!
//! Turns already-decoded upstream fields (display strings, raw mode codes,
//! fare names) into the canonical model of the [`domain`] crate. A shared
//! [`BaseAlgorithm`] implements the default behavior of every hook; each
//! transit network supplies a [`NetworkStrategy`] that overrides a subset of
//! the hooks with declarative rules and delegates everything else to its base.
//!
//! # Architecture
//!
//! - [`patterns`]: reusable text patterns (first top-level comma, place
//!   prefixes, parenthesised place, bracketed suffix, postcode place)
//! - [`naming`]: ordered name rules built from those patterns
//! - [`lines`]: line classification decision rules
//! - [`fares`]: fare keyword filters
//! - [`request`]: request parameter port and the default parameter sets
//! - [`tables`]: products maps, place lists and style tables
//!
//! # Example
//!
//! ```rust,ignore
//! use normalization::{LineFields, NetworkStrategy};
//!
//! let line = strategy.classify_line(
//!     &LineFields::new().mode("0").train_type("ICE").train_num("123"),
//! );
//! assert_eq!(line.label.as_deref(), Some("ICE123"));
//! ```

mod base;
mod error;
pub mod fares;
pub mod lines;
pub mod naming;
mod network;
pub mod patterns;
pub mod request;
mod strategy;
pub mod tables;

pub use base::BaseAlgorithm;
pub use error::CustomizationError;
pub use fares::{FareFilter, FarePolicy};
pub use lines::{Field, Label, LineFields, LineRule, ModeFilter, When};
pub use naming::{CommaOrder, NameParts, NameRule};
pub use network::{NetworkId, Protocol};
pub use request::{ParameterSet, RequestContext, RequestKind, RequestParameters};
pub use strategy::{NetworkStrategy, NetworkUnit, build_parameters};
pub use tables::{NetworkTables, PlaceEntry, PlaceList, ProductsMap, StyleTable};
