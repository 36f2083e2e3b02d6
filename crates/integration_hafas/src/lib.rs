//! HAFAS network customization units
//!
//! HAFAS backends answer in JSON and report the product class as a bit
//! index into the network's products map. Requests filter products with a
//! bitmask built from the same map.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_hafas::build;
//! use normalization::NetworkId;
//!
//! let rmv = build(NetworkId::Rmv, &[])?;
//! let parts = rmv.split_station_name(Some("Frankfurt (Main) Hauptbahnhof"));
//! assert_eq!(parts.place.as_deref(), Some("Frankfurt"));
//! ```

mod networks;
pub mod rules;

use std::sync::Arc;

use normalization::{CustomizationError, NetworkId, NetworkStrategy, NetworkUnit, PlaceEntry, Protocol};
use tracing::debug;

pub use networks::{
    AvvAachen, Db, Invg, Luxembourg, Nvv, Oebb, Rmv, Sbb, Sh, Svv, Vbb, Vbn, Vgs, Vmt, Zvv,
};

fn shared<U: NetworkUnit + 'static>(
    extra_places: &[PlaceEntry],
) -> Result<Arc<dyn NetworkStrategy>, CustomizationError> {
    let unit = U::with_extra_places(extra_places)?;
    debug!(
        network = %U::ID,
        places = unit.base().tables().places.entries().len(),
        products = unit.base().tables().products.len(),
        "HAFAS network unit built"
    );
    Ok(Arc::new(unit))
}

/// Build the unit for a HAFAS network, appending `extra_places` to its
/// shipped place list
///
/// Fails with [`CustomizationError::UnknownNetwork`] for EFA networks.
pub fn build(
    id: NetworkId,
    extra_places: &[PlaceEntry],
) -> Result<Arc<dyn NetworkStrategy>, CustomizationError> {
    match id {
        NetworkId::Db => shared::<Db>(extra_places),
        NetworkId::Vbb => shared::<Vbb>(extra_places),
        NetworkId::Rmv => shared::<Rmv>(extra_places),
        NetworkId::Nvv => shared::<Nvv>(extra_places),
        NetworkId::Vbn => shared::<Vbn>(extra_places),
        NetworkId::Sbb => shared::<Sbb>(extra_places),
        NetworkId::Oebb => shared::<Oebb>(extra_places),
        NetworkId::Zvv => shared::<Zvv>(extra_places),
        NetworkId::Sh => shared::<Sh>(extra_places),
        NetworkId::Invg => shared::<Invg>(extra_places),
        NetworkId::Vgs => shared::<Vgs>(extra_places),
        NetworkId::Vmt => shared::<Vmt>(extra_places),
        NetworkId::Luxembourg => shared::<Luxembourg>(extra_places),
        NetworkId::Svv => shared::<Svv>(extra_places),
        NetworkId::AvvAachen => shared::<AvvAachen>(extra_places),
        other => Err(CustomizationError::UnknownNetwork(format!(
            "{other} is not a HAFAS network"
        ))),
    }
}

/// Networks served by this crate
pub fn networks() -> impl Iterator<Item = NetworkId> {
    NetworkId::ALL
        .into_iter()
        .filter(|id| id.protocol() == Protocol::Hafas)
}
