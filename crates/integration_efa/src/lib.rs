//! EFA network customization units
//!
//! EFA backends answer in XML and identify transport modes by a numeric
//! `motType` (0 to 19). Each network here overrides the hooks of
//! [`NetworkStrategy`] it needs and leaves everything else to its
//! [`normalization::BaseAlgorithm`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_efa::build;
//! use normalization::NetworkId;
//!
//! let vrr = build(NetworkId::Vrr, &[])?;
//! let parts = vrr.split_station_name(Some("Essen Hauptbahnhof"));
//! assert_eq!(parts.place.as_deref(), Some("Essen"));
//! ```

mod networks;
pub mod rules;

use std::sync::Arc;

use normalization::{CustomizationError, NetworkId, NetworkStrategy, NetworkUnit, PlaceEntry, Protocol};
use tracing::debug;

pub use networks::{
    AvvAugsburg, Bayern, Bsvag, Ding, Gvh, Kvv, Linz, Mvv, Nvbw, Stv, Sydney, Vgn, Vmv, Vms, Vor,
    Vrr, Vvo, Vvs, Vvt,
};

fn shared<U: NetworkUnit + 'static>(
    extra_places: &[PlaceEntry],
) -> Result<Arc<dyn NetworkStrategy>, CustomizationError> {
    let unit = U::with_extra_places(extra_places)?;
    debug!(
        network = %U::ID,
        places = unit.base().tables().places.entries().len(),
        "EFA network unit built"
    );
    Ok(Arc::new(unit))
}

/// Build the unit for an EFA network, appending `extra_places` to its
/// shipped place list
///
/// Fails with [`CustomizationError::UnknownNetwork`] for networks of the
/// other protocol family.
pub fn build(
    id: NetworkId,
    extra_places: &[PlaceEntry],
) -> Result<Arc<dyn NetworkStrategy>, CustomizationError> {
    match id {
        NetworkId::Vrr => shared::<Vrr>(extra_places),
        NetworkId::Vvs => shared::<Vvs>(extra_places),
        NetworkId::Mvv => shared::<Mvv>(extra_places),
        NetworkId::Kvv => shared::<Kvv>(extra_places),
        NetworkId::Vvo => shared::<Vvo>(extra_places),
        NetworkId::Vgn => shared::<Vgn>(extra_places),
        NetworkId::Bayern => shared::<Bayern>(extra_places),
        NetworkId::Nvbw => shared::<Nvbw>(extra_places),
        NetworkId::Ding => shared::<Ding>(extra_places),
        NetworkId::Vmv => shared::<Vmv>(extra_places),
        NetworkId::Linz => shared::<Linz>(extra_places),
        NetworkId::Stv => shared::<Stv>(extra_places),
        NetworkId::Vor => shared::<Vor>(extra_places),
        NetworkId::Vvt => shared::<Vvt>(extra_places),
        NetworkId::Sydney => shared::<Sydney>(extra_places),
        NetworkId::Gvh => shared::<Gvh>(extra_places),
        NetworkId::Bsvag => shared::<Bsvag>(extra_places),
        NetworkId::Vms => shared::<Vms>(extra_places),
        NetworkId::AvvAugsburg => shared::<AvvAugsburg>(extra_places),
        other => Err(CustomizationError::UnknownNetwork(format!(
            "{other} is not an EFA network"
        ))),
    }
}

/// Networks served by this crate
pub fn networks() -> impl Iterator<Item = NetworkId> {
    NetworkId::ALL
        .into_iter()
        .filter(|id| id.protocol() == Protocol::Efa)
}
