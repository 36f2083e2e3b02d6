//! Network registry
//!
//! Builds every network's strategy once at startup and hands out shared
//! references. Strategies are immutable, so a registry can be cloned or
//! shared across threads freely.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use normalization::{CustomizationError, NetworkId, NetworkStrategy, PlaceEntry, Protocol};
use tracing::{debug, info, warn};

use crate::config::AppConfig;

/// Build one network's strategy, dispatching on its protocol family
pub fn build_strategy(
    id: NetworkId,
    extra_places: &[PlaceEntry],
) -> Result<Arc<dyn NetworkStrategy>, CustomizationError> {
    match id.protocol() {
        Protocol::Efa => integration_efa::build(id, extra_places),
        Protocol::Hafas => integration_hafas::build(id, extra_places),
    }
}

/// Resolves network ids to their strategies
#[derive(Debug, Clone)]
pub struct NetworkRegistry {
    strategies: BTreeMap<NetworkId, Arc<dyn NetworkStrategy>>,
    disabled: BTreeSet<NetworkId>,
    default_network: Option<NetworkId>,
}

impl NetworkRegistry {
    /// Registry with every network enabled and no extra places
    pub fn with_defaults() -> Result<Self, CustomizationError> {
        Self::from_config(&AppConfig::default())
    }

    /// Registry honouring per-network overrides
    ///
    /// Configuration keys that name no known network are logged and
    /// skipped; use [`AppConfig::validate`] to reject them up front.
    pub fn from_config(config: &AppConfig) -> Result<Self, CustomizationError> {
        for key in config.networks.keys() {
            if key.parse::<NetworkId>().is_err() {
                warn!(network = %key, "Ignoring configuration for unknown network");
            }
        }

        let mut strategies = BTreeMap::new();
        let mut disabled = BTreeSet::new();
        for id in NetworkId::ALL {
            let (enabled, extra_places) = config
                .network(id)
                .map_or((true, &[][..]), |o| (o.enabled, o.extra_places.as_slice()));
            if !enabled {
                debug!(network = %id, "Network disabled by configuration");
                disabled.insert(id);
                continue;
            }
            strategies.insert(id, build_strategy(id, extra_places)?);
        }

        let default_network = match config.default_network.as_deref() {
            Some(key) => match key.parse::<NetworkId>() {
                Ok(id) => Some(id),
                Err(e) => {
                    warn!(network = %key, error = %e, "Ignoring unknown default network");
                    None
                },
            },
            None => None,
        };

        info!(
            enabled = strategies.len(),
            disabled = disabled.len(),
            "Network registry initialized"
        );
        Ok(Self {
            strategies,
            disabled,
            default_network,
        })
    }

    /// Strategy for a network
    pub fn get(&self, id: NetworkId) -> Result<Arc<dyn NetworkStrategy>, CustomizationError> {
        if self.disabled.contains(&id) {
            return Err(CustomizationError::NetworkDisabled(id));
        }
        self.strategies
            .get(&id)
            .cloned()
            .ok_or_else(|| CustomizationError::UnknownNetwork(id.to_string()))
    }

    /// Strategy for a network given by name
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn NetworkStrategy>, CustomizationError> {
        self.get(name.parse()?)
    }

    /// Strategy for `name`, or the configured default when `name` is absent
    pub fn resolve_or_default(
        &self,
        name: Option<&str>,
    ) -> Result<Arc<dyn NetworkStrategy>, CustomizationError> {
        match (name, self.default_network) {
            (Some(name), _) => self.resolve(name),
            (None, Some(id)) => self.get(id),
            (None, None) => Err(CustomizationError::UnknownNetwork(
                "no network given and no default configured".to_string(),
            )),
        }
    }

    /// Configured default network
    pub const fn default_network(&self) -> Option<NetworkId> {
        self.default_network
    }

    /// Enabled networks in declaration order
    pub fn enabled(&self) -> impl Iterator<Item = NetworkId> + '_ {
        self.strategies.keys().copied()
    }

    /// Whether a network was disabled by configuration
    pub fn is_disabled(&self, id: NetworkId) -> bool {
        self.disabled.contains(&id)
    }

    /// Number of enabled networks
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Whether no network is enabled
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}
