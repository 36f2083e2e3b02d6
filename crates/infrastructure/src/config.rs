//! Application configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `transit-normalize.toml`, then `TRANSIT_NORMALIZE_*` environment
//! variables (nested keys separated by `__`, e.g.
//! `TRANSIT_NORMALIZE_NETWORKS__VRR__ENABLED=false`).

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use normalization::{NetworkId, PlaceEntry};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Base name of the optional configuration file
pub const CONFIG_FILE: &str = "transit-normalize";

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "TRANSIT_NORMALIZE";

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The layered sources could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A network key does not name a known network
    #[error("Unknown network in configuration: {0}")]
    UnknownNetwork(String),

    /// An extra place has a blank name
    #[error("Empty place name configured for network {0}")]
    EmptyPlace(String),
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable, for terminals
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid log format: {s}. Use 'pretty' or 'json'")),
        }
    }
}

const fn default_true() -> bool {
    true
}

fn default_log_filter() -> String {
    "info".to_string()
}

/// Per-network overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkOverride {
    /// Whether the registry hands out this network
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Places appended after the network's shipped place list
    #[serde(default)]
    pub extra_places: Vec<PlaceEntry>,
}

impl Default for NetworkOverride {
    fn default() -> Self {
        Self {
            enabled: true,
            extra_places: Vec::new(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Network used when a command names none
    #[serde(default)]
    pub default_network: Option<String>,

    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Overrides keyed by network id (`vrr`, `avv-aachen`, ...)
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkOverride>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_network: None,
            log_format: LogFormat::default(),
            log_filter: default_log_filter(),
            networks: BTreeMap::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `transit-normalize.toml` (if present in the
    /// working directory) and the environment
    pub fn load() -> Result<Self, ConfigurationError> {
        Self::load_layers(config::File::with_name(CONFIG_FILE).required(false))
    }

    /// Load configuration from an explicit file plus the environment
    pub fn load_from(path: &Path) -> Result<Self, ConfigurationError> {
        Self::load_layers(config::File::from(path).required(true))
    }

    fn load_layers<S>(file: S) -> Result<Self, ConfigurationError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let builder = config::Config::builder()
            .set_default("log_format", "pretty")?
            .set_default("log_filter", default_log_filter())?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(
            default_network = ?config.default_network,
            overrides = config.networks.len(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Check network keys and place names
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if let Some(default) = &self.default_network {
            parse_network(default)?;
        }
        for (key, network) in &self.networks {
            parse_network(key)?;
            if network.extra_places.iter().any(|p| p.name.trim().is_empty()) {
                return Err(ConfigurationError::EmptyPlace(key.clone()));
            }
        }
        Ok(())
    }

    /// Resolved default network
    pub fn default_network_id(&self) -> Result<Option<NetworkId>, ConfigurationError> {
        self.default_network.as_deref().map(parse_network).transpose()
    }

    /// Overrides for one network, if configured
    ///
    /// Keys are matched the way network ids parse, so `avv_aachen` and
    /// `avv-aachen` both address AVV Aachen.
    pub fn network(&self, id: NetworkId) -> Option<&NetworkOverride> {
        self.networks
            .iter()
            .find(|(key, _)| key.parse::<NetworkId>().ok() == Some(id))
            .map(|(_, network)| network)
    }
}

fn parse_network(key: &str) -> Result<NetworkId, ConfigurationError> {
    key.parse()
        .map_err(|_| ConfigurationError::UnknownNetwork(key.to_string()))
}
