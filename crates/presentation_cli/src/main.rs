//! transit-normalize CLI
//!
//! Runs single normalization hooks of a network from the command line and
//! prints the result as JSON on stdout. Logs go to stderr.

#![allow(clippy::print_stdout)]

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use domain::{Fare, Product};
use infrastructure::{AppConfig, NetworkRegistry, init_tracing};
use normalization::{
    LineFields, NetworkId, NetworkStrategy, Protocol, RequestContext, RequestKind,
    build_parameters,
};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::debug;

/// transit-normalize CLI
#[derive(Parser)]
#[command(name = "transit-normalize")]
#[command(author, version, about = "Normalize public transit backend data per network", long_about = None)]
struct Cli {
    /// Verbosity level (overrides the configured log filter)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./transit-normalize.toml if present)
    #[arg(short, long, global = true, env = "TRANSIT_NORMALIZE_CONFIG")]
    config: Option<PathBuf>,

    /// Network id, e.g. `vrr` or `avv-aachen` (default: configured default)
    #[arg(short, long, global = true)]
    network: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every known network
    Networks,

    /// Split a display string into place and name
    ///
    /// Example: transit-normalize -n rmv split "F Hauptbahnhof"
    Split {
        /// Which hook to run
        #[arg(short, long, value_enum, default_value = "station")]
        kind: NameKind,

        /// Raw upstream string
        raw: String,
    },

    /// Classify a line from raw upstream fields
    ///
    /// Example: transit-normalize -n vrr line --mode 0 --train-type ICE --train-num 123
    Line {
        /// Numeric mode code
        #[arg(long)]
        mode: Option<String>,

        /// Line symbol
        #[arg(long)]
        symbol: Option<String>,

        /// Line name
        #[arg(long)]
        name: Option<String>,

        /// Long line name
        #[arg(long)]
        long_name: Option<String>,

        /// Train type, e.g. ICE or RE
        #[arg(long)]
        train_type: Option<String>,

        /// Train number
        #[arg(long)]
        train_num: Option<String>,

        /// Train name
        #[arg(long)]
        train_name: Option<String>,

        /// Upstream line id
        #[arg(long)]
        line_id: Option<String>,

        /// Operator network field from the response
        #[arg(long)]
        line_network: Option<String>,
    },

    /// Decide whether a fare is shown
    Fare {
        /// Fare display name
        name: String,

        /// ISO 4217 currency code
        #[arg(long, default_value = "EUR")]
        currency: String,

        /// Price in currency units
        #[arg(long, default_value = "0")]
        price: f64,
    },

    /// Build the query parameters for a request
    ///
    /// Example: transit-normalize -n zvv params trip --product tram --product bus
    Params {
        /// stop_finder, nearby, departures or trip
        kind: RequestKind,

        /// Restrict to products (repeatable; default: all)
        #[arg(short, long)]
        product: Vec<Product>,

        /// Response language
        #[arg(short, long, default_value = "de")]
        language: String,
    },
}

/// Name decomposition hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum NameKind {
    Station,
    Poi,
    Address,
}

/// One row of the `networks` listing
#[derive(Debug, Serialize)]
struct NetworkInfo {
    id: NetworkId,
    display_name: &'static str,
    protocol: Protocol,
    enabled: bool,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => AppConfig::load()?,
    };
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn list_networks(registry: &NetworkRegistry) -> Vec<NetworkInfo> {
    NetworkId::ALL
        .into_iter()
        .map(|id| NetworkInfo {
            id,
            display_name: id.display_name(),
            protocol: id.protocol(),
            enabled: !registry.is_disabled(id),
        })
        .collect()
}

fn split(strategy: &dyn NetworkStrategy, kind: NameKind, raw: &str) -> Value {
    let parts = match kind {
        NameKind::Station => strategy.split_station_name(Some(raw)),
        NameKind::Poi => strategy.split_poi(Some(raw)),
        NameKind::Address => strategy.split_address(Some(raw)),
    };
    json!({ "network": strategy.id(), "place": parts.place, "name": parts.name })
}

fn fare_visibility(strategy: &dyn NetworkStrategy, fare: &Fare) -> Value {
    json!({ "network": strategy.id(), "fare": fare, "hidden": strategy.hide_fare(fare) })
}

/// Parameters as `[key, value]` pairs in the order they were set
fn parameters(strategy: &dyn NetworkStrategy, kind: RequestKind, context: &RequestContext) -> Value {
    let params = build_parameters(strategy, kind, context);
    let entries: Vec<[&str; 2]> = params.iter().map(|(key, value)| [key, value]).collect();
    json!({ "network": strategy.id(), "kind": kind, "parameters": entries })
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let filter = if cli.verbose > 0 {
        log_filter_from_verbosity(cli.verbose)
    } else {
        config.log_filter.as_str()
    };
    init_tracing(config.log_format, filter)?;

    let registry = NetworkRegistry::from_config(&config).context("Failed to build networks")?;

    if matches!(cli.command, Commands::Networks) {
        return print_json(&list_networks(&registry));
    }

    let strategy = registry
        .resolve_or_default(cli.network.as_deref())
        .context("Pass --network or set default_network in the configuration")?;
    debug!(network = %strategy.id(), "Network selected");

    run_hook(strategy.as_ref(), cli.command)
}

/// Run one per-network hook and print its result
fn run_hook(strategy: &dyn NetworkStrategy, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Networks => anyhow::bail!("networks is not a per-network command"),

        Commands::Split { kind, raw } => print_json(&split(strategy, kind, &raw)),

        Commands::Line {
            mode,
            symbol,
            name,
            long_name,
            train_type,
            train_num,
            train_name,
            line_id,
            line_network,
        } => {
            let fields = LineFields {
                id: line_id,
                network: line_network,
                mode_code: mode,
                symbol,
                name,
                long_name,
                train_type,
                train_num,
                train_name,
            };
            print_json(&strategy.classify_line(&fields))
        },

        Commands::Fare {
            name,
            currency,
            price,
        } => print_json(&fare_visibility(strategy, &Fare::named(name, currency, price))),

        Commands::Params {
            kind,
            product,
            language,
        } => {
            let context = RequestContext {
                products: (!product.is_empty()).then_some(product),
                language,
            };
            print_json(&parameters(strategy, kind, &context))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> NetworkRegistry {
        NetworkRegistry::with_defaults().expect("registry")
    }

    #[test]
    fn log_filter_verbosity_zero() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
    }

    #[test]
    fn log_filter_verbosity_two() {
        assert_eq!(log_filter_from_verbosity(2), "debug");
    }

    #[test]
    fn log_filter_verbosity_three_or_more() {
        assert_eq!(log_filter_from_verbosity(3), "trace");
        assert_eq!(log_filter_from_verbosity(10), "trace");
    }

    #[test]
    fn networks_listing_covers_all() {
        let listing = list_networks(&registry());
        assert_eq!(listing.len(), NetworkId::ALL.len());
        assert!(listing.iter().all(|n| n.enabled));
        let json = serde_json::to_value(&listing[0]).expect("serialize");
        assert!(json["display_name"].is_string());
    }

    #[test]
    fn split_reports_both_parts() {
        let rmv = registry().get(NetworkId::Rmv).expect("rmv");
        let value = split(rmv.as_ref(), NameKind::Station, "F Hauptbahnhof");
        assert_eq!(value["place"], "Frankfurt");
        assert_eq!(value["name"], "Hauptbahnhof");
    }

    #[test]
    fn unsplit_name_has_null_place() {
        let vvo = registry().get(NetworkId::Vvo).expect("vvo");
        let value = split(vvo.as_ref(), NameKind::Address, "Postplatz");
        assert!(value["place"].is_null());
        assert_eq!(value["name"], "Postplatz");
    }

    #[test]
    fn fare_reports_visibility() {
        let vms = registry().get(NetworkId::Vms).expect("vms");
        let shown = fare_visibility(vms.as_ref(), &Fare::named("Einzel-Ticket", "EUR", 2.5));
        assert_eq!(shown["hidden"], false);
        let hidden = fare_visibility(vms.as_ref(), &Fare::named("Tageskarte", "EUR", 6.0));
        assert_eq!(hidden["hidden"], true);
    }

    #[test]
    fn parameters_keep_insertion_order() {
        let kvv = registry().get(NetworkId::Kvv).expect("kvv");
        let context = RequestContext::default();
        let value = parameters(kvv.as_ref(), RequestKind::Departures, &context);
        assert_eq!(value["kind"], "departures");

        let printed: Vec<(String, String)> = value["parameters"]
            .as_array()
            .expect("parameter pairs")
            .iter()
            .map(|pair| {
                (
                    pair[0].as_str().unwrap_or_default().to_string(),
                    pair[1].as_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        let expected: Vec<(String, String)> =
            build_parameters(kvv.as_ref(), RequestKind::Departures, &context)
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect();
        assert_eq!(printed, expected);
        assert_eq!(printed[0], ("outputFormat".to_string(), "XML".to_string()));
        assert_eq!(printed[1].0, "language");
    }
}
