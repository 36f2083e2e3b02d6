//! Property-based tests across every registered network
//!
//! These tests use proptest to verify the hook contracts hold for all
//! shipped strategies, not only the ones with dedicated unit tests.

use std::sync::{Arc, OnceLock};

use domain::Fare;
use infrastructure::NetworkRegistry;
use normalization::{LineFields, NetworkId, NetworkStrategy};
use proptest::prelude::*;

/// Networks whose station hook resolves registered places as prefixes
const PREFIX_NETWORKS: &[NetworkId] = &[
    NetworkId::Vrr,
    NetworkId::Vvs,
    NetworkId::Mvv,
    NetworkId::Kvv,
    NetworkId::Vvo,
    NetworkId::Vgn,
    NetworkId::Ding,
    NetworkId::Vmv,
    NetworkId::Linz,
    NetworkId::Stv,
    NetworkId::Vor,
    NetworkId::Vvt,
    NetworkId::Gvh,
    NetworkId::Bsvag,
    NetworkId::Vms,
    NetworkId::AvvAugsburg,
    NetworkId::Vbb,
    NetworkId::Rmv,
    NetworkId::Nvv,
    NetworkId::Vbn,
    NetworkId::Sbb,
    NetworkId::Zvv,
    NetworkId::Sh,
    NetworkId::Invg,
    NetworkId::Vgs,
    NetworkId::Vmt,
    NetworkId::Luxembourg,
    NetworkId::Svv,
    NetworkId::AvvAachen,
];

/// Networks that keep the default comma split for station names
const DEFAULT_COMMA_NETWORKS: &[NetworkId] = &[NetworkId::Bayern, NetworkId::Nvbw];

/// Networks hiding fares that mention "abo"
const ABO_NETWORKS: &[NetworkId] = &[NetworkId::Vrr, NetworkId::Sh, NetworkId::Vmt, NetworkId::AvvAachen];

fn registry() -> &'static NetworkRegistry {
    static REGISTRY: OnceLock<NetworkRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| NetworkRegistry::with_defaults().expect("shipped tables are valid"))
}

fn strategy(id: NetworkId) -> Arc<dyn NetworkStrategy> {
    registry().get(id).expect("network enabled")
}

fn any_network() -> impl Strategy<Value = NetworkId> {
    prop::sample::select(NetworkId::ALL.to_vec())
}

/// Words without separators, brackets or commas
fn word() -> impl Strategy<Value = String> {
    "[A-Z][a-zäöü]{1,10}"
}

fn phrase() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 1..3).prop_map(|words| words.join(" "))
}

fn optional_field() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[A-Za-z0-9 ]{0,8}")
}

fn line_fields() -> impl Strategy<Value = LineFields> {
    (
        prop::option::of("[0-9]{1,2}"),
        optional_field(),
        optional_field(),
        optional_field(),
        optional_field(),
    )
        .prop_map(|(mode, symbol, name, train_type, train_num)| {
            let mut fields = LineFields::new();
            if let Some(mode) = mode {
                fields = fields.mode(mode);
            }
            if let Some(symbol) = symbol {
                fields = fields.symbol(symbol);
            }
            if let Some(name) = name {
                fields = fields.name(name);
            }
            if let Some(train_type) = train_type {
                fields = fields.train_type(train_type);
            }
            if let Some(train_num) = train_num {
                fields = fields.train_num(train_num);
            }
            fields
        })
}

// ============================================================================
// Name decomposition
// ============================================================================

#[test]
fn absent_input_is_empty_everywhere() {
    for id in NetworkId::ALL {
        let s = strategy(id);
        assert_eq!(s.split_station_name(None).as_tuple(), (None, None), "{id}");
        assert_eq!(s.split_poi(None).as_tuple(), (None, None), "{id}");
        assert_eq!(s.split_address(None).as_tuple(), (None, None), "{id}");
        assert_eq!(s.split_station_name(Some("   ")).as_tuple(), (None, None), "{id}");
    }
}

proptest! {
    #[test]
    fn registered_place_prefix_splits(
        network in prop::sample::select(PREFIX_NETWORKS.to_vec()),
        pick in any::<prop::sample::Index>(),
        suffix in phrase(),
    ) {
        let s = strategy(network);
        let entries = s.base().tables().places.entries();
        prop_assume!(!entries.is_empty());
        let place = &entries[pick.index(entries.len())].name;

        let parts = s.split_station_name(Some(&format!("{place} {suffix}")));
        prop_assert_eq!(parts.as_tuple(), (Some(place.as_str()), Some(suffix.as_str())));
    }

    #[test]
    fn default_comma_rule(
        network in prop::sample::select(DEFAULT_COMMA_NETWORKS.to_vec()),
        place in phrase(),
        name in phrase(),
    ) {
        let s = strategy(network);
        let parts = s.split_station_name(Some(&format!("{place}, {name}")));
        prop_assert_eq!(parts.as_tuple(), (Some(place.as_str()), Some(name.as_str())));

        let parts = s.split_station_name(Some(&name));
        prop_assert_eq!(parts.as_tuple(), (None, Some(name.as_str())));
    }

    #[test]
    fn base_split_is_shared_by_all(
        network in any_network(),
        place in phrase(),
        name in phrase(),
    ) {
        let base = strategy(network).base().clone();
        let station = base.split_station_name(Some(&format!("{place}, {name}")));
        prop_assert_eq!(station.as_tuple(), (Some(place.as_str()), Some(name.as_str())));
        let address = base.split_address(Some(&name));
        prop_assert_eq!(address.as_tuple(), (None, Some(name.as_str())));
    }

    #[test]
    fn split_never_returns_place_without_name(network in any_network(), raw in ".{0,40}") {
        let s = strategy(network);
        for parts in [
            s.split_station_name(Some(&raw)),
            s.split_poi(Some(&raw)),
            s.split_address(Some(&raw)),
        ] {
            prop_assert!(parts.place.is_none() || parts.name.is_some());
        }
    }
}

// ============================================================================
// Line classification
// ============================================================================

proptest! {
    #[test]
    fn classification_is_deterministic(network in any_network(), fields in line_fields()) {
        let s = strategy(network);
        prop_assert_eq!(s.classify_line(&fields), s.classify_line(&fields));
    }

    #[test]
    fn out_of_range_mode_has_no_product(network in any_network(), offset in 0usize..1000) {
        let s = strategy(network);
        let code = s.base().tables().products.len() + offset;
        let line = s.classify_line(&LineFields::new().mode(code.to_string()));
        prop_assert_eq!(line.product, None);
    }

    #[test]
    fn non_numeric_mode_has_no_product(network in any_network(), mode in "[a-z]{1,6}") {
        let line = strategy(network).classify_line(&LineFields::new().mode(mode));
        prop_assert_eq!(line.product, None);
    }
}

// ============================================================================
// Fares
// ============================================================================

proptest! {
    #[test]
    fn fare_visibility_ignores_case(
        network in prop::sample::select(ABO_NETWORKS.to_vec()),
        prefix in "[a-z ]{0,8}",
        suffix in "[a-z ]{0,8}",
    ) {
        let s = strategy(network);
        let lower = Fare::named(format!("{prefix}abo{suffix}"), "EUR", 1.0);
        let upper = Fare::named(format!("{prefix}ABO{suffix}").to_uppercase(), "EUR", 1.0);
        prop_assert!(s.hide_fare(&lower));
        prop_assert_eq!(s.hide_fare(&lower), s.hide_fare(&upper));
    }

    #[test]
    fn default_fare_hook_hides_nothing(name in ".{0,30}") {
        let s = strategy(NetworkId::Vvo);
        prop_assert!(!s.hide_fare(&Fare::named(name, "EUR", 2.0)));
    }
}
