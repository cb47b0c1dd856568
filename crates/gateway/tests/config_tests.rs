use std::collections::HashMap;
use std::time::Duration;

use gateway::{CacheTtl, GatewayConfig, GatewayError};
use tokio_test::{assert_err, assert_ok};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn test_defaults_with_required_values() {
    let config = assert_ok!(GatewayConfig::from_lookup(lookup(&[
        ("NEO4J_URI", "bolt://localhost:7687"),
        ("NEO4J_PASSWORD", "hockey"),
    ])));

    assert_eq!(config.store.uri, "bolt://localhost:7687");
    assert_eq!(config.store.user, "neo4j");
    assert_eq!(config.store.database, "neo4j");
    assert_eq!(config.store.max_connections, 8);
    assert_eq!(config.store.fetch_size, 500);
    assert_eq!(config.cache_ttl, CacheTtl::default());
    assert_eq!(config.default_limit, 10);
    assert_eq!(config.default_competitions, vec!["SHL"]);
    assert_eq!(config.default_seasons, vec!["2024/2025", "2023/2024"]);
}

#[test]
fn test_overrides_and_bad_numbers() {
    let config = assert_ok!(GatewayConfig::from_lookup(lookup(&[
        ("NEO4J_URI", "neo4j+s://stats.example.com"),
        ("NEO4J_USER", "reader"),
        ("NEO4J_PASSWORD", "secret"),
        ("NEO4J_DATABASE", "hockey"),
        ("NEO4J_MAX_CONNECTIONS", "lots"),
        ("GATEWAY_CACHE_TTL_SECS", "60"),
        ("GATEWAY_DEFAULT_LIMIT", "0"),
        ("GATEWAY_DEFAULT_COMPETITIONS", "SHL, HockeyAllsvenskan ,"),
        ("GATEWAY_DEFAULT_SEASONS", " , "),
    ])));

    assert_eq!(config.store.user, "reader");
    assert_eq!(config.store.database, "hockey");
    assert_eq!(config.store.max_connections, 8);
    assert_eq!(config.cache_ttl.default, Duration::from_secs(60));
    assert_eq!(config.cache_ttl.catalog, Duration::from_secs(600));
    assert_eq!(config.default_limit, 10);
    assert_eq!(config.default_competitions, vec!["SHL", "HockeyAllsvenskan"]);
    assert_eq!(config.default_seasons, vec!["2024/2025", "2023/2024"]);
}

#[test]
fn test_missing_credentials_are_config_errors() {
    let err = assert_err!(GatewayConfig::from_lookup(lookup(&[(
        "NEO4J_URI",
        "bolt://localhost:7687"
    )])));
    assert!(matches!(err, GatewayError::Config(ref msg) if msg.contains("NEO4J_PASSWORD")));

    let err = assert_err!(GatewayConfig::from_lookup(lookup(&[
        ("NEO4J_URI", "  "),
        ("NEO4J_PASSWORD", "hockey"),
    ])));
    assert!(matches!(err, GatewayError::Config(ref msg) if msg.contains("NEO4J_URI")));
}

#[test]
fn test_default_limit_beyond_i64_falls_back() {
    let config = assert_ok!(GatewayConfig::from_lookup(lookup(&[
        ("NEO4J_URI", "bolt://localhost:7687"),
        ("NEO4J_PASSWORD", "hockey"),
        ("GATEWAY_DEFAULT_LIMIT", "18446744073709551615"),
    ])));

    assert_eq!(config.default_limit, 10);

    let config = assert_ok!(GatewayConfig::from_lookup(lookup(&[
        ("NEO4J_URI", "bolt://localhost:7687"),
        ("NEO4J_PASSWORD", "hockey"),
        ("GATEWAY_DEFAULT_LIMIT", "25"),
    ])));

    assert_eq!(config.default_limit, 25);
}
