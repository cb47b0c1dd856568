use std::env;
use std::time::Duration;

use infra::StoreConfig;

use crate::error::{GatewayError, GatewayResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheTtl {
    /// Standings, leaders, games and team stats.
    pub default: Duration,
    /// Competitions, seasons and teams.
    pub catalog: Duration,
    pub schema: Duration,
}

impl Default for CacheTtl {
    fn default() -> Self {
        Self {
            default: Duration::from_secs(300),
            catalog: Duration::from_secs(600),
            schema: Duration::from_secs(3600),
        }
    }
}

#[derive(Clone, Debug)]
pub struct GatewayConfig {
    pub store: StoreConfig,
    pub cache_ttl: CacheTtl,
    pub default_limit: i64,
    pub default_competitions: Vec<String>,
    pub default_seasons: Vec<String>,
}

impl GatewayConfig {
    pub fn from_env() -> GatewayResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key/value source. Unparseable numbers fall
    /// back to their defaults; missing connection credentials are an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> GatewayResult<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| GatewayError::Config(format!("{key} must be set")))
        };
        let number = |key: &str, default: u64| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(default)
        };
        let list = |key: &str, default: &[&str]| {
            let parsed: Vec<String> = lookup(key)
                .unwrap_or_default()
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
            if parsed.is_empty() {
                default.iter().map(|s| s.to_string()).collect()
            } else {
                parsed
            }
        };

        let store = StoreConfig {
            uri: required("NEO4J_URI")?,
            user: lookup("NEO4J_USER").unwrap_or_else(|| "neo4j".to_string()),
            password: required("NEO4J_PASSWORD")?,
            database: lookup("NEO4J_DATABASE").unwrap_or_else(|| "neo4j".to_string()),
            max_connections: number("NEO4J_MAX_CONNECTIONS", 8) as usize,
            fetch_size: number("NEO4J_FETCH_SIZE", 500) as usize,
        };

        let defaults = CacheTtl::default();
        let cache_ttl = CacheTtl {
            default: Duration::from_secs(number(
                "GATEWAY_CACHE_TTL_SECS",
                defaults.default.as_secs(),
            )),
            catalog: Duration::from_secs(number(
                "GATEWAY_CATALOG_CACHE_TTL_SECS",
                defaults.catalog.as_secs(),
            )),
            schema: Duration::from_secs(number(
                "GATEWAY_SCHEMA_CACHE_TTL_SECS",
                defaults.schema.as_secs(),
            )),
        };

        let default_limit = match number("GATEWAY_DEFAULT_LIMIT", 10) {
            0 => 10,
            n => i64::try_from(n).unwrap_or(10),
        };

        Ok(Self {
            store,
            cache_ttl,
            default_limit,
            default_competitions: list("GATEWAY_DEFAULT_COMPETITIONS", &["SHL"]),
            default_seasons: list("GATEWAY_DEFAULT_SEASONS", &["2024/2025", "2023/2024"]),
        })
    }
}
