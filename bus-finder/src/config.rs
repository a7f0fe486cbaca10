//! Process configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::cache::{CacheConfig, DEFAULT_SNAPSHOT_TTL_SECS};
use crate::feed::{DEFAULT_FEED_URL, FeedConfig};
use crate::matcher::SearchConfig;

pub const ENV_ADDR: &str = "BUS_FINDER_ADDR";
pub const ENV_GTFS_DIR: &str = "BUS_FINDER_GTFS_DIR";
pub const ENV_FEED_URL: &str = "BUS_FINDER_FEED_URL";
pub const ENV_FEED_KEY: &str = "BUS_FINDER_FEED_KEY";
pub const ENV_MOCK_FEED: &str = "BUS_FINDER_MOCK_FEED";
pub const ENV_FEED_TTL_SECS: &str = "BUS_FINDER_FEED_TTL_SECS";

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_GTFS_DIR: &str = "gtfs";

/// Invalid configuration values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: invalid socket address {value:?}: {source}")]
    InvalidAddr {
        var: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("{var}: invalid number {value:?}: {source}")]
    InvalidNumber {
        var: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Everything the server needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address to listen on
    pub addr: SocketAddr,
    /// Directory holding stops.txt, routes.txt, trips.txt, stop_times.txt
    pub gtfs_dir: PathBuf,
    /// Live feed settings
    pub feed: FeedConfig,
    /// JSON snapshot to serve instead of the live feed
    pub mock_feed: Option<PathBuf>,
    /// Snapshot cache settings
    pub cache: CacheConfig,
    /// Search tuning
    pub search: SearchConfig,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value
    /// if set. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let addr_value = get(ENV_ADDR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                var: ENV_ADDR,
                value: addr_value.clone(),
                source,
            })?;

        let ttl_secs = match get(ENV_FEED_TTL_SECS) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidNumber {
                    var: ENV_FEED_TTL_SECS,
                    value: value.clone(),
                    source,
                })?,
            None => DEFAULT_SNAPSHOT_TTL_SECS,
        };

        let mut feed =
            FeedConfig::new(get(ENV_FEED_URL).unwrap_or_else(|| DEFAULT_FEED_URL.to_string()));
        if let Some(key) = get(ENV_FEED_KEY) {
            feed = feed.with_api_key(key);
        }

        Ok(Self {
            addr,
            gtfs_dir: get(ENV_GTFS_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_GTFS_DIR)),
            feed,
            mock_feed: get(ENV_MOCK_FEED).map(PathBuf::from),
            cache: CacheConfig::default().with_ttl(Duration::from_secs(ttl_secs)),
            search: SearchConfig::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.gtfs_dir, PathBuf::from("gtfs"));
        assert_eq!(config.feed.url, DEFAULT_FEED_URL);
        assert!(config.feed.api_key.is_none());
        assert!(config.mock_feed.is_none());
        assert_eq!(config.cache.ttl, Duration::from_secs(15));
        assert_eq!(config.search, SearchConfig::default());
    }

    #[test]
    fn overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_ADDR, "0.0.0.0:8080"),
            (ENV_GTFS_DIR, "/data/gtfs"),
            (ENV_FEED_URL, "http://localhost:9000/vp.pb"),
            (ENV_FEED_KEY, "secret"),
            (ENV_MOCK_FEED, "snapshot.json"),
            (ENV_FEED_TTL_SECS, "30"),
        ]))
        .unwrap();

        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.gtfs_dir, PathBuf::from("/data/gtfs"));
        assert_eq!(config.feed.url, "http://localhost:9000/vp.pb");
        assert_eq!(config.feed.api_key.as_deref(), Some("secret"));
        assert_eq!(config.mock_feed, Some(PathBuf::from("snapshot.json")));
        assert_eq!(config.cache.ttl, Duration::from_secs(30));
    }

    #[test]
    fn blank_values_are_unset() {
        let config = AppConfig::from_lookup(lookup(&[(ENV_FEED_KEY, "  "), (ENV_ADDR, "")]))
            .unwrap();
        assert!(config.feed.api_key.is_none());
        assert_eq!(config.addr.port(), 3000);
    }

    #[test]
    fn invalid_values() {
        let err = AppConfig::from_lookup(lookup(&[(ENV_ADDR, "not an address")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddr { .. }));
        assert!(err.to_string().contains(ENV_ADDR));

        let err = AppConfig::from_lookup(lookup(&[(ENV_FEED_TTL_SECS, "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { .. }));
    }
}
