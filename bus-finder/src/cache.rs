//! Caching layer for vehicle snapshots.
//!
//! The feed is polled at most once per TTL. Concurrent searches that miss
//! the cache share a single in-flight fetch. Failed fetches are not cached.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::{debug, warn};

use crate::domain::VehicleSnapshot;
use crate::feed::{FeedError, FeedSource};

/// Default snapshot TTL in seconds.
pub const DEFAULT_SNAPSHOT_TTL_SECS: u64 = 15;

/// Configuration for the snapshot cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// How long a fetched snapshot is reused.
    pub ttl: Duration,
}

impl CacheConfig {
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(DEFAULT_SNAPSHOT_TTL_SECS),
        }
    }
}

/// Feed source with a latest-snapshot cache.
pub struct CachedFeed {
    source: FeedSource,
    latest: MokaCache<(), Arc<VehicleSnapshot>>,
}

impl CachedFeed {
    /// Create a new cached feed.
    pub fn new(source: FeedSource, config: &CacheConfig) -> Self {
        let latest = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(1)
            .build();

        Self { source, latest }
    }

    /// Get the latest snapshot, fetching if the cached one has expired.
    pub async fn try_snapshot(&self) -> Result<Arc<VehicleSnapshot>, Arc<FeedError>> {
        self.latest
            .try_get_with((), async {
                debug!(source = self.source.kind(), "fetching vehicle snapshot");
                self.source.fetch_snapshot().await.map(Arc::new)
            })
            .await
    }

    /// Get the latest snapshot. An unavailable feed yields an empty
    /// snapshot, so searches return no vehicles rather than failing.
    pub async fn snapshot(&self) -> Arc<VehicleSnapshot> {
        match self.try_snapshot().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(source = self.source.kind(), error = %e, "vehicle feed unavailable");
                Arc::new(VehicleSnapshot::empty())
            }
        }
    }

    /// Drop the cached snapshot so the next call refetches.
    pub async fn invalidate(&self) {
        self.latest.invalidate(&()).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LiveVehicleRecord, VehicleId};
    use crate::feed::{FeedClient, FeedConfig, MockFeed};

    fn mock_source() -> FeedSource {
        FeedSource::Mock(MockFeed::new(VehicleSnapshot::new(vec![
            LiveVehicleRecord::new(VehicleId::new("V1"), "DL1PC0001".into())
                .with_position(28.6, 77.2),
        ])))
    }

    #[test]
    fn default_ttl() {
        assert_eq!(CacheConfig::default().ttl, Duration::from_secs(15));
        let config = CacheConfig::default().with_ttl(Duration::from_secs(2));
        assert_eq!(config.ttl, Duration::from_secs(2));
    }

    #[tokio::test]
    async fn snapshot_is_reused_within_ttl() {
        let feed = CachedFeed::new(mock_source(), &CacheConfig::default());

        let first = feed.snapshot().await;
        let second = feed.snapshot().await;
        assert_eq!(first.len(), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn invalidate_forces_refetch() {
        let feed = CachedFeed::new(mock_source(), &CacheConfig::default());

        let first = feed.snapshot().await;
        feed.invalidate().await;
        let second = feed.snapshot().await;
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
    }

    #[tokio::test]
    async fn unavailable_feed_yields_empty_snapshot() {
        let client =
            FeedClient::new(FeedConfig::new("http://127.0.0.1:9/vp.pb").with_timeout(2)).unwrap();
        let feed = CachedFeed::new(FeedSource::Live(client), &CacheConfig::default());

        assert!(feed.try_snapshot().await.is_err());
        assert!(feed.snapshot().await.is_empty());
    }
}
