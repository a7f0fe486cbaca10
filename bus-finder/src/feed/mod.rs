//! GTFS-realtime vehicle position feed.
//!
//! The live source is a protobuf VehiclePositions endpoint polled over
//! HTTP. A JSON-backed mock stands in for it during development.
//!
//! Key characteristics of the feed:
//! - Entities without a vehicle position (alerts, trip updates) are ignored
//! - Trip and route ids are optional and may not exist in the static schedule
//! - Positions can be missing; such vehicles are kept but never matched

mod client;
mod convert;
mod error;
mod mock;

pub use client::{DEFAULT_FEED_URL, FeedClient, FeedConfig};
pub use convert::{convert_feed, decode_feed};
pub use error::FeedError;
pub use mock::MockFeed;

use crate::domain::VehicleSnapshot;

/// Where vehicle snapshots come from.
#[derive(Debug, Clone)]
pub enum FeedSource {
    /// Live GTFS-realtime endpoint.
    Live(FeedClient),
    /// Fixed snapshot loaded from disk.
    Mock(MockFeed),
}

impl FeedSource {
    /// Fetch the current snapshot.
    pub async fn fetch_snapshot(&self) -> Result<VehicleSnapshot, FeedError> {
        match self {
            FeedSource::Live(client) => client.fetch_snapshot().await,
            FeedSource::Mock(mock) => Ok(mock.snapshot()),
        }
    }

    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FeedSource::Live(_) => "live",
            FeedSource::Mock(_) => "mock",
        }
    }
}

impl From<FeedClient> for FeedSource {
    fn from(client: FeedClient) -> Self {
        FeedSource::Live(client)
    }
}

impl From<MockFeed> for FeedSource {
    fn from(mock: MockFeed) -> Self {
        FeedSource::Mock(mock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LiveVehicleRecord, VehicleId};

    #[tokio::test]
    async fn mock_source_serves_snapshot() {
        let snapshot = VehicleSnapshot::new(vec![LiveVehicleRecord::new(
            VehicleId::new("V1"),
            "DL1PC0001".into(),
        )]);
        let source = FeedSource::from(MockFeed::new(snapshot.clone()));

        assert_eq!(source.kind(), "mock");
        assert_eq!(source.fetch_snapshot().await.unwrap(), snapshot);
    }
}
