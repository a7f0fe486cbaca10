//! Mock feed for development without network access.
//!
//! Serves a vehicle snapshot loaded from a JSON file as if it were the live
//! feed. The file holds a serialized [`VehicleSnapshot`]:
//!
//! ```json
//! {
//!   "vehicles": [
//!     { "id": "V1", "label": "DL1PC0001",
//!       "position": { "lat": 28.6, "lon": 77.2 },
//!       "trip_id": "T1", "route_id": "R1", "seat_load": 0.3 }
//!   ]
//! }
//! ```

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::domain::VehicleSnapshot;

use super::error::FeedError;

/// Mock feed serving a fixed snapshot.
#[derive(Debug, Clone)]
pub struct MockFeed {
    snapshot: Arc<VehicleSnapshot>,
}

impl MockFeed {
    /// Wrap an in-memory snapshot.
    pub fn new(snapshot: VehicleSnapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
        }
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FeedError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|source| FeedError::MockIo {
            path: path.to_path_buf(),
            source,
        })?;

        let snapshot: VehicleSnapshot =
            serde_json::from_str(&json).map_err(|source| FeedError::MockJson {
                path: path.to_path_buf(),
                source,
            })?;

        info!(path = %path.display(), vehicles = snapshot.len(), "loaded mock feed");

        Ok(Self::new(snapshot))
    }

    /// The snapshot this mock serves.
    pub fn snapshot(&self) -> VehicleSnapshot {
        (*self.snapshot).clone()
    }
}
