//! Live vehicle positions.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::geo::Coordinate;
use super::ids::{RouteId, TripId, VehicleId};
use super::seat::SeatLoad;

/// Label shown when a vehicle carries neither a label nor an id.
pub const UNKNOWN_LABEL: &str = "Not Available";

/// One vehicle as seen in one feed snapshot.
///
/// Records are transient: nothing tracks a vehicle across snapshots.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LiveVehicleRecord {
    /// Feed identifier (entity or vehicle id).
    pub id: VehicleId,

    /// Display label, typically the licence plate.
    pub label: String,

    /// Last reported position. Vehicles without one are never matched.
    #[serde(default)]
    pub position: Option<Coordinate>,

    /// Trip the vehicle reports it is running.
    #[serde(default)]
    pub trip_id: Option<TripId>,

    /// Route the vehicle reports it is running.
    #[serde(default)]
    pub route_id: Option<RouteId>,

    /// Seat load supplied with the record, if any.
    #[serde(default)]
    pub seat_load: Option<SeatLoad>,
}

impl LiveVehicleRecord {
    /// Create a record with no position, trip, route or seat load.
    pub fn new(id: VehicleId, label: String) -> Self {
        Self {
            id,
            label,
            position: None,
            trip_id: None,
            route_id: None,
            seat_load: None,
        }
    }

    pub fn with_position(mut self, lat: f64, lon: f64) -> Self {
        self.position = Some(Coordinate::new(lat, lon));
        self
    }

    pub fn with_trip(mut self, trip_id: impl Into<TripId>) -> Self {
        self.trip_id = Some(trip_id.into());
        self
    }

    pub fn with_route(mut self, route_id: impl Into<RouteId>) -> Self {
        self.route_id = Some(route_id.into());
        self
    }

    pub fn with_seat_load(mut self, load: SeatLoad) -> Self {
        self.seat_load = Some(load);
        self
    }

    /// Position if present and numerically usable.
    pub fn usable_position(&self) -> Option<Coordinate> {
        self.position.filter(Coordinate::is_finite)
    }
}

/// A point-in-time batch of live vehicles.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VehicleSnapshot {
    /// Vehicles in feed order.
    pub vehicles: Vec<LiveVehicleRecord>,

    /// When the feed says the snapshot was taken.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl VehicleSnapshot {
    pub fn new(vehicles: Vec<LiveVehicleRecord>) -> Self {
        Self {
            vehicles,
            timestamp: None,
        }
    }

    /// An empty snapshot, used when the feed is unavailable.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let v = LiveVehicleRecord::new(VehicleId::new("v1"), "DL1PC1234".to_string())
            .with_position(28.6, 77.2)
            .with_trip("T1")
            .with_route("R1");

        assert_eq!(v.position, Some(Coordinate::new(28.6, 77.2)));
        assert_eq!(v.trip_id, Some(TripId::new("T1")));
        assert_eq!(v.route_id, Some(RouteId::new("R1")));
        assert!(v.seat_load.is_none());
    }

    #[test]
    fn missing_position_is_unusable() {
        let v = LiveVehicleRecord::new(VehicleId::new("v1"), "x".to_string());
        assert!(v.usable_position().is_none());
    }

    #[test]
    fn non_finite_position_is_unusable() {
        let v = LiveVehicleRecord::new(VehicleId::new("v1"), "x".to_string())
            .with_position(f64::NAN, 77.2);
        assert!(v.usable_position().is_none());
    }

    #[test]
    fn snapshot_from_json() {
        let json = r#"{
            "vehicles": [
                {
                    "id": "v1",
                    "label": "DL1PC1234",
                    "position": { "lat": 28.6, "lon": 77.2 },
                    "trip_id": "T1",
                    "seat_load": 0.5
                },
                { "id": "v2", "label": "DL1PC5678" }
            ]
        }"#;

        let snapshot: VehicleSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.vehicles[0].seat_load, Some(SeatLoad::new(0.5)));
        assert!(snapshot.vehicles[1].position.is_none());
        assert!(snapshot.timestamp.is_none());
    }

    #[test]
    fn empty_snapshot() {
        assert!(VehicleSnapshot::empty().is_empty());
    }
}
