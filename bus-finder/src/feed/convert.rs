//! Conversion from GTFS-realtime messages to domain snapshots.

use chrono::DateTime;
use gtfs_realtime::{FeedEntity, FeedMessage, VehiclePosition};
use prost::Message;
use tracing::{debug, trace};

use crate::domain::{
    Coordinate, LiveVehicleRecord, RouteId, TripId, UNKNOWN_LABEL, VehicleId, VehicleSnapshot,
};

use super::error::FeedError;

/// Decode a protobuf VehiclePositions body into a snapshot.
pub fn decode_feed(body: &[u8]) -> Result<VehicleSnapshot, FeedError> {
    let feed = FeedMessage::decode(body)?;
    Ok(convert_feed(&feed))
}

/// Convert a decoded feed into a vehicle snapshot.
///
/// Entities without a vehicle position are skipped. Vehicles without a
/// position are kept with `position: None`; the search skips them.
pub fn convert_feed(feed: &FeedMessage) -> VehicleSnapshot {
    let vehicles: Vec<_> = feed.entity.iter().filter_map(convert_entity).collect();

    let skipped = feed.entity.len() - vehicles.len();
    if skipped > 0 {
        debug!(skipped, "feed entities without vehicle position");
    }

    let timestamp = feed
        .header
        .timestamp
        .and_then(|ts| i64::try_from(ts).ok())
        .and_then(|ts| DateTime::from_timestamp(ts, 0));

    VehicleSnapshot {
        vehicles,
        timestamp,
    }
}

fn convert_entity(entity: &FeedEntity) -> Option<LiveVehicleRecord> {
    let Some(vp) = entity.vehicle.as_ref() else {
        trace!(entity = %entity.id, "entity has no vehicle");
        return None;
    };
    Some(convert_vehicle(&entity.id, vp))
}

fn convert_vehicle(entity_id: &str, vp: &VehiclePosition) -> LiveVehicleRecord {
    let descriptor = vp.vehicle.as_ref();

    let id = descriptor
        .and_then(|d| non_empty(d.id.as_deref()))
        .unwrap_or(entity_id);

    let label = descriptor
        .and_then(|d| non_empty(d.label.as_deref()).or_else(|| non_empty(d.id.as_deref())))
        .unwrap_or(UNKNOWN_LABEL);

    let position = vp
        .position
        .as_ref()
        .map(|p| Coordinate::new(f64::from(p.latitude), f64::from(p.longitude)));

    let trip = vp.trip.as_ref();

    LiveVehicleRecord {
        id: VehicleId::new(id),
        label: label.to_string(),
        position,
        trip_id: trip
            .and_then(|t| non_empty(t.trip_id.as_deref()))
            .map(TripId::new),
        route_id: trip
            .and_then(|t| non_empty(t.route_id.as_deref()))
            .map(RouteId::new),
        seat_load: None,
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
