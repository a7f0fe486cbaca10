//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::SeatState;
use crate::matcher::{MatchResult, SearchResult};
use crate::schedule::Stop;

/// Request to search for buses between two stops.
///
/// Accepted both as a form body and as a query string.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    /// Free-text source stop name
    pub source: String,

    /// Free-text destination stop name
    pub destination: String,

    /// Rank results (strength, then ETA) instead of feed order
    #[serde(default)]
    pub sort: bool,
}

/// Search results.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Source query as submitted
    pub source: String,

    /// Destination query as submitted
    pub destination: String,

    /// Stop the source query resolved to
    pub source_stop: Option<StopResult>,

    /// Stop the destination query resolved to
    pub destination_stop: Option<StopResult>,

    /// Relevant buses
    pub buses: Vec<BusResult>,
}

impl SearchResponse {
    /// Build the response for `params` from a search result and the matches
    /// to report (possibly re-ordered).
    pub fn new(params: &SearchParams, result: &SearchResult, matches: &[MatchResult]) -> Self {
        Self {
            source: params.source.clone(),
            destination: params.destination.clone(),
            source_stop: result.source.as_ref().map(StopResult::from_stop),
            destination_stop: result.destination.as_ref().map(StopResult::from_stop),
            buses: matches.iter().map(BusResult::from_match).collect(),
        }
    }
}

/// A bus in search results.
#[derive(Debug, Serialize)]
pub struct BusResult {
    /// Route short name (e.g., "034")
    pub bus_number: String,

    /// Route long name
    pub bus_name: String,

    /// Vehicle label, usually the licence plate
    pub license_plate: String,

    pub lat: f64,
    pub lon: f64,

    /// Arrival estimate at the source stop (e.g., "9.0 min")
    pub eta: String,

    /// "Exact Trip Match", "Route Match" or "Nearby Bus"
    #[serde(rename = "match")]
    pub match_kind: String,

    /// "Low", "Medium" or "High" seat availability
    pub seats: String,
}

impl BusResult {
    /// Create from a search match.
    pub fn from_match(m: &MatchResult) -> Self {
        Self {
            bus_number: m.route.short_name.clone(),
            bus_name: m.route.long_name.clone(),
            license_plate: m.vehicle_label.clone(),
            lat: m.position.lat,
            lon: m.position.lon,
            eta: m.eta.to_string(),
            match_kind: m.kind.label().to_string(),
            seats: m.seat_status.label().to_string(),
        }
    }
}

/// Request to search stops by name.
#[derive(Debug, Deserialize)]
pub struct StopSearchRequest {
    /// Search query
    pub q: String,

    /// Maximum results (default 10, max 50)
    pub limit: Option<usize>,
}

/// Stop search results.
#[derive(Debug, Serialize)]
pub struct StopSearchResponse {
    pub stops: Vec<StopResult>,
}

/// A stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopResult {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl StopResult {
    /// Create from a schedule stop.
    pub fn from_stop(stop: &Stop) -> Self {
        Self {
            id: stop.id.as_str().to_string(),
            name: stop.name.clone(),
            lat: stop.position.lat,
            lon: stop.position.lon,
        }
    }
}

/// Placeholder seat map for one bus.
#[derive(Debug, Serialize)]
pub struct SeatMapResponse {
    pub bus_id: String,
    pub seats: Vec<SeatResult>,
}

impl SeatMapResponse {
    /// Number seats from 1 in the order given.
    pub fn new(bus_id: String, states: Vec<SeatState>) -> Self {
        let seats = states
            .into_iter()
            .enumerate()
            .map(|(i, status)| SeatResult { id: i + 1, status })
            .collect();
        Self { bus_id, seats }
    }
}

/// One seat.
#[derive(Debug, Serialize)]
pub struct SeatResult {
    pub id: usize,
    pub status: SeatState,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
