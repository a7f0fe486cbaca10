//! Live vehicle search.
//!
//! Resolves the requested stops, classifies every vehicle in a snapshot
//! against them and builds one [`MatchResult`] per relevant vehicle.
//! Results keep snapshot order; see [`rank_matches`](super::rank_matches)
//! for an explicit ordering.

use tracing::{debug, trace};

use crate::domain::{
    Coordinate, Eta, LiveVehicleRecord, SeatLoad, SeatLoadProvider, SeatStatus, VehicleId,
    VehicleSnapshot,
};
use crate::schedule::{RouteInfo, ScheduleIndex, Stop};

use super::classify::{MatchClassifier, MatchKind};
use super::config::SearchConfig;

/// Request for a vehicle search: free-text stop names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Text to match against the source stop's name.
    pub source: String,

    /// Text to match against the destination stop's name.
    pub destination: String,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// One relevant vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// Route display names (`"Unknown"` when unresolvable).
    pub route: RouteInfo,

    /// Feed identifier of the vehicle.
    pub vehicle_id: VehicleId,

    /// Vehicle label, typically the licence plate.
    pub vehicle_label: String,

    /// Where the vehicle is.
    pub position: Coordinate,

    /// Great-circle distance to the source stop (km).
    pub distance_km: f64,

    /// Estimated minutes until the vehicle reaches the source stop.
    pub eta: Eta,

    /// How the vehicle relates to the request.
    pub kind: MatchKind,

    /// Seat load the status was bucketed from.
    pub seat_load: SeatLoad,

    /// Bucketed seat availability.
    pub seat_status: SeatStatus,
}

/// Result of a vehicle search.
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// Canonical source stop, if the query matched one.
    pub source: Option<Stop>,

    /// Canonical destination stop, if the query matched one.
    pub destination: Option<Stop>,

    /// Relevant vehicles, in snapshot order.
    pub matches: Vec<MatchResult>,

    /// Vehicles skipped for lack of a usable position.
    pub skipped_without_position: usize,
}

impl SearchResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether both stop queries resolved.
    pub fn stops_resolved(&self) -> bool {
        self.source.is_some() && self.destination.is_some()
    }
}

/// Vehicle search over a schedule index.
///
/// Borrowing everything keeps the engine free to build per request; the
/// index itself is shared and read-only.
pub struct SearchEngine<'a, S: SeatLoadProvider + ?Sized> {
    index: &'a ScheduleIndex,
    seats: &'a S,
    config: &'a SearchConfig,
}

impl<'a, S: SeatLoadProvider + ?Sized> SearchEngine<'a, S> {
    /// Create a new search engine.
    pub fn new(index: &'a ScheduleIndex, seats: &'a S, config: &'a SearchConfig) -> Self {
        Self {
            index,
            seats,
            config,
        }
    }

    /// Run a search against one snapshot.
    ///
    /// An unmatched source or destination query yields an empty result,
    /// not an error. When a query matches several stops the first in table
    /// order is used.
    pub fn search(&self, request: &SearchRequest, snapshot: &VehicleSnapshot) -> SearchResult {
        let source = self.index.first_stop_by_name(&request.source);
        let destination = self.index.first_stop_by_name(&request.destination);

        let (Some(source), Some(destination)) = (source, destination) else {
            debug!(
                source = %request.source,
                destination = %request.destination,
                source_found = source.is_some(),
                destination_found = destination.is_some(),
                "stop query did not resolve"
            );
            return SearchResult {
                source: source.cloned(),
                destination: destination.cloned(),
                ..SearchResult::empty()
            };
        };

        let mut result = self.search_between(source, destination, snapshot);
        result.source = Some(source.clone());
        result.destination = Some(destination.clone());
        result
    }

    /// Search between two already-resolved stops.
    ///
    /// The returned result leaves `source` and `destination` unset.
    pub fn search_between(
        &self,
        source: &Stop,
        destination: &Stop,
        snapshot: &VehicleSnapshot,
    ) -> SearchResult {
        let classifier = MatchClassifier::for_stops(
            self.index,
            &source.id,
            &destination.id,
            self.config.nearby_radius_km,
        );

        let mut matches = Vec::new();
        let mut skipped = 0;

        for vehicle in &snapshot.vehicles {
            let Some(position) = vehicle.usable_position() else {
                trace!(vehicle = %vehicle.id, "skipping vehicle without position");
                skipped += 1;
                continue;
            };

            if let Some(m) = self.evaluate(vehicle, position, source, &classifier) {
                matches.push(m);
            }
        }

        debug!(
            source = %source.id,
            destination = %destination.id,
            valid_trips = classifier.valid_trips().len(),
            valid_routes = classifier.valid_routes().len(),
            vehicles = snapshot.len(),
            skipped,
            matches = matches.len(),
            "vehicle search complete"
        );

        SearchResult {
            source: None,
            destination: None,
            matches,
            skipped_without_position: skipped,
        }
    }

    /// Classify one positioned vehicle and build its result.
    fn evaluate(
        &self,
        vehicle: &LiveVehicleRecord,
        position: Coordinate,
        source: &Stop,
        classifier: &MatchClassifier,
    ) -> Option<MatchResult> {
        let distance_km = position.distance_km(&source.position);

        let kind = classifier.classify(
            vehicle.trip_id.as_ref(),
            vehicle.route_id.as_ref(),
            distance_km,
        )?;

        let seat_load = self.seats.seat_load(vehicle);

        Some(MatchResult {
            route: self.index.route_info(vehicle.route_id.as_ref()),
            vehicle_id: vehicle.id.clone(),
            vehicle_label: vehicle.label.clone(),
            position,
            distance_km,
            eta: Eta::from_distance(distance_km, self.config.average_speed_kmh),
            kind,
            seat_load,
            seat_status: seat_load.status(),
        })
    }
}

/// Search with the default configuration, returning only the matches.
pub fn search<S: SeatLoadProvider + ?Sized>(
    source_query: &str,
    destination_query: &str,
    snapshot: &VehicleSnapshot,
    index: &ScheduleIndex,
    seats: &S,
) -> Vec<MatchResult> {
    let config = SearchConfig::default();
    SearchEngine::new(index, seats, &config)
        .search(&SearchRequest::new(source_query, destination_query), snapshot)
        .matches
}
