//! In-memory index over the static schedule.
//!
//! The four GTFS tables are joined once at startup into hash maps keyed by
//! stop and trip, so a search never rescans `stop_times.txt`. The index is
//! never mutated after construction and can be shared between concurrent
//! searches behind an `Arc`.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::domain::{RouteId, StopId, TripId};

use super::types::{Route, RouteInfo, Stop, StopTimeEntry, Trip};

/// Read-only lookup structure over stops, routes, trips and stop times.
#[derive(Debug, Default)]
pub struct ScheduleIndex {
    /// Stops in table order. Name search preserves this order.
    stops: Vec<Stop>,

    /// Lowercased stop names, parallel to `stops`.
    folded_names: Vec<String>,

    /// Stop id -> position in `stops`.
    stop_positions: HashMap<StopId, usize>,

    /// Route id -> route.
    routes: HashMap<RouteId, Route>,

    /// Trip id -> owning route.
    trip_routes: HashMap<TripId, RouteId>,

    /// Stop id -> every trip with a stop-time entry at that stop.
    trips_by_stop: HashMap<StopId, HashSet<TripId>>,
}

impl ScheduleIndex {
    /// Build the index from the four static tables.
    ///
    /// Duplicate stop, route or trip ids keep their first row. Stop-time
    /// entries pointing at unknown stops or trips are kept; they simply never
    /// produce a match.
    pub fn new(
        stops: Vec<Stop>,
        routes: Vec<Route>,
        trips: Vec<Trip>,
        stop_times: Vec<StopTimeEntry>,
    ) -> Self {
        let mut stop_positions = HashMap::with_capacity(stops.len());
        for (idx, stop) in stops.iter().enumerate() {
            stop_positions.entry(stop.id.clone()).or_insert(idx);
        }

        let folded_names = stops.iter().map(|s| s.name.to_lowercase()).collect();

        let mut route_map = HashMap::with_capacity(routes.len());
        for route in routes {
            route_map.entry(route.id.clone()).or_insert(route);
        }

        let mut trip_routes = HashMap::with_capacity(trips.len());
        for trip in trips {
            trip_routes.entry(trip.id).or_insert(trip.route_id);
        }

        let mut trips_by_stop: HashMap<StopId, HashSet<TripId>> = HashMap::new();
        for entry in stop_times {
            trips_by_stop
                .entry(entry.stop_id)
                .or_default()
                .insert(entry.trip_id);
        }

        debug!(
            stops = stops.len(),
            routes = route_map.len(),
            trips = trip_routes.len(),
            served_stops = trips_by_stop.len(),
            "built schedule index"
        );

        Self {
            stops,
            folded_names,
            stop_positions,
            routes: route_map,
            trip_routes,
            trips_by_stop,
        }
    }

    /// Stops whose name contains `query`, ignoring case, in table order.
    ///
    /// When several stops match, callers treat the first as canonical.
    pub fn find_stops_by_name(&self, query: &str) -> Vec<&Stop> {
        let needle = query.to_lowercase();
        self.stops
            .iter()
            .zip(&self.folded_names)
            .filter(|(_, name)| name.contains(&needle))
            .map(|(stop, _)| stop)
            .collect()
    }

    /// The first stop whose name contains `query`, ignoring case.
    pub fn first_stop_by_name(&self, query: &str) -> Option<&Stop> {
        let needle = query.to_lowercase();
        self.stops
            .iter()
            .zip(&self.folded_names)
            .find(|(_, name)| name.contains(&needle))
            .map(|(stop, _)| stop)
    }

    /// Look up a stop by id.
    pub fn stop(&self, id: &StopId) -> Option<&Stop> {
        self.stop_positions.get(id).map(|&idx| &self.stops[idx])
    }

    /// All trips with a stop-time entry at `stop_id`. Empty for unknown stops.
    pub fn trips_serving_stop(&self, stop_id: &StopId) -> HashSet<TripId> {
        self.trips_by_stop.get(stop_id).cloned().unwrap_or_default()
    }

    /// Trips that call at both stops.
    pub fn valid_trips(&self, source: &StopId, destination: &StopId) -> HashSet<TripId> {
        match (
            self.trips_by_stop.get(source),
            self.trips_by_stop.get(destination),
        ) {
            (Some(a), Some(b)) => {
                // Iterate the smaller set
                let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
                small.intersection(large).cloned().collect()
            }
            _ => HashSet::new(),
        }
    }

    /// Routes owning any of the given trips.
    pub fn routes_for_trips(&self, trip_ids: &HashSet<TripId>) -> HashSet<RouteId> {
        trip_ids
            .iter()
            .filter_map(|trip| self.route_of_trip(trip))
            .cloned()
            .collect()
    }

    /// Display names for a route; `("Unknown", "Unknown")` when the id is
    /// absent or not in the routes table.
    pub fn route_info(&self, route_id: Option<&RouteId>) -> RouteInfo {
        route_id
            .and_then(|id| self.routes.get(id))
            .map(RouteInfo::from)
            .unwrap_or_else(RouteInfo::unknown)
    }

    /// The route a trip belongs to.
    pub fn route_of_trip(&self, trip_id: &TripId) -> Option<&RouteId> {
        self.trip_routes.get(trip_id)
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn trip_count(&self) -> usize {
        self.trip_routes.len()
    }
}
