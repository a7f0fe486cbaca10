//! Static schedule records.

use serde::Serialize;

use crate::domain::{Coordinate, RouteId, StopId, TripId};

/// Display name used when a route cannot be resolved.
pub const UNKNOWN_ROUTE_NAME: &str = "Unknown";

/// A stop from `stops.txt`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stop {
    pub id: StopId,
    pub name: String,
    pub position: Coordinate,
}

impl Stop {
    pub fn new(id: impl Into<StopId>, name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position: Coordinate::new(lat, lon),
        }
    }
}

/// A route from `routes.txt`.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub id: RouteId,
    /// Short public code, e.g. the bus number.
    pub short_name: String,
    pub long_name: String,
}

impl Route {
    pub fn new(
        id: impl Into<RouteId>,
        short_name: impl Into<String>,
        long_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            short_name: short_name.into(),
            long_name: long_name.into(),
        }
    }
}

/// A trip from `trips.txt`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: TripId,
    pub route_id: RouteId,
}

impl Trip {
    pub fn new(id: impl Into<TripId>, route_id: impl Into<RouteId>) -> Self {
        Self {
            id: id.into(),
            route_id: route_id.into(),
        }
    }
}

/// A `stop_times.txt` row reduced to the fact that a trip visits a stop.
#[derive(Debug, Clone, PartialEq)]
pub struct StopTimeEntry {
    pub trip_id: TripId,
    pub stop_id: StopId,
}

impl StopTimeEntry {
    pub fn new(trip_id: impl Into<TripId>, stop_id: impl Into<StopId>) -> Self {
        Self {
            trip_id: trip_id.into(),
            stop_id: stop_id.into(),
        }
    }
}

/// Route names for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
    pub short_name: String,
    pub long_name: String,
}

impl RouteInfo {
    /// Placeholder for routes missing from the static tables.
    pub fn unknown() -> Self {
        Self {
            short_name: UNKNOWN_ROUTE_NAME.to_string(),
            long_name: UNKNOWN_ROUTE_NAME.to_string(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.short_name == UNKNOWN_ROUTE_NAME && self.long_name == UNKNOWN_ROUTE_NAME
    }
}

impl From<&Route> for RouteInfo {
    fn from(route: &Route) -> Self {
        Self {
            short_name: route.short_name.clone(),
            long_name: route.long_name.clone(),
        }
    }
}
