//! Vehicle relevance classification.
//!
//! Decides whether a live vehicle is relevant to a source -> destination
//! request, and how strongly.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::domain::{RouteId, StopId, TripId};
use crate::schedule::ScheduleIndex;

/// How a vehicle relates to the requested journey.
///
/// Variants are ordered strongest first, so sorting by `MatchKind` puts
/// exact trip matches ahead of route matches ahead of nearby buses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MatchKind {
    /// The vehicle is running a trip that calls at both stops.
    ExactTripMatch,
    /// The vehicle's route has some trip calling at both stops.
    RouteMatch,
    /// Unrelated service, but close to the source stop.
    NearbyBus,
}

impl MatchKind {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            MatchKind::ExactTripMatch => "Exact Trip Match",
            MatchKind::RouteMatch => "Route Match",
            MatchKind::NearbyBus => "Nearby Bus",
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifier for one request.
///
/// Holds the trips serving both requested stops and the routes owning
/// them, computed once per search rather than per vehicle.
#[derive(Debug, Clone)]
pub struct MatchClassifier {
    valid_trips: HashSet<TripId>,
    valid_routes: HashSet<RouteId>,
    nearby_radius_km: f64,
}

impl MatchClassifier {
    /// Create a classifier from precomputed trip and route sets.
    pub fn new(
        valid_trips: HashSet<TripId>,
        valid_routes: HashSet<RouteId>,
        nearby_radius_km: f64,
    ) -> Self {
        Self {
            valid_trips,
            valid_routes,
            nearby_radius_km,
        }
    }

    /// Build the classifier for a source/destination pair.
    pub fn for_stops(
        index: &ScheduleIndex,
        source: &StopId,
        destination: &StopId,
        nearby_radius_km: f64,
    ) -> Self {
        let valid_trips = index.valid_trips(source, destination);
        let valid_routes = index.routes_for_trips(&valid_trips);
        Self::new(valid_trips, valid_routes, nearby_radius_km)
    }

    /// Classify one vehicle. The first matching rule wins:
    ///
    /// 1. trip serves both stops -> [`MatchKind::ExactTripMatch`]
    /// 2. route serves both stops -> [`MatchKind::RouteMatch`]
    /// 3. within the nearby radius -> [`MatchKind::NearbyBus`]
    ///
    /// Returns `None` when no rule applies; the vehicle is dropped.
    pub fn classify(
        &self,
        trip_id: Option<&TripId>,
        route_id: Option<&RouteId>,
        distance_km: f64,
    ) -> Option<MatchKind> {
        if trip_id.is_some_and(|t| self.valid_trips.contains(t)) {
            Some(MatchKind::ExactTripMatch)
        } else if route_id.is_some_and(|r| self.valid_routes.contains(r)) {
            Some(MatchKind::RouteMatch)
        } else if distance_km <= self.nearby_radius_km {
            Some(MatchKind::NearbyBus)
        } else {
            None
        }
    }

    pub fn valid_trips(&self) -> &HashSet<TripId> {
        &self.valid_trips
    }

    pub fn valid_routes(&self) -> &HashSet<RouteId> {
        &self.valid_routes
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// A valid trip always classifies as exact, whatever the distance
        #[test]
        fn valid_trip_always_exact(distance in 0.0f64..20_000.0, on_route in any::<bool>()) {
            let c = MatchClassifier::new(
                [TripId::new("T1")].into_iter().collect(),
                [RouteId::new("R1")].into_iter().collect(),
                5.0,
            );
            let route = if on_route { RouteId::new("R1") } else { RouteId::new("R9") };
            prop_assert_eq!(
                c.classify(Some(&TripId::new("T1")), Some(&route), distance),
                Some(MatchKind::ExactTripMatch)
            );
        }

        /// Without trip or route overlap, only distance decides
        #[test]
        fn unrelated_vehicle_depends_on_distance(distance in 0.0f64..20.0) {
            let c = MatchClassifier::new(HashSet::new(), HashSet::new(), 5.0);
            let kind = c.classify(Some(&TripId::new("T9")), Some(&RouteId::new("R9")), distance);
            if distance <= 5.0 {
                prop_assert_eq!(kind, Some(MatchKind::NearbyBus));
            } else {
                prop_assert_eq!(kind, None);
            }
        }
    }
}
