//! Domain types for the bus finder.
//!
//! Value types shared by the schedule index, the live feed and the search
//! engine: identifiers, coordinates, arrival estimates, seat load and live
//! vehicle records.

mod eta;
mod geo;
mod ids;
mod seat;
mod vehicle;

pub use eta::{DEFAULT_AVERAGE_SPEED_KMH, Eta, eta_minutes, eta_minutes_at};
pub use geo::{Coordinate, EARTH_RADIUS_KM, distance_km};
pub use ids::{RouteId, StopId, TripId, VehicleId};
pub use seat::{
    FixedSeatLoad, RandomSeatLoad, RecordedSeatLoad, SeatLoad, SeatLoadProvider, SeatState,
    SeatStatus, random_seat_map,
};
pub use vehicle::{LiveVehicleRecord, UNKNOWN_LABEL, VehicleSnapshot};
