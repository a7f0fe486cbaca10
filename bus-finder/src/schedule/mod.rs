//! Static GTFS schedule.
//!
//! Loaded once at startup from `stops.txt`, `routes.txt`, `trips.txt` and
//! `stop_times.txt`, then indexed for stop-name lookup and trip/route
//! membership queries.

mod error;
mod index;
mod loader;
mod types;

pub use error::ScheduleError;
pub use index::ScheduleIndex;
pub use loader::{ROUTES_FILE, STOP_TIMES_FILE, STOPS_FILE, TRIPS_FILE};
pub use types::{Route, RouteInfo, Stop, StopTimeEntry, Trip, UNKNOWN_ROUTE_NAME};
