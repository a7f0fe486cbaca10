//! GTFS CSV loading.
//!
//! Reads `stops.txt`, `routes.txt`, `trips.txt` and `stop_times.txt` from a
//! directory. Only the columns the index needs are deserialized; everything
//! else in the feed is ignored.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::info;

use super::error::ScheduleError;
use super::index::ScheduleIndex;
use super::types::{Route, Stop, StopTimeEntry, Trip};

pub const STOPS_FILE: &str = "stops.txt";
pub const ROUTES_FILE: &str = "routes.txt";
pub const TRIPS_FILE: &str = "trips.txt";
pub const STOP_TIMES_FILE: &str = "stop_times.txt";

#[derive(Debug, Deserialize)]
struct StopRow {
    stop_id: String,
    #[serde(default)]
    stop_name: String,
    #[serde(default)]
    stop_lat: String,
    #[serde(default)]
    stop_lon: String,
}

#[derive(Debug, Deserialize)]
struct RouteRow {
    route_id: String,
    #[serde(default)]
    route_short_name: String,
    #[serde(default)]
    route_long_name: String,
}

#[derive(Debug, Deserialize)]
struct TripRow {
    route_id: String,
    trip_id: String,
}

#[derive(Debug, Deserialize)]
struct StopTimeRow {
    trip_id: String,
    stop_id: String,
}

/// Parse a coordinate column. Blank or malformed values become NaN so one
/// bad stop cannot prevent the schedule from loading.
fn parse_coordinate(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}

impl From<StopRow> for Stop {
    fn from(row: StopRow) -> Self {
        Stop::new(
            row.stop_id,
            row.stop_name,
            parse_coordinate(&row.stop_lat),
            parse_coordinate(&row.stop_lon),
        )
    }
}

impl From<RouteRow> for Route {
    fn from(row: RouteRow) -> Self {
        Route::new(row.route_id, row.route_short_name, row.route_long_name)
    }
}

impl From<TripRow> for Trip {
    fn from(row: TripRow) -> Self {
        Trip::new(row.trip_id, row.route_id)
    }
}

impl From<StopTimeRow> for StopTimeEntry {
    fn from(row: StopTimeRow) -> Self {
        StopTimeEntry::new(row.trip_id, row.stop_id)
    }
}

/// Read every row of a CSV table into `T`.
fn read_table<R, T>(path: &Path) -> Result<Vec<T>, ScheduleError>
where
    R: DeserializeOwned,
    T: From<R>,
{
    if !path.exists() {
        return Err(ScheduleError::MissingFile(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|source| ScheduleError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    reader
        .into_deserialize::<R>()
        .map(|row| {
            row.map(T::from).map_err(|source| ScheduleError::Csv {
                path: path.to_path_buf(),
                source,
            })
        })
        .collect()
}

impl ScheduleIndex {
    /// Load and index the GTFS tables found in `dir`.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, ScheduleError> {
        let dir = dir.as_ref();
        let table = |name: &str| -> PathBuf { dir.join(name) };

        let stops: Vec<Stop> = read_table::<StopRow, _>(&table(STOPS_FILE))?;
        let routes: Vec<Route> = read_table::<RouteRow, _>(&table(ROUTES_FILE))?;
        let trips: Vec<Trip> = read_table::<TripRow, _>(&table(TRIPS_FILE))?;
        let stop_times: Vec<StopTimeEntry> =
            read_table::<StopTimeRow, _>(&table(STOP_TIMES_FILE))?;

        let stop_time_rows = stop_times.len();
        let index = ScheduleIndex::new(stops, routes, trips, stop_times);

        info!(
            dir = %dir.display(),
            stops = index.stop_count(),
            routes = index.route_count(),
            trips = index.trip_count(),
            stop_times = stop_time_rows,
            "loaded GTFS schedule"
        );

        Ok(index)
    }
}
