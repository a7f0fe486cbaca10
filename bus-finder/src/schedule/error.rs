//! Schedule loading errors.

use std::path::PathBuf;

/// Errors that can occur while loading the static GTFS tables.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// A required table is not present in the GTFS directory
    #[error("missing GTFS table: {}", .0.display())]
    MissingFile(PathBuf),

    /// The table could not be opened or read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be parsed
    #[error("malformed row in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ScheduleError::MissingFile(PathBuf::from("gtfs/stops.txt"));
        assert_eq!(err.to_string(), "missing GTFS table: gtfs/stops.txt");

        let err = ScheduleError::Io {
            path: PathBuf::from("gtfs/trips.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to read gtfs/trips.txt: denied");
    }
}
