//! Live feed error types.

use std::path::PathBuf;

/// Errors from fetching or loading a vehicle snapshot.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid API key or unauthorized
    #[error("unauthorized: check BUS_FINDER_FEED_KEY")]
    Unauthorized,

    /// Rate limited by the feed provider
    #[error("rate limited by feed provider")]
    RateLimited,

    /// Feed returned an error status code
    #[error("feed error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not a valid GTFS-realtime message
    #[error("protobuf decode error: {0}")]
    Decode(#[from] prost::DecodeError),

    /// Mock snapshot could not be read
    #[error("failed to read mock feed {path}: {source}")]
    MockIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Mock snapshot was not valid JSON
    #[error("failed to parse mock feed {path}: {source}")]
    MockJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
