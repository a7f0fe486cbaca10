//! GTFS-realtime HTTP client.
//!
//! Fetches the VehiclePositions feed, decodes it and converts it into a
//! [`VehicleSnapshot`].

use std::time::Duration;

use tracing::debug;

use crate::domain::VehicleSnapshot;

use super::convert::decode_feed;
use super::error::FeedError;

/// Default VehiclePositions endpoint (Delhi open transit data).
pub const DEFAULT_FEED_URL: &str = "https://otd.delhi.gov.in/api/realtime/VehiclePositions.pb";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the feed client.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// VehiclePositions URL
    pub url: String,
    /// API key, sent as the `key` query parameter
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl FeedConfig {
    /// Create a new config for the given feed URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_URL)
    }
}

/// GTFS-realtime VehiclePositions client.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl FeedClient {
    /// Create a new feed client with the given configuration.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
            api_key: config.api_key,
        })
    }

    /// The configured feed URL, without the key.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and decode the current vehicle positions.
    pub async fn fetch_snapshot(&self) -> Result<VehicleSnapshot, FeedError> {
        let mut request = self.http.get(&self.url);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key)]);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(FeedError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FeedError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Api {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        let body = response.bytes().await?;
        let snapshot = decode_feed(body.as_ref())?;

        debug!(
            bytes = body.len(),
            vehicles = snapshot.len(),
            "fetched vehicle positions"
        );

        Ok(snapshot)
    }
}
