//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedFeed;
use crate::domain::SeatLoadProvider;
use crate::matcher::SearchConfig;
use crate::schedule::ScheduleIndex;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Static GTFS schedule
    pub schedule: Arc<ScheduleIndex>,

    /// Cached live vehicle feed
    pub feed: Arc<CachedFeed>,

    /// Seat-load source for matched buses
    pub seats: Arc<dyn SeatLoadProvider>,

    /// Search configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        schedule: ScheduleIndex,
        feed: CachedFeed,
        seats: impl SeatLoadProvider + 'static,
        config: SearchConfig,
    ) -> Self {
        Self {
            schedule: Arc::new(schedule),
            feed: Arc::new(feed),
            seats: Arc::new(seats),
            config: Arc::new(config),
        }
    }
}
