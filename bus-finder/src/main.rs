use bus_finder::cache::CachedFeed;
use bus_finder::config::AppConfig;
use bus_finder::domain::{RandomSeatLoad, RecordedSeatLoad};
use bus_finder::feed::{FeedClient, FeedSource, MockFeed};
use bus_finder::schedule::ScheduleIndex;
use bus_finder::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    // Load static schedule (fail fast if unavailable)
    let schedule =
        ScheduleIndex::load_dir(&config.gtfs_dir).expect("Failed to load GTFS schedule");

    let source = match &config.mock_feed {
        Some(path) => FeedSource::Mock(MockFeed::load(path).expect("Failed to load mock feed")),
        None => {
            let client =
                FeedClient::new(config.feed.clone()).expect("Failed to create feed client");
            info!(url = client.url(), "using live vehicle feed");
            FeedSource::Live(client)
        }
    };
    info!(source = source.kind(), ttl = ?config.cache.ttl, "vehicle feed configured");

    let feed = CachedFeed::new(source, &config.cache);

    // Seat loads carried by the feed win; otherwise a random placeholder
    let seats = RecordedSeatLoad::new(RandomSeatLoad);

    let state = AppState::new(schedule, feed, seats, config.search.clone());
    let app = create_router(state);

    info!("Bus finder listening on http://{}", config.addr);
    info!("API Endpoints:");
    info!("  GET  /health                  - Health check");
    info!("  POST /search                  - Search buses (form)");
    info!("  GET  /api/search              - Search buses (query)");
    info!("  GET  /api/stops/search        - Search stops by name");
    info!("  GET  /api/stops/:stop_id      - Stop details");
    info!("  GET  /bus/:bus_id/seats       - Seat map");

    let listener = tokio::net::TcpListener::bind(config.addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
