use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use trip_server::arrivals::{
    ArrivalsCacheConfig, CachedArrivalsFeed, MockArrivalsFeed, SAMPLE_STATION,
};
use trip_server::config::ServerConfig;
use trip_server::cost::CostRates;
use trip_server::planner::Planner;
use trip_server::store::{FileStore, KeyValueStore, MemoryStore};
use trip_server::web::{AppState, create_router};

/// How often the mock boards count down.
const ARRIVALS_TICK: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().expect("Invalid server configuration");

    // Arrivals: boards from disk if configured, else the built-in sample
    let mock = match &config.mock_arrivals_dir {
        Some(dir) => MockArrivalsFeed::from_dir(dir).expect("Failed to load mock arrivals"),
        None => {
            info!(station = SAMPLE_STATION, "using sample arrivals board");
            MockArrivalsFeed::sample()
        }
    };
    info!(
        stations = mock.available_stations().await.len(),
        "arrivals feed ready"
    );

    let cache_config = ArrivalsCacheConfig {
        ttl: config.arrivals_cache_ttl,
        ..ArrivalsCacheConfig::default()
    };
    let arrivals = CachedArrivalsFeed::new(mock, &cache_config);

    // Count the boards down in the background, as a live feed would
    let ticking = arrivals.feed().clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(ARRIVALS_TICK);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            ticking.advance(ARRIVALS_TICK.as_secs() as u32).await;
        }
    });

    let store: Box<dyn KeyValueStore> = match &config.store_dir {
        Some(dir) => {
            info!(dir = %dir.display(), "using file-backed plan store");
            Box::new(FileStore::new(dir))
        }
        None => {
            warn!("STORE_DIR not set; plans are kept in memory only");
            Box::new(MemoryStore::new())
        }
    };

    let state = AppState::new(Planner::default(), arrivals, store, CostRates::default());
    let app = create_router(state, config.static_dir.as_deref());

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("Failed to bind listener");
    info!(addr = %config.addr, "Travel App API Server listening");

    axum::serve(listener, app).await.expect("Server error");
}
