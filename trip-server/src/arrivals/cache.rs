//! Caching layer for arrival predictions.
//!
//! Boards are cached per station with a short TTL so repeated polls from the
//! client do not hit the feed. Errors are never cached.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use super::error::ArrivalsError;
use super::feed::ArrivalsFeed;
use super::types::{BusArrival, SubwayArrival};

/// Configuration for the arrivals cache.
#[derive(Debug, Clone)]
pub struct ArrivalsCacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries per arrival kind.
    pub max_capacity: u64,
}

impl Default for ArrivalsCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(30),
            max_capacity: 1000,
        }
    }
}

/// Arrivals feed with caching.
pub struct CachedArrivalsFeed<F> {
    feed: F,
    bus: MokaCache<String, Arc<Vec<BusArrival>>>,
    subway: MokaCache<String, Arc<Vec<SubwayArrival>>>,
}

impl<F: ArrivalsFeed> CachedArrivalsFeed<F> {
    /// Wrap `feed` with a cache built from `config`.
    pub fn new(feed: F, config: &ArrivalsCacheConfig) -> Self {
        Self {
            feed,
            bus: build_cache(config),
            subway: build_cache(config),
        }
    }

    /// Bus arrivals, using the cache if available.
    pub async fn bus_arrivals(
        &self,
        station_id: &str,
    ) -> Result<Arc<Vec<BusArrival>>, ArrivalsError> {
        if let Some(cached) = self.bus.get(station_id).await {
            return Ok(cached);
        }

        let entry = Arc::new(self.feed.bus_arrivals(station_id).await?);
        debug!(station = station_id, count = entry.len(), "cached buses");
        self.bus.insert(station_id.to_string(), entry.clone()).await;
        Ok(entry)
    }

    /// Subway arrivals, using the cache if available.
    pub async fn subway_arrivals(
        &self,
        station_id: &str,
    ) -> Result<Arc<Vec<SubwayArrival>>, ArrivalsError> {
        if let Some(cached) = self.subway.get(station_id).await {
            return Ok(cached);
        }

        let entry = Arc::new(self.feed.subway_arrivals(station_id).await?);
        debug!(station = station_id, count = entry.len(), "cached trains");
        self.subway
            .insert(station_id.to_string(), entry.clone())
            .await;
        Ok(entry)
    }

    /// Access the underlying feed for operations that bypass the cache.
    pub fn feed(&self) -> &F {
        &self.feed
    }
}

fn build_cache<V>(config: &ArrivalsCacheConfig) -> MokaCache<String, V>
where
    V: Clone + Send + Sync + 'static,
{
    MokaCache::builder()
        .time_to_live(config.ttl)
        .max_capacity(config.max_capacity)
        .build()
}
