//! The arrivals feed abstraction.

use std::future::Future;

use super::error::ArrivalsError;
use super::types::{BusArrival, SubwayArrival};

/// Source of real-time arrival predictions for a station.
///
/// Lets the web layer and cache run against the mock feed or a live one.
pub trait ArrivalsFeed: Send + Sync {
    /// Buses arriving at `station_id`.
    fn bus_arrivals(
        &self,
        station_id: &str,
    ) -> impl Future<Output = Result<Vec<BusArrival>, ArrivalsError>> + Send;

    /// Subway trains arriving at `station_id`.
    fn subway_arrivals(
        &self,
        station_id: &str,
    ) -> impl Future<Output = Result<Vec<SubwayArrival>, ArrivalsError>> + Send;
}
