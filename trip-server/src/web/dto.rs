//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::arrivals::{BusArrival, SubwayArrival, format_remaining};
use crate::domain::Coordinate;

/// Endpoints of a route search, as query parameters.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    pub from_lat: f64,
    pub from_lng: f64,
    pub to_lat: f64,
    pub to_lng: f64,

    /// Optional display names for the endpoints
    pub from_name: Option<String>,
    pub to_name: Option<String>,
}

impl RouteQuery {
    pub fn origin(&self) -> Coordinate {
        named(self.from_lat, self.from_lng, self.from_name.as_deref())
    }

    pub fn destination(&self) -> Coordinate {
        named(self.to_lat, self.to_lng, self.to_name.as_deref())
    }

    /// Whether every coordinate is a finite number.
    pub fn is_finite(&self) -> bool {
        [self.from_lat, self.from_lng, self.to_lat, self.to_lng]
            .iter()
            .all(|v| v.is_finite())
    }
}

fn named(lat: f64, lng: f64, name: Option<&str>) -> Coordinate {
    let coordinate = Coordinate::new(lat, lng);
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => coordinate.with_name(name),
        None => coordinate,
    }
}

/// Request for a trip cost estimate.
#[derive(Debug, Deserialize)]
pub struct CostRequest {
    pub from: Coordinate,
    pub to: Coordinate,

    /// "route-1", "route-2" or "route-3"
    pub route_id: String,

    #[serde(default = "one")]
    pub participants: u32,

    #[serde(default = "one")]
    pub days: u32,
}

fn one() -> u32 {
    1
}

/// Free-text place query.
#[derive(Debug, Deserialize)]
pub struct PlaceQuery {
    #[serde(default)]
    pub q: String,

    /// Maximum suggestions (default 5, capped at 20)
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<&'static str>,
}

/// A search to add to the recent history.
#[derive(Debug, Deserialize)]
pub struct RecentSearchRequest {
    pub address: String,
}

#[derive(Debug, Serialize)]
pub struct RecentSearchesResponse {
    pub searches: Vec<String>,
}

/// A bus arrival with a human-readable countdown.
#[derive(Debug, Serialize)]
pub struct BusArrivalView {
    #[serde(flatten)]
    pub arrival: BusArrival,
    pub remaining: String,
}

impl From<BusArrival> for BusArrivalView {
    fn from(arrival: BusArrival) -> Self {
        Self {
            remaining: format_remaining(arrival.remaining_secs),
            arrival,
        }
    }
}

/// A subway arrival with a human-readable countdown.
#[derive(Debug, Serialize)]
pub struct SubwayArrivalView {
    #[serde(flatten)]
    pub arrival: SubwayArrival,
    pub remaining: String,
}

impl From<SubwayArrival> for SubwayArrivalView {
    fn from(arrival: SubwayArrival) -> Self {
        Self {
            remaining: format_remaining(arrival.remaining_secs),
            arrival,
        }
    }
}

/// Arrivals at one station.
#[derive(Debug, Serialize)]
pub struct ArrivalsResponse<T> {
    pub station: String,
    pub arrivals: Vec<T>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
