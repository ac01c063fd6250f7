//! Route generation entry points.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::{Coordinate, Route, RouteOption};

use super::config::PlannerConfig;
use super::legs::whole;
use super::long::long_distance_routes;
use super::medium::medium_distance_routes;
use super::regime::DistanceRegime;
use super::short::short_distance_routes;
use super::timeline::project_routes;

/// Synthesizes the recommended, fastest and cheapest routes for a trip.
///
/// Generation is a pure function of the two coordinates (plus the clock,
/// for timeline anchoring), so a `Planner` can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    /// Create a new planner.
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// The regime a trip between the two points falls into.
    pub fn regime(&self, origin: &Coordinate, destination: &Coordinate) -> DistanceRegime {
        DistanceRegime::classify(origin.distance_km(destination), &self.config)
    }

    /// Generate the three routes, in recommended / fastest / cheapest order.
    pub fn generate_routes(&self, origin: &Coordinate, destination: &Coordinate) -> [Route; 3] {
        let distance_km = origin.distance_km(destination);
        let distance_m = whole(distance_km * 1000.0);
        let regime = DistanceRegime::classify(distance_km, &self.config);

        debug!(
            origin = %origin.display_name(),
            destination = %destination.display_name(),
            distance_km,
            %regime,
            "generating routes"
        );

        match regime {
            DistanceRegime::Long => {
                long_distance_routes(origin, destination, distance_km, distance_m)
            }
            DistanceRegime::Medium => {
                medium_distance_routes(origin, destination, distance_km, distance_m)
            }
            DistanceRegime::Short => {
                short_distance_routes(origin, destination, distance_km, distance_m)
            }
        }
    }

    /// Generate the routes and anchor them on a timeline starting at `now`.
    pub fn generate_route_options_at(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        now: DateTime<Utc>,
    ) -> [RouteOption; 3] {
        project_routes(&self.generate_routes(origin, destination), now)
    }

    /// Generate the routes and anchor them on a timeline starting now.
    pub fn generate_route_options(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> [RouteOption; 3] {
        self.generate_route_options_at(origin, destination, Utc::now())
    }
}

/// Generate routes with the default thresholds.
pub fn generate_routes(origin: &Coordinate, destination: &Coordinate) -> [Route; 3] {
    Planner::default().generate_routes(origin, destination)
}

/// Generate timeline options with the default thresholds, departing now.
pub fn generate_route_options(origin: &Coordinate, destination: &Coordinate) -> [RouteOption; 3] {
    Planner::default().generate_route_options(origin, destination)
}
