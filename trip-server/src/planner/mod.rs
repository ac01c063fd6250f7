//! Synthetic route planner.
//!
//! Classifies a trip by great-circle distance into a short, medium or long
//! regime and synthesizes three multi-leg alternatives (recommended,
//! fastest, cheapest) from fixed per-regime formulas. No network search is
//! involved: legs, fares and durations are derived from the distance alone.

mod config;
mod generate;
mod legs;
mod long;
mod medium;
mod regime;
mod short;
mod timeline;

#[cfg(test)]
mod generate_tests;

pub use config::PlannerConfig;
pub use generate::{Planner, generate_route_options, generate_routes};
pub use regime::DistanceRegime;
pub use timeline::{FLAT_FARE, project_route, project_routes};
