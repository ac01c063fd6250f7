//! Domain types for the trip planner.
//!
//! Coordinates, synthesized routes and their timeline projection. These
//! are plain values: every planner call builds them fresh.

mod coordinate;
mod route;
mod timeline;

pub use coordinate::{Coordinate, EARTH_RADIUS_KM, haversine_km};
pub use route::{Route, RouteLeg, RouteType, TravelMode};
pub use timeline::{BusType, RouteOption, SeatType, StepDetails, StepPlace, TrainType, TransitStep};
