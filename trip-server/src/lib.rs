//! Trip planning server.
//!
//! Answers "how do I get from here to there?" with three synthesized
//! multi-modal routes (recommended, fastest, cheapest), along with mocked
//! real-time arrivals, a trip cost estimate and a saved travel plan.

pub mod arrivals;
pub mod config;
pub mod cost;
pub mod domain;
pub mod places;
pub mod planner;
pub mod store;
pub mod web;
