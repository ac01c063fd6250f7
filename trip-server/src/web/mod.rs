//! Web layer for the trip planner.
//!
//! A JSON API over route generation, arrivals, cost estimates, place
//! lookup and the saved travel plan.

mod dto;
mod extract;
mod routes;
mod state;


pub use dto::*;
pub use extract::{ApiJson, ApiQuery};
pub use routes::{AppError, create_router};
pub use state::{AppState, SharedPlanStore};
