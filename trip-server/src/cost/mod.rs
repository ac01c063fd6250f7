//! Trip cost estimation.
//!
//! Transportation comes from the fares on the chosen route option; food,
//! activities and accommodation are flat per-person or per-night rates.

mod error;
mod estimate;
mod rates;

pub use error::CostError;
pub use estimate::{
    AccommodationCost, ActivitiesCost, CostBreakdown, FoodCost, TransportationCost, estimate_cost,
    route_fare,
};
pub use rates::CostRates;
