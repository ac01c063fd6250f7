//! Application state for the web layer.

use std::sync::Arc;

use crate::arrivals::{CachedArrivalsFeed, MockArrivalsFeed};
use crate::cost::CostRates;
use crate::planner::Planner;
use crate::store::{KeyValueStore, PlanStore};

/// Plan store over whichever backend the server was configured with.
pub type SharedPlanStore = PlanStore<Box<dyn KeyValueStore>>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub planner: Arc<Planner>,

    /// Cached arrivals feed
    pub arrivals: Arc<CachedArrivalsFeed<MockArrivalsFeed>>,

    /// Current plan and recent searches
    pub plans: Arc<SharedPlanStore>,

    pub rates: Arc<CostRates>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        planner: Planner,
        arrivals: CachedArrivalsFeed<MockArrivalsFeed>,
        store: Box<dyn KeyValueStore>,
        rates: CostRates,
    ) -> Self {
        Self {
            planner: Arc::new(planner),
            arrivals: Arc::new(arrivals),
            plans: Arc::new(PlanStore::new(store)),
            rates: Arc::new(rates),
        }
    }
}
