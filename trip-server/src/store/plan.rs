//! The current travel plan and recent search history.

use std::sync::Mutex;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::Coordinate;

use super::error::StoreError;
use super::kv::KeyValueStore;

/// Key holding the current travel plan.
pub const PLAN_KEY: &str = "currentTravelPlan";

/// Key holding the recent search history.
pub const RECENT_SEARCHES_KEY: &str = "recentLocationSearches";

/// Maximum number of recent searches kept.
pub const MAX_RECENT_SEARCHES: usize = 5;

/// Trip parameters the user is working on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelPlan {
    pub origin: Coordinate,
    pub destination: Coordinate,
    #[serde(default)]
    pub departure_date: Option<NaiveDate>,
    /// "HH:MM", as entered
    #[serde(default)]
    pub departure_time: String,
    pub duration_days: u32,
    pub participants: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_route_id: Option<String>,
}

/// Typed access to plan data over any key-value store.
///
/// History updates are read-modify-write; they are serialised per
/// `PlanStore`, so share one instance rather than wrapping the same backing
/// store twice.
#[derive(Debug, Default)]
pub struct PlanStore<S> {
    store: S,
    history: Mutex<()>,
}

impl<S: KeyValueStore> PlanStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            history: Mutex::new(()),
        }
    }

    pub fn save_plan(&self, plan: &TravelPlan) -> Result<(), StoreError> {
        let json = serde_json::to_string(plan)?;
        self.store.set(PLAN_KEY, &json)
    }

    pub fn load_plan(&self) -> Result<Option<TravelPlan>, StoreError> {
        self.store
            .get(PLAN_KEY)?
            .map(|json| serde_json::from_str(&json))
            .transpose()
            .map_err(StoreError::from)
    }

    pub fn clear_plan(&self) -> Result<(), StoreError> {
        self.store.remove(PLAN_KEY)
    }

    /// Move `address` to the front of the history, dropping duplicates and
    /// anything past the cap. Returns the updated history.
    pub fn record_search(&self, address: &str) -> Result<Vec<String>, StoreError> {
        let address = address.trim();
        let _guard = self.history.lock().map_err(|_| StoreError::Poisoned)?;
        let mut searches = self.recent_searches()?;
        if address.is_empty() {
            return Ok(searches);
        }

        searches.retain(|s| s != address);
        searches.insert(0, address.to_string());
        searches.truncate(MAX_RECENT_SEARCHES);

        self.store
            .set(RECENT_SEARCHES_KEY, &serde_json::to_string(&searches)?)?;
        Ok(searches)
    }

    /// Recent searches, most recent first.
    pub fn recent_searches(&self) -> Result<Vec<String>, StoreError> {
        match self.store.get(RECENT_SEARCHES_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }
}
