//! Persistence for client-side state: the current travel plan and the
//! recent search history.
//!
//! Stores are plain string key-value maps; `PlanStore` layers the typed
//! JSON documents on top.

mod error;
mod kv;
mod plan;

pub use error::StoreError;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use plan::{MAX_RECENT_SEARCHES, PLAN_KEY, PlanStore, RECENT_SEARCHES_KEY, TravelPlan};
