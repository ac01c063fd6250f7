//! Real-time arrival predictions for bus stops and subway stations.
//!
//! The feed is mocked: boards are fixed, either built in or loaded from
//! JSON files, and wrapped in a short-lived cache.

mod cache;
mod error;
mod feed;
mod mock;
mod types;

pub use cache::{ArrivalsCacheConfig, CachedArrivalsFeed};
pub use error::ArrivalsError;
pub use feed::ArrivalsFeed;
pub use mock::{MockArrivalsFeed, SAMPLE_STATION};
pub use types::{
    BusArrival, Congestion, Direction, StationBoard, SubwayArrival, SubwayTrainType,
    format_remaining,
};
