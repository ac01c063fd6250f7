//! Real-time arrival predictions.

use serde::{Deserialize, Serialize};

use crate::domain::BusType;

/// A bus approaching a stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusArrival {
    pub bus_number: String,
    /// Seconds until arrival
    pub remaining_secs: u32,
    pub remaining_stops: u32,
    pub bus_type: BusType,
    pub low_floor: bool,
    pub station_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubwayTrainType {
    Express,
    Regular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Congestion {
    Low,
    Medium,
    High,
}

/// Direction of travel on a subway line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// A subway train approaching a station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubwayArrival {
    pub line: String,
    pub destination: String,
    /// Seconds until arrival
    pub remaining_secs: u32,
    pub train_type: SubwayTrainType,
    pub congestion: Congestion,
    pub direction: Direction,
    pub station_name: String,
}

/// Everything arriving at one station.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationBoard {
    #[serde(default)]
    pub bus: Vec<BusArrival>,
    #[serde(default)]
    pub subway: Vec<SubwayArrival>,
}

impl StationBoard {
    /// Count every prediction down by `secs`, stopping at zero.
    pub fn advance(&mut self, secs: u32) {
        for arrival in &mut self.bus {
            arrival.remaining_secs = arrival.remaining_secs.saturating_sub(secs);
        }
        for arrival in &mut self.subway {
            arrival.remaining_secs = arrival.remaining_secs.saturating_sub(secs);
        }
    }
}

/// Human-readable time until arrival: seconds under a minute, whole minutes above.
pub fn format_remaining(secs: u32) -> String {
    if secs < 60 {
        format!("{secs}s")
    } else {
        format!("{} min", secs / 60)
    }
}
