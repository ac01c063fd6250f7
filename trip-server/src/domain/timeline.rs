//! Timeline representation of routes.
//!
//! A [`RouteOption`] is the same route as a [`super::Route`], anchored to
//! absolute departure and arrival instants, with per-mode details attached
//! to every step.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Coordinate, RouteType, TravelMode};

/// Kind of bus service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusType {
    Express,
    Regular,
    Local,
}

/// Intercity train class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainType {
    #[serde(rename = "KTX")]
    Ktx,
    #[serde(rename = "ITX")]
    Itx,
    Mugunghwa,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatType {
    Standard,
    First,
}

/// Mode-specific details of a timeline step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum StepDetails {
    Walk {
        instruction: String,
    },
    Subway {
        line: String,
        stops: u32,
        fare: u32,
        express: bool,
    },
    Bus {
        bus_number: String,
        stops: u32,
        fare: u32,
        bus_type: BusType,
    },
    Train {
        train_type: TrainType,
        train_number: String,
        fare: u32,
        seat_type: SeatType,
    },
}

impl StepDetails {
    /// Fare charged for this step; `None` for walking.
    pub fn fare(&self) -> Option<u32> {
        match self {
            StepDetails::Walk { .. } => None,
            StepDetails::Subway { fare, .. }
            | StepDetails::Bus { fare, .. }
            | StepDetails::Train { fare, .. } => Some(*fare),
        }
    }

    /// The travel mode these details describe.
    pub fn mode(&self) -> TravelMode {
        match self {
            StepDetails::Walk { .. } => TravelMode::Walk,
            StepDetails::Subway { .. } => TravelMode::Subway,
            StepDetails::Bus { .. } => TravelMode::Bus,
            StepDetails::Train { .. } => TravelMode::Train,
        }
    }
}

/// A named endpoint of a timeline step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepPlace {
    pub name: String,
    pub location: Coordinate,
}

impl From<&Coordinate> for StepPlace {
    fn from(location: &Coordinate) -> Self {
        Self {
            name: location.display_name(),
            location: location.clone(),
        }
    }
}

/// One step of a route on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitStep {
    pub mode: TravelMode,
    pub from: StepPlace,
    pub to: StepPlace,
    /// Minutes
    pub duration: u32,
    /// Meters
    pub distance: u32,
    pub details: StepDetails,
}

/// A route anchored in time for timeline display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOption {
    pub id: String,
    #[serde(rename = "type")]
    pub route_type: RouteType,
    pub total_duration: u32,
    pub total_cost: u32,
    pub total_distance: u32,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub steps: Vec<TransitStep>,
}

impl RouteOption {
    /// Minutes between departure and arrival.
    pub fn timeline_minutes(&self) -> i64 {
        self.arrival_time
            .signed_duration_since(self.departure_time)
            .num_minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_tagged_by_type() {
        let bus = StepDetails::Bus {
            bus_number: "146".into(),
            stops: 3,
            fare: 1400,
            bus_type: BusType::Regular,
        };
        let json = serde_json::to_value(&bus).unwrap();
        assert_eq!(json["type"], "bus");
        assert_eq!(json["busNumber"], "146");
        assert_eq!(json["busType"], "regular");

        let train = StepDetails::Train {
            train_type: TrainType::Ktx,
            train_number: "KTX-101".into(),
            fare: 32500,
            seat_type: SeatType::Standard,
        };
        let json = serde_json::to_value(&train).unwrap();
        assert_eq!(json["type"], "train");
        assert_eq!(json["trainType"], "KTX");
        assert_eq!(json["seatType"], "standard");
    }

    #[test]
    fn details_deserialize() {
        let json = r#"{"type":"subway","line":"2호선","stops":4,"fare":1400,"express":false}"#;
        let details: StepDetails = serde_json::from_str(json).unwrap();
        assert_eq!(
            details,
            StepDetails::Subway {
                line: "2호선".into(),
                stops: 4,
                fare: 1400,
                express: false,
            }
        );
        assert_eq!(details.mode(), TravelMode::Subway);
    }

    #[test]
    fn fare_by_variant() {
        let walk = StepDetails::Walk {
            instruction: "walk".into(),
        };
        assert_eq!(walk.fare(), None);

        let subway = StepDetails::Subway {
            line: "1호선".into(),
            stops: 1,
            fare: 1400,
            express: false,
        };
        assert_eq!(subway.fare(), Some(1400));
    }

    #[test]
    fn step_place_uses_display_name() {
        let c = Coordinate::new(37.0, 127.0).with_address("서울특별시");
        let place = StepPlace::from(&c);
        assert_eq!(place.name, "서울특별시");
        assert_eq!(place.location, c);
    }
}
