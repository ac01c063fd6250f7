//! Synthesized routes and their legs.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Mode of travel for a single leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Walk,
    Bus,
    Subway,
    Train,
}

impl TravelMode {
    /// Returns true for modes that ride a vehicle.
    pub fn is_transit(&self) -> bool {
        !matches!(self, TravelMode::Walk)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Walk => "walk",
            TravelMode::Bus => "bus",
            TravelMode::Subway => "subway",
            TravelMode::Train => "train",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three route archetypes produced by every generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteType {
    Recommended,
    Fastest,
    Cheapest,
}

impl RouteType {
    /// All route types, in output order.
    pub const ALL: [RouteType; 3] = [
        RouteType::Recommended,
        RouteType::Fastest,
        RouteType::Cheapest,
    ];

    /// Stable route identifier.
    ///
    /// Ids depend only on the type, so a selected route id stays valid when
    /// routes are regenerated for different coordinates.
    pub fn route_id(&self) -> &'static str {
        match self {
            RouteType::Recommended => "route-1",
            RouteType::Fastest => "route-2",
            RouteType::Cheapest => "route-3",
        }
    }

    /// Inverse of [`RouteType::route_id`].
    pub fn from_route_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.route_id() == id)
    }

    /// Map highlight colour.
    pub fn color(&self) -> &'static str {
        match self {
            RouteType::Recommended => "#3B82F6",
            RouteType::Fastest => "#EF4444",
            RouteType::Cheapest => "#10B981",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            RouteType::Recommended => "Recommended",
            RouteType::Fastest => "Fastest",
            RouteType::Cheapest => "Cheapest",
        }
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One uninterrupted segment of a route using a single mode.
///
/// Walk legs may have zero length: a leg that ends exactly where the
/// previous vehicle stopped is kept rather than dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteLeg {
    pub mode: TravelMode,
    pub from: Coordinate,
    pub to: Coordinate,
    /// Minutes
    pub duration: u32,
    /// Meters
    pub distance: u32,
    pub instruction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_color: Option<String>,
}

/// One complete route alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    #[serde(rename = "type")]
    pub route_type: RouteType,
    pub name: String,
    /// Minutes
    pub duration: u32,
    /// Won, no subunits
    pub cost: u32,
    pub transfers: u32,
    /// Meters
    pub distance: u32,
    pub color: String,
    pub steps: Vec<RouteLeg>,
}

impl Route {
    /// Create a route of the given type; id, name and colour follow the type.
    pub fn new(
        route_type: RouteType,
        duration: u32,
        cost: u32,
        transfers: u32,
        distance: u32,
        steps: Vec<RouteLeg>,
    ) -> Self {
        Self {
            id: route_type.route_id().to_string(),
            route_type,
            name: route_type.label().to_string(),
            duration,
            cost,
            transfers,
            distance,
            color: route_type.color().to_string(),
            steps,
        }
    }

    /// Sum of leg durations in minutes.
    pub fn leg_duration_total(&self) -> u32 {
        self.steps.iter().map(|s| s.duration).sum()
    }

    /// Sum of leg distances in meters.
    pub fn leg_distance_total(&self) -> u32 {
        self.steps.iter().map(|s| s.distance).sum()
    }

    /// Returns true if every leg starts where the previous one ended.
    pub fn is_connected(&self) -> bool {
        self.steps.windows(2).all(|w| w[0].to == w[1].from)
    }
}
