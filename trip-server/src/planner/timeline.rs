//! Projection of routes onto a departure timeline.

use chrono::{DateTime, Duration, Utc};

use crate::domain::{
    BusType, Route, RouteLeg, RouteOption, SeatType, StepDetails, StepPlace, TrainType, TransitStep,
    TravelMode,
};

/// Flat fare for a single subway or bus ride.
pub const FLAT_FARE: u32 = 1400;

const DEFAULT_SUBWAY_LINE: &str = "2호선";
const DEFAULT_BUS_NUMBER: &str = "146";
const TRAIN_NUMBER: &str = "KTX-101";

/// Anchor one route at `departure`.
///
/// The option id comes from the route type, not from `route.id`.
pub fn project_route(route: &Route, departure: DateTime<Utc>) -> RouteOption {
    RouteOption {
        id: route.route_type.route_id().to_string(),
        route_type: route.route_type,
        total_duration: route.duration,
        total_cost: route.cost,
        total_distance: route.distance,
        departure_time: departure,
        arrival_time: departure + Duration::minutes(i64::from(route.duration)),
        steps: route.steps.iter().map(transit_step).collect(),
    }
}

/// Anchor all three routes at the same instant.
pub fn project_routes(routes: &[Route; 3], now: DateTime<Utc>) -> [RouteOption; 3] {
    routes.each_ref().map(|route| project_route(route, now))
}

fn transit_step(leg: &RouteLeg) -> TransitStep {
    TransitStep {
        mode: leg.mode,
        from: StepPlace::from(&leg.from),
        to: StepPlace::from(&leg.to),
        duration: leg.duration,
        distance: leg.distance,
        details: step_details(leg),
    }
}

fn step_details(leg: &RouteLeg) -> StepDetails {
    match leg.mode {
        TravelMode::Walk => StepDetails::Walk {
            instruction: leg.instruction.clone(),
        },
        TravelMode::Subway => StepDetails::Subway {
            line: leg
                .line
                .clone()
                .unwrap_or_else(|| DEFAULT_SUBWAY_LINE.to_string()),
            stops: leg.distance.div_ceil(1000),
            fare: FLAT_FARE,
            express: false,
        },
        TravelMode::Bus => StepDetails::Bus {
            bus_number: leg
                .line
                .clone()
                .unwrap_or_else(|| DEFAULT_BUS_NUMBER.to_string()),
            stops: leg.distance.div_ceil(1500),
            fare: FLAT_FARE,
            bus_type: BusType::Regular,
        },
        TravelMode::Train => StepDetails::Train {
            train_type: TrainType::Ktx,
            train_number: TRAIN_NUMBER.to_string(),
            fare: train_fare(leg.distance),
            seat_type: SeatType::Standard,
        },
    }
}

/// Rough train fare: one won per metre, rounded to the nearest 100.
fn train_fare(distance_m: u32) -> u32 {
    ((distance_m as f64 / 100.0).round() as u32).saturating_mul(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, RouteType};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap()
    }

    fn leg(mode: TravelMode, distance: u32, line: Option<&str>) -> RouteLeg {
        let here = Coordinate::new(37.5, 127.0).with_name("Here");
        RouteLeg {
            mode,
            from: here.clone(),
            to: here,
            duration: 7,
            distance,
            instruction: "Go".into(),
            line: line.map(str::to_string),
            line_color: None,
        }
    }

    #[test]
    fn subway_stops_round_up_per_km() {
        let details = step_details(&leg(TravelMode::Subway, 5530, Some("1호선")));
        assert_eq!(
            details,
            StepDetails::Subway {
                line: "1호선".into(),
                stops: 6,
                fare: 1400,
                express: false,
            }
        );
    }

    #[test]
    fn bus_stops_round_up_per_1500m() {
        let details = step_details(&leg(TravelMode::Bus, 3001, None));
        assert_eq!(
            details,
            StepDetails::Bus {
                bus_number: "146".into(),
                stops: 3,
                fare: 1400,
                bus_type: BusType::Regular,
            }
        );
    }

    #[test]
    fn subway_line_defaults() {
        let details = step_details(&leg(TravelMode::Subway, 0, None));
        let StepDetails::Subway { line, stops, .. } = details else {
            panic!("expected subway details");
        };
        assert_eq!(line, "2호선");
        assert_eq!(stops, 0);
    }

    #[test]
    fn train_fare_rounds_to_hundreds() {
        assert_eq!(train_fare(289_449), 289_400);
        assert_eq!(train_fare(289_450), 289_500);
        assert_eq!(train_fare(0), 0);

        let details = step_details(&leg(TravelMode::Train, 100_049, Some("ITX")));
        assert_eq!(
            details,
            StepDetails::Train {
                train_type: TrainType::Ktx,
                train_number: "KTX-101".into(),
                fare: 100_000,
                seat_type: SeatType::Standard,
            }
        );
    }

    #[test]
    fn walk_keeps_instruction() {
        let details = step_details(&leg(TravelMode::Walk, 120, None));
        assert_eq!(
            details,
            StepDetails::Walk {
                instruction: "Go".into()
            }
        );
    }

    #[test]
    fn arrival_is_departure_plus_duration() {
        let mut route = Route::new(
            RouteType::Fastest,
            95,
            5000,
            1,
            1000,
            vec![leg(TravelMode::Bus, 1000, None)],
        );
        route.id = "stale".into();

        let option = project_route(&route, now());
        assert_eq!(option.id, "route-2");
        assert_eq!(option.departure_time, now());
        assert_eq!(option.timeline_minutes(), 95);
        assert_eq!(option.total_cost, 5000);
        assert_eq!(option.steps.len(), 1);
        assert_eq!(option.steps[0].from.name, "Here");
    }
}
