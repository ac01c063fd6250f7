//! End-to-end tests for route generation.

use super::*;
use crate::domain::{Coordinate, EARTH_RADIUS_KM, Route, RouteType, StepDetails, TravelMode};
use chrono::{DateTime, TimeZone, Utc};

fn seoul_station() -> Coordinate {
    Coordinate::new(37.5546788, 126.9709914)
        .with_name("서울역")
        .with_address("서울특별시 중구 봉래동2가 122")
}

fn gangnam_station() -> Coordinate {
    Coordinate::new(37.4979462, 127.0276368)
        .with_name("강남역")
        .with_address("서울특별시 강남구 역삼동 737")
}

fn seoul() -> Coordinate {
    Coordinate::new(37.57, 126.98).with_name("서울")
}

fn busan() -> Coordinate {
    Coordinate::new(35.18, 129.08).with_name("부산")
}

/// A point `km` east of (0, 0) along the equator.
fn east_of_null_island(km: f64) -> Coordinate {
    Coordinate::new(0.0, (km / EARTH_RADIUS_KM).to_degrees())
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, 1, 8, 0, 0).unwrap()
}

fn fastest(routes: &[Route; 3]) -> &Route {
    &routes[1]
}

#[test]
fn seoul_station_to_gangnam_is_short() {
    let origin = seoul_station();
    let destination = gangnam_station();
    let km = origin.distance_km(&destination);

    let regime = Planner::default().regime(&origin, &destination);
    assert_eq!(regime, DistanceRegime::Short);

    let routes = generate_routes(&origin, &destination);
    let types: Vec<_> = routes.iter().map(|r| r.route_type).collect();
    assert_eq!(types, RouteType::ALL.to_vec());

    let expected_m = (km * 1000.0).round() as u32;
    for route in &routes {
        assert_eq!(route.distance, expected_m);
        assert!(
            (7700..=8100).contains(&route.distance),
            "{}",
            route.distance
        );
    }
}

#[test]
fn seoul_to_busan_is_long() {
    let km = seoul().distance_km(&busan());
    let routes = generate_routes(&seoul(), &busan());
    let recommended = &routes[0];

    assert_eq!(recommended.route_type, RouteType::Recommended);
    let modes: Vec<_> = recommended.steps.iter().map(|s| s.mode).collect();
    assert_eq!(modes.first(), Some(&TravelMode::Walk));
    assert_eq!(modes.last(), Some(&TravelMode::Walk));
    assert!(recommended.steps.iter().any(|s| s.mode == TravelMode::Train));
    assert_eq!(recommended.cost, (km * 50.0).round() as u32 + 2800);
}

#[test]
fn regime_switches_at_thresholds() {
    let origin = Coordinate::new(0.0, 0.0);

    // Short fastest is a 2500 won express bus, medium fastest costs 3500,
    // long fastest includes the KTX fare.
    let just_short = generate_routes(&origin, &east_of_null_island(9.99));
    assert_eq!(fastest(&just_short).cost, 2500);

    let just_medium = generate_routes(&origin, &east_of_null_island(10.01));
    assert_eq!(fastest(&just_medium).cost, 3500);

    let still_medium = generate_routes(&origin, &east_of_null_island(99.99));
    assert_eq!(fastest(&still_medium).cost, 3500);

    let just_long = generate_routes(&origin, &east_of_null_island(100.01));
    assert!(fastest(&just_long).steps.iter().any(|s| s.mode == TravelMode::Train));
}

#[test]
fn custom_thresholds_change_regime() {
    let planner = Planner::new(PlannerConfig::new(1.0, 5.0));
    let routes = planner.generate_routes(&seoul_station(), &gangnam_station());
    assert!(routes[0].steps.iter().any(|s| s.mode == TravelMode::Train));
}

#[test]
fn endpoints_pass_through() {
    let origin = seoul_station();
    let destination = gangnam_station();

    for route in generate_routes(&origin, &destination) {
        let first = route.steps.first().unwrap();
        let last = route.steps.last().unwrap();
        assert_eq!(first.from, origin);
        assert_eq!(last.to, destination);
        assert_eq!(last.to.address(), Some("서울특별시 강남구 역삼동 737"));
    }
}

#[test]
fn options_share_departure_and_keep_ids() {
    let options = Planner::default().generate_route_options_at(&seoul(), &busan(), now());

    let ids: Vec<_> = options.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["route-1", "route-2", "route-3"]);

    for option in &options {
        assert_eq!(option.departure_time, now());
        assert_eq!(option.timeline_minutes(), i64::from(option.total_duration));
    }
}

#[test]
fn selected_id_survives_regeneration() {
    let planner = Planner::default();
    let short = planner.generate_route_options_at(&seoul_station(), &gangnam_station(), now());
    let long = planner.generate_route_options_at(&seoul(), &busan(), now());

    for (a, b) in short.iter().zip(long.iter()) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.route_type, b.route_type);
    }
}

#[test]
fn long_options_carry_train_details() {
    let options = Planner::default().generate_route_options_at(&seoul(), &busan(), now());
    let train = options[0]
        .steps
        .iter()
        .find(|s| s.mode == TravelMode::Train)
        .unwrap();

    match &train.details {
        StepDetails::Train { fare, .. } => {
            let expected = ((train.distance as f64 / 100.0).round() as u32) * 100;
            assert_eq!(*fare, expected);
        }
        other => panic!("expected train details, got {other:?}"),
    }
}

#[test]
fn details_match_step_mode() {
    let planner = Planner::default();
    let options = planner.generate_route_options_at(&seoul_station(), &gangnam_station(), now());
    for option in &options {
        for step in &option.steps {
            assert_eq!(step.details.mode(), step.mode);
        }
    }
}

#[test]
fn live_clock_options() {
    let before = Utc::now();
    let options = generate_route_options(&seoul_station(), &gangnam_station());
    let after = Utc::now();

    let departure = options[0].departure_time;
    assert!(departure >= before && departure <= after);
    assert!(options.iter().all(|o| o.departure_time == departure));
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coordinate() -> impl Strategy<Value = Coordinate> {
        (33.0f64..39.0, 124.0f64..132.0).prop_map(|(lat, lng)| Coordinate::new(lat, lng))
    }

    proptest! {
        /// Exactly one route of each type, with the fixed id map.
        #[test]
        fn three_routes_with_fixed_ids(a in coordinate(), b in coordinate()) {
            let routes = generate_routes(&a, &b);
            for (route, route_type) in routes.iter().zip(RouteType::ALL) {
                prop_assert_eq!(route.route_type, route_type);
                prop_assert_eq!(route.id.as_str(), route_type.route_id());
            }
        }

        /// Legs are non-empty, connected, and sum to the route totals.
        #[test]
        fn legs_are_consistent(a in coordinate(), b in coordinate()) {
            for route in generate_routes(&a, &b) {
                prop_assert!(!route.steps.is_empty());
                prop_assert!(route.is_connected());
                prop_assert_eq!(route.leg_duration_total(), route.duration);
                prop_assert_eq!(route.leg_distance_total(), route.distance);
            }
        }

        /// Arrival minus departure equals the total duration.
        #[test]
        fn timeline_is_consistent(a in coordinate(), b in coordinate()) {
            let options = Planner::default().generate_route_options_at(&a, &b, now());
            for option in options {
                prop_assert_eq!(option.timeline_minutes(), i64::from(option.total_duration));
            }
        }

        /// Generation ignores everything but the coordinates.
        #[test]
        fn deterministic(a in coordinate(), b in coordinate()) {
            prop_assert_eq!(generate_routes(&a, &b), generate_routes(&a, &b));
        }
    }
}
