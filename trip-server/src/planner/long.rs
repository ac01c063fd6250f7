//! Intercity routes for trips over the medium threshold.
//!
//! Rail time assumes roughly 200 km/h; the base fare is 50 won per km.

use crate::domain::{Coordinate, Route, RouteType, TravelMode};

use super::legs::{ITX, KTX, LegChain, SUBWAY_LINE_1, TRUNK_BUS, apportion, whole};

/// Flat local-transit surcharge on the recommended route.
const LOCAL_TRANSIT_FARE: u32 = 2800;
/// Express supplement on the fastest route.
const EXPRESS_SUPPLEMENT: u32 = 4000;
/// Discount factor of a regular train against KTX.
const REGULAR_RATE: f64 = 0.6;
const BUS_FARE: u32 = 1400;

pub(super) fn long_distance_routes(
    origin: &Coordinate,
    destination: &Coordinate,
    distance_km: f64,
    distance_m: u32,
) -> [Route; 3] {
    let train_mins = whole(distance_km / 3.0);
    let fare = whole(distance_km * 50.0);

    [
        recommended(origin, destination, train_mins, fare, distance_m),
        fastest(origin, destination, train_mins, fare, distance_m),
        cheapest(origin, destination, train_mins, fare, distance_m),
    ]
}

fn recommended(
    origin: &Coordinate,
    destination: &Coordinate,
    train_mins: u32,
    fare: u32,
    distance_m: u32,
) -> Route {
    let m = apportion(distance_m, &[0.01, 0.90, 0.08]);

    let steps = LegChain::new(origin, destination, distance_m)
        .walk(
            10,
            m[0],
            "Walk to the departure station",
            "Departure station",
        )
        .ride(
            TravelMode::Train,
            KTX,
            train_mins,
            m[1],
            "Board the KTX",
            "Arrival station",
        )
        .ride(
            TravelMode::Subway,
            SUBWAY_LINE_1,
            15,
            m[2],
            "Transfer to the subway",
            "Subway exit",
        )
        .walk_to_destination(5, m[3], "Walk to the destination");

    Route::new(
        RouteType::Recommended,
        train_mins.saturating_add(30),
        fare.saturating_add(LOCAL_TRANSIT_FARE),
        2,
        distance_m,
        steps,
    )
}

fn fastest(
    origin: &Coordinate,
    destination: &Coordinate,
    train_mins: u32,
    fare: u32,
    distance_m: u32,
) -> Route {
    let express_mins = train_mins.saturating_sub(5);
    let m = apportion(distance_m, &[0.01, 0.98]);

    let steps = LegChain::new(origin, destination, distance_m)
        .walk(
            5,
            m[0],
            "Walk to the departure station",
            "Departure station",
        )
        .ride(
            TravelMode::Train,
            KTX,
            express_mins,
            m[1],
            "Board the express KTX",
            "Arrival station",
        )
        .walk_to_destination(5, m[2], "Walk to the destination");

    Route::new(
        RouteType::Fastest,
        express_mins.saturating_add(10),
        fare.saturating_add(EXPRESS_SUPPLEMENT),
        1,
        distance_m,
        steps,
    )
}

fn cheapest(
    origin: &Coordinate,
    destination: &Coordinate,
    train_mins: u32,
    fare: u32,
    distance_m: u32,
) -> Route {
    let slow_mins = train_mins.saturating_add(40);
    let m = apportion(distance_m, &[0.01, 0.90, 0.08]);

    let steps = LegChain::new(origin, destination, distance_m)
        .walk(
            10,
            m[0],
            "Walk to the departure station",
            "Departure station",
        )
        .ride(
            TravelMode::Train,
            ITX,
            slow_mins,
            m[1],
            "Board the regular ITX train",
            "Arrival station",
        )
        .ride(
            TravelMode::Bus,
            TRUNK_BUS,
            20,
            m[2],
            "Take city bus 146",
            "Bus stop",
        )
        .walk_to_destination(10, m[3], "Walk to the destination");

    Route::new(
        RouteType::Cheapest,
        slow_mins.saturating_add(40),
        whole(fare as f64 * REGULAR_RATE).saturating_add(BUS_FARE),
        3,
        distance_m,
        steps,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seoul() -> Coordinate {
        Coordinate::new(37.57, 126.98).with_name("서울")
    }

    fn busan() -> Coordinate {
        Coordinate::new(35.18, 129.08).with_name("부산")
    }

    fn routes() -> ([Route; 3], f64) {
        let km = seoul().distance_km(&busan());
        let m = whole(km * 1000.0);
        (long_distance_routes(&seoul(), &busan(), km, m), km)
    }

    #[test]
    fn recommended_is_walk_train_subway_walk() {
        let ([rec, _, _], km) = routes();

        let modes: Vec<_> = rec.steps.iter().map(|s| s.mode).collect();
        assert_eq!(
            modes,
            vec![
                TravelMode::Walk,
                TravelMode::Train,
                TravelMode::Subway,
                TravelMode::Walk
            ]
        );
        assert_eq!(rec.cost, whole(km * 50.0) + 2800);
        assert_eq!(rec.duration, whole(km / 3.0) + 30);
        assert_eq!(rec.transfers, 2);
    }

    #[test]
    fn fastest_uses_express_train() {
        let ([_, fast, _], km) = routes();
        let train_mins = whole(km / 3.0);

        assert_eq!(fast.steps.len(), 3);
        assert_eq!(fast.steps[1].mode, TravelMode::Train);
        assert_eq!(fast.steps[1].duration, train_mins - 5);
        assert_eq!(fast.cost, whole(km * 50.0) + 4000);
        assert_eq!(fast.transfers, 1);
    }

    #[test]
    fn cheapest_is_discounted() {
        let ([rec, _, cheap], km) = routes();
        let fare = whole(km * 50.0);

        assert_eq!(cheap.cost, whole(fare as f64 * 0.6) + 1400);
        assert!(cheap.cost < rec.cost);
        assert_eq!(cheap.transfers, 3);
        assert_eq!(cheap.steps[2].mode, TravelMode::Bus);
        assert_eq!(cheap.steps[1].line.as_deref(), Some("ITX"));
    }

    #[test]
    fn leg_totals_match_route_totals() {
        let (all, _) = routes();
        for route in &all {
            assert_eq!(route.leg_duration_total(), route.duration, "{}", route.id);
            assert_eq!(route.leg_distance_total(), route.distance, "{}", route.id);
            assert!(route.is_connected());
        }
    }

    #[test]
    fn fastest_is_fastest() {
        let ([rec, fast, cheap], _) = routes();
        assert!(fast.duration < rec.duration);
        assert!(rec.duration < cheap.duration);
    }
}
