//! City routes for trips up to the short threshold.
//!
//! Base travel time is three minutes per kilometre (about 20 km/h).

use crate::domain::{Coordinate, Route, RouteType, TravelMode};

use super::legs::{BRANCH_BUS, EXPRESS_BUS, LegChain, SUBWAY_LINE_2, TRUNK_BUS, apportion, whole};

pub(super) fn short_distance_routes(
    origin: &Coordinate,
    destination: &Coordinate,
    distance_km: f64,
    distance_m: u32,
) -> [Route; 3] {
    let base_mins = whole(distance_km * 3.0);

    [
        recommended(origin, destination, base_mins, distance_m),
        fastest(origin, destination, base_mins, distance_m),
        cheapest(origin, destination, base_mins, distance_m),
    ]
}

/// Subway then a short bus hop.
fn recommended(
    origin: &Coordinate,
    destination: &Coordinate,
    base_mins: u32,
    distance_m: u32,
) -> Route {
    let t = apportion(base_mins, &[0.1, 0.6, 0.2]);
    let m = apportion(distance_m, &[0.05, 0.7, 0.2]);

    let steps = LegChain::new(origin, destination, distance_m)
        .walk(t[0], m[0], "Walk to the subway station", "Subway station")
        .ride(
            TravelMode::Subway,
            SUBWAY_LINE_2,
            t[1],
            m[1],
            "Take Line 2",
            "Transfer stop",
        )
        .ride(
            TravelMode::Bus,
            TRUNK_BUS,
            t[2],
            m[2],
            "Transfer to bus 146",
            "Bus stop",
        )
        .walk_to_destination(t[3], m[3], "Walk to the destination");

    Route::new(
        RouteType::Recommended,
        base_mins,
        1400,
        1,
        distance_m,
        steps,
    )
}

/// Direct express bus.
fn fastest(
    origin: &Coordinate,
    destination: &Coordinate,
    base_mins: u32,
    distance_m: u32,
) -> Route {
    let total = whole(base_mins as f64 * 0.7);
    let t = apportion(total, &[0.2, 0.7]);
    let m = apportion(distance_m, &[0.05, 0.9]);

    let steps = LegChain::new(origin, destination, distance_m)
        .walk(t[0], m[0], "Walk to the bus stop", "Express bus stop")
        .ride(
            TravelMode::Bus,
            EXPRESS_BUS,
            t[1],
            m[1],
            "Take express bus 9401",
            "Bus stop",
        )
        .walk_to_destination(t[2], m[2], "Walk to the destination");

    Route::new(RouteType::Fastest, total, 2500, 0, distance_m, steps)
}

/// Long walk to a trunk bus, then a branch bus.
fn cheapest(
    origin: &Coordinate,
    destination: &Coordinate,
    base_mins: u32,
    distance_m: u32,
) -> Route {
    let total = whole(base_mins as f64 * 1.2);
    let t = apportion(total, &[0.3, 0.4, 0.2]);
    let m = apportion(distance_m, &[0.15, 0.5, 0.3]);

    let steps = LegChain::new(origin, destination, distance_m)
        .walk(t[0], m[0], "Walk to the trunk bus stop", "Trunk bus stop")
        .ride(
            TravelMode::Bus,
            TRUNK_BUS,
            t[1],
            m[1],
            "Take bus 146",
            "Transfer stop",
        )
        .ride(
            TravelMode::Bus,
            BRANCH_BUS,
            t[2],
            m[2],
            "Transfer to bus 7016",
            "Bus stop",
        )
        .walk_to_destination(t[3], m[3], "Walk to the destination");

    Route::new(RouteType::Cheapest, total, 1400, 1, distance_m, steps)
}
