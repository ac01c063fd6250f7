//! Regional routes: metropolitan subway and express buses.
//!
//! Base travel time is two minutes per kilometre (about 30 km/h door to door).

use crate::domain::{Coordinate, Route, RouteType, TravelMode};

use super::legs::{
    EXPRESS_BUS, LegChain, SHINBUNDANG_LINE, SUBWAY_LINE_1, SUBWAY_LINE_2, TRUNK_BUS, apportion,
    whole,
};

pub(super) fn medium_distance_routes(
    origin: &Coordinate,
    destination: &Coordinate,
    distance_km: f64,
    distance_m: u32,
) -> [Route; 3] {
    let base_mins = whole(distance_km * 2.0);

    [
        recommended(origin, destination, base_mins, distance_m),
        fastest(origin, destination, base_mins, distance_m),
        cheapest(origin, destination, base_mins, distance_m),
    ]
}

/// Subway with one line change.
fn recommended(
    origin: &Coordinate,
    destination: &Coordinate,
    base_mins: u32,
    distance_m: u32,
) -> Route {
    let t = apportion(base_mins, &[0.1, 0.5, 0.3]);
    let m = apportion(distance_m, &[0.03, 0.6, 0.34]);

    let steps = LegChain::new(origin, destination, distance_m)
        .walk(t[0], m[0], "Walk to the subway station", "Subway station")
        .ride(
            TravelMode::Subway,
            SUBWAY_LINE_1,
            t[1],
            m[1],
            "Take Line 1",
            "Transfer station",
        )
        .ride(
            TravelMode::Subway,
            SHINBUNDANG_LINE,
            t[2],
            m[2],
            "Transfer to the Shinbundang Line",
            "Exit",
        )
        .walk_to_destination(t[3], m[3], "Walk to the destination");

    Route::new(
        RouteType::Recommended,
        base_mins,
        2800,
        1,
        distance_m,
        steps,
    )
}

/// Express bus into the city, then the subway.
fn fastest(
    origin: &Coordinate,
    destination: &Coordinate,
    base_mins: u32,
    distance_m: u32,
) -> Route {
    let total = whole(base_mins as f64 * 0.8);
    let t = apportion(total, &[0.1, 0.5, 0.3]);
    let m = apportion(distance_m, &[0.03, 0.7, 0.24]);

    let steps = LegChain::new(origin, destination, distance_m)
        .walk(t[0], m[0], "Walk to the bus stop", "Express bus stop")
        .ride(
            TravelMode::Bus,
            EXPRESS_BUS,
            t[1],
            m[1],
            "Take metropolitan express bus 9401",
            "Transfer station",
        )
        .ride(
            TravelMode::Subway,
            SUBWAY_LINE_2,
            t[2],
            m[2],
            "Transfer to Line 2",
            "Exit",
        )
        .walk_to_destination(t[3], m[3], "Walk to the destination");

    Route::new(RouteType::Fastest, total, 3500, 2, distance_m, steps)
}

/// One slow bus all the way.
fn cheapest(
    origin: &Coordinate,
    destination: &Coordinate,
    base_mins: u32,
    distance_m: u32,
) -> Route {
    let total = whole(base_mins as f64 * 1.3);
    let t = apportion(total, &[0.1, 0.8]);
    let m = apportion(distance_m, &[0.03, 0.94]);

    let steps = LegChain::new(origin, destination, distance_m)
        .walk(t[0], m[0], "Walk to the bus stop", "Bus stop")
        .ride(
            TravelMode::Bus,
            TRUNK_BUS,
            t[1],
            m[1],
            "Take trunk bus 146",
            "Last stop",
        )
        .walk_to_destination(t[2], m[2], "Walk to the destination");

    Route::new(RouteType::Cheapest, total, 1400, 0, distance_m, steps)
}
