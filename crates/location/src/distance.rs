use std::f64::consts::PI;

use midining_shared::Coordinate;

pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Shown in place of a distance when the user's position is unknown.
pub const UNAVAILABLE: &str = "N/A";

/// `(degrees * PI) / 180`. Not `f64::to_radians`, which multiplies by a
/// pre-divided constant and can differ in the last bit.
fn radians(degrees: f64) -> f64 {
    (degrees * PI) / 180.0
}

/// Great-circle distance in miles using the haversine formula.
pub fn haversine_miles(from: Coordinate, to: Coordinate) -> f64 {
    let d_lat = radians(to.latitude - from.latitude);
    let d_lon = radians(to.longitude - from.longitude);

    let a = (d_lat / 2.0).sin() * (d_lat / 2.0).sin()
        + radians(from.latitude).cos()
            * radians(to.latitude).cos()
            * (d_lon / 2.0).sin()
            * (d_lon / 2.0).sin();
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// One decimal with exact halves rounded up. `{:.1}` rounds them to even.
pub fn format_miles(miles: f64) -> String {
    let quarters = miles * 4.0;
    let miles = if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        miles + 0.025
    } else {
        miles
    };

    format!("{miles:.1} mi")
}

/// `"0.4 mi"`, or `"N/A"` without a user position.
pub fn distance_label(user: Option<Coordinate>, target: Coordinate) -> String {
    match user {
        Some(user) => format_miles(haversine_miles(user, target)),
        None => UNAVAILABLE.to_owned(),
    }
}
