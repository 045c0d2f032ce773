// SPDX-License-Identifier: MIT

//! Great-circle helpers for flight estimates.

/// Average cruise speed used to turn distances into flight-time estimates.
const CRUISE_SPEED_KMH: f64 = 800.0;

/// Great-circle distance between two (lat, lon) pairs in kilometers.
pub fn haversine_km(p1: (f64, f64), p2: (f64, f64)) -> f64 {
    const R: f64 = 6372.8; // Radius of the earth in km

    let d_lat = (p2.0 - p1.0).to_radians();
    let d_lon = (p2.1 - p1.1).to_radians();
    let lat1 = p1.0.to_radians();
    let lat2 = p2.0.to_radians();

    let a = f64::sin(d_lat / 2.).powi(2)
        + f64::cos(lat1) * f64::cos(lat2) * f64::sin(d_lon / 2.).powi(2);
    let c = 2. * f64::asin(f64::sqrt(a));

    R * c
}

/// Estimated flight hours for a distance, with a one-hour floor so short
/// hops still account for takeoff and landing.
pub fn flight_hours(distance_km: f64) -> f64 {
    (distance_km / CRUISE_SPEED_KMH).max(1.0)
}
