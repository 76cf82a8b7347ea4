// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::model::Airport;

/// Mean Earth radius used for every leg distance.
pub const EARTH_RADIUS_KM: f64 = 6372.8;

/// Haversine great-circle distance between two points, in kilometres.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * h.sqrt().asin() * EARTH_RADIUS_KM
}

pub fn distance_km(a: &Airport, b: &Airport) -> f64 {
    haversine_km(a.latitude, a.longitude, b.latitude, b.longitude)
}
