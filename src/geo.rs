// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Coordinate type and great-circle distance.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Mean Earth radius in meters, as used by the haversine formula below.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A point on the Earth's surface in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Coordinate {
    /// Latitude in degrees
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    /// Longitude in degrees
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Haversine great-circle distance between two coordinates, in meters.
///
/// Symmetric, and zero (within floating-point tolerance) for equal inputs.
/// NaN or out-of-range inputs propagate as NaN rather than being rejected;
/// location data comes from device sensors and sanitizing it is the
/// caller's job.
pub fn distance_meters(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_M * c
}
