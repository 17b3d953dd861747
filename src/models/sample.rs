// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Location sample produced by the device geolocation collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// One raw GPS fix.
///
/// Samples are consumed once and discarded; the core keeps only the derived
/// discovery and theme state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationSample {
    pub latitude: f64,
    pub longitude: f64,
    /// Instantaneous speed in meters/second, if the sensor reports one
    pub speed: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

impl LocationSample {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Speed converted to km/h; a missing reading is treated as standing still.
    pub fn speed_kmh(&self) -> f64 {
        self.speed.unwrap_or(0.0) * 3.6
    }
}
