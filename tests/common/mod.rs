// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for integration tests.

use chrono::{DateTime, TimeZone, Utc};
use movemint_core::models::LocationSample;
use movemint_core::services::PlaceRegistry;
use movemint_core::store::{StoreError, VisitedStore};
use std::collections::HashSet;
use std::sync::Arc;

/// A registry with one place per test scenario, built inline so the tests
/// do not depend on the committed data file.
#[allow(dead_code)]
pub fn test_registry() -> Arc<PlaceRegistry> {
    let geojson = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {
                    "id": "alpha",
                    "name": "Alpha Point",
                    "description": "First test place",
                    "radius_meters": 150
                },
                "geometry": { "type": "Point", "coordinates": [-122.3937, 37.7955] }
            },
            {
                "type": "Feature",
                "properties": {
                    "id": "beta",
                    "name": "Beta Point",
                    "description": "Second test place, ~1.2 km north of alpha",
                    "radius_meters": 150
                },
                "geometry": { "type": "Point", "coordinates": [-122.3937, 37.8065] }
            }
        ]
    }"#;
    Arc::new(PlaceRegistry::load_from_json(geojson).expect("test registry should parse"))
}

/// Build a sample at an offset (in degrees) from the alpha place center.
#[allow(dead_code)]
pub fn sample_near_alpha(
    lat_offset: f64,
    speed: Option<f64>,
    timestamp: DateTime<Utc>,
) -> LocationSample {
    LocationSample {
        latitude: 37.7955 + lat_offset,
        longitude: -122.3937,
        speed,
        timestamp,
    }
}

/// Fixed base time for cooldown arithmetic.
#[allow(dead_code)]
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

/// A store whose writes always fail, for persistence-degradation tests.
#[allow(dead_code)]
pub struct FailingStore;

impl VisitedStore for FailingStore {
    fn load(&self) -> Result<HashSet<String>, StoreError> {
        Err(StoreError::Io("simulated backend outage".to_string()))
    }

    fn save(&self, _ids: &HashSet<String>) -> Result<(), StoreError> {
        Err(StoreError::Io("simulated backend outage".to_string()))
    }
}
