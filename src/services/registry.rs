// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Place registry loading from GeoJSON.

use crate::geo::Coordinate;
use crate::models::place::{ArContent, AudioGuide, Badge, Place};
use geojson::GeoJson;
use std::fs;
use std::path::Path;
use validator::Validate;

/// Immutable registry of discoverable places, loaded once at startup.
#[derive(Default, Clone)]
pub struct PlaceRegistry {
    places: Vec<Place>,
}

impl PlaceRegistry {
    /// Load places from a GeoJSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, RegistryError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| RegistryError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load places from a GeoJSON string.
    ///
    /// Expects a FeatureCollection of Point features. Properties: `id`,
    /// `name`, `description`, `radius_meters`, and optional `audio_guide`,
    /// `badge`, `ar_content` objects.
    pub fn load_from_json(json_data: &str) -> Result<Self, RegistryError> {
        let geojson: GeoJson = json_data
            .parse()
            .map_err(|e: geojson::Error| RegistryError::ParseError(e.to_string()))?;

        let mut places: Vec<Place> = Vec::new();

        if let GeoJson::FeatureCollection(collection) = geojson {
            for feature in collection.features {
                let id = feature
                    .property("id")
                    .and_then(|v| v.as_str())
                    .unwrap_or("")
                    .to_string();

                // Skip features with no id (not yet published)
                if id.is_empty() {
                    continue;
                }

                let name = feature
                    .property("name")
                    .and_then(|v| v.as_str())
                    .unwrap_or("Unknown")
                    .to_string();

                let description = feature
                    .property("description")
                    .and_then(|v| v.as_str())
                    .unwrap_or("")
                    .to_string();

                let radius_meters = feature
                    .property("radius_meters")
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0);

                let audio_guide: Option<AudioGuide> = feature
                    .property("audio_guide")
                    .and_then(|v| serde_json::from_value(v.clone()).ok());
                let badge: Option<Badge> = feature
                    .property("badge")
                    .and_then(|v| serde_json::from_value(v.clone()).ok());
                let ar_content: Option<ArContent> = feature
                    .property("ar_content")
                    .and_then(|v| serde_json::from_value(v.clone()).ok());

                let geometry = feature
                    .geometry
                    .ok_or_else(|| RegistryError::MissingGeometry(id.clone()))?;

                let coordinate = match geometry.value {
                    geojson::Value::Point(pos) if pos.len() >= 2 => {
                        // GeoJSON positions are [longitude, latitude]
                        Coordinate::new(pos[1], pos[0])
                    }
                    _ => return Err(RegistryError::UnsupportedGeometry(id)),
                };

                let place = Place {
                    id,
                    name,
                    description,
                    coordinate,
                    radius_meters,
                    audio_guide,
                    badge,
                    ar_content,
                };

                place
                    .validate()
                    .map_err(|e| RegistryError::InvalidPlace(place.id.clone(), e.to_string()))?;

                if places.iter().any(|p| p.id == place.id) {
                    return Err(RegistryError::DuplicateId(place.id));
                }

                places.push(place);
            }
        }

        tracing::info!(count = places.len(), "Loaded place registry");
        Ok(Self { places })
    }

    /// All places, in registry order.
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Look up a place by id.
    pub fn get(&self, id: &str) -> Option<&Place> {
        self.places.iter().find(|p| p.id == id)
    }
}

/// Errors from registry loading.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse GeoJSON: {0}")]
    ParseError(String),

    #[error("Place {0} has no geometry")]
    MissingGeometry(String),

    #[error("Place {0} has unsupported geometry (expected Point)")]
    UnsupportedGeometry(String),

    #[error("Place {0} failed validation: {1}")]
    InvalidPlace(String, String),

    #[error("Duplicate place id: {0}")]
    DuplicateId(String),
}
