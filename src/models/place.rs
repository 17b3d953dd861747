// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Point-of-interest model and its media descriptors.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::geo::Coordinate;

/// A discoverable point of interest.
///
/// Defined once at process start from the static registry and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Place {
    /// Unique place id (e.g. "golden-gate-overlook")
    #[validate(length(min = 1))]
    pub id: String,
    /// Display name
    #[validate(length(min = 1))]
    pub name: String,
    /// Short description shown in the discovery card
    pub description: String,
    /// Center of the discovery radius
    #[validate(nested)]
    pub coordinate: Coordinate,
    /// Discovery radius in meters
    #[validate(range(exclusive_min = 0.0))]
    pub radius_meters: f64,
    /// Optional audio guide played on discovery
    pub audio_guide: Option<AudioGuide>,
    /// Optional badge unlocked by visiting
    pub badge: Option<Badge>,
    /// Optional AR content anchored at the place
    pub ar_content: Option<ArContent>,
}

/// Reference to an audio-guide track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioGuide {
    pub url: String,
    pub duration_seconds: Option<u32>,
}

/// Badge awarded for visiting a place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub icon_url: Option<String>,
}

/// AR content descriptor (model asset anchored at the place).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArContent {
    pub model_url: String,
    pub scale: Option<f64>,
}
