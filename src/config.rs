// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Engine configuration loaded from environment variables.

use std::env;

use crate::services::discovery::DEFAULT_COOLDOWN_SECS;

/// Engine configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the GeoJSON place registry
    pub registry_path: String,
    /// Discovery notification cooldown in seconds
    pub cooldown_secs: u64,
    /// Path for the file-backed visited store, if the host uses one
    pub visited_store_path: Option<String>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            registry_path: "data/places.geojson".to_string(),
            cooldown_secs: DEFAULT_COOLDOWN_SECS,
            visited_store_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let cooldown_secs = match env::var("DISCOVERY_COOLDOWN_SECS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid("DISCOVERY_COOLDOWN_SECS", raw))?,
            Err(_) => DEFAULT_COOLDOWN_SECS,
        };

        Ok(Self {
            registry_path: env::var("PLACE_REGISTRY_PATH")
                .unwrap_or_else(|_| "data/places.geojson".to_string()),
            cooldown_secs,
            visited_store_path: env::var("VISITED_STORE_PATH").ok(),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
