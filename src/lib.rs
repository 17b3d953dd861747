// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! MoveMint core engine: place discovery, movement theming, and token
//! reward calculation for the MoveMint fitness-rewards app.
//!
//! This crate is the pure, synchronous core. Location samples and
//! activity-completion records come in from host collaborators; discovery
//! events and reward breakdowns go back out. Persistence of the visited
//! set sits behind the [`store::VisitedStore`] capability so the core
//! never touches a concrete storage technology.

pub mod config;
pub mod error;
pub mod geo;
pub mod models;
pub mod services;
pub mod store;
pub mod time_utils;

use std::sync::Arc;

use config::Config;
use models::{ActivityRecord, LocationSample, MovementTheme, Place, RewardBreakdown};
use services::{DiscoveryEngine, PlaceRegistry, RewardCalculator, ThemeSelector};
use store::VisitedStore;

/// Per-user session state.
///
/// One instance per active user; nothing here is shared across sessions,
/// so concurrent users in one process cannot observe each other's
/// discovery or theme state.
pub struct Session {
    pub discovery: DiscoveryEngine,
    pub theme: ThemeSelector,
    pub rewards: RewardCalculator,
}

impl Session {
    /// Build a session from environment-driven configuration.
    pub fn from_env() -> error::Result<Self> {
        let config = Config::from_env()?;
        Self::from_config(&config)
    }

    /// Build a session from an explicit configuration, loading the place
    /// registry from disk and wiring the configured visited store.
    pub fn from_config(config: &Config) -> error::Result<Self> {
        let registry = Arc::new(PlaceRegistry::load_from_file(&config.registry_path)?);
        let visited_store: Arc<dyn VisitedStore> = match &config.visited_store_path {
            Some(path) => Arc::new(store::FileVisitedStore::new(path)),
            None => Arc::new(store::MemoryVisitedStore::standalone("local")),
        };
        Ok(Self::new(config, registry, visited_store))
    }

    pub fn new(
        config: &Config,
        registry: Arc<PlaceRegistry>,
        visited_store: Arc<dyn VisitedStore>,
    ) -> Self {
        Self {
            discovery: DiscoveryEngine::new(registry, visited_store, config.cooldown_secs),
            theme: ThemeSelector::new(),
            rewards: RewardCalculator::new(),
        }
    }

    /// Feed one location sample through discovery and theming.
    ///
    /// Returns the places newly surfaced by this sample and the theme it
    /// selects. The two are independent consumers of the sample.
    pub fn process_sample(&mut self, sample: &LocationSample) -> (Vec<Place>, MovementTheme) {
        let discovered = self.discovery.check_nearby_places(sample);
        let theme = self.theme.update_from_sample(sample);
        (discovered, theme)
    }

    /// Compute the token reward for a completed activity.
    pub fn complete_activity(&self, activity: &ActivityRecord) -> RewardBreakdown {
        self.rewards.calculate_for_activity(activity)
    }
}
