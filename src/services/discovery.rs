// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Proximity-based place discovery with notification cooldown.
//!
//! One engine instance per user session. Each location sample is checked
//! against every place in the registry; entering a place's radius surfaces
//! it at most once per cooldown window, and leaving it silently clears the
//! inside flag.

use crate::geo::distance_meters;
use crate::models::{LocationSample, Place};
use crate::services::PlaceRegistry;
use crate::store::VisitedStore;
use chrono::{DateTime, Duration, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Minimum elapsed time between two discovery notifications for one place.
pub const DEFAULT_COOLDOWN_SECS: u64 = 5 * 60;

/// Per-place tracking state, created lazily on first proximity hit.
#[derive(Debug, Default, Clone)]
struct DiscoveryState {
    /// When this place last produced a discovery event
    last_notified: Option<DateTime<Utc>>,
    /// Whether the latest sample fell inside the radius
    inside: bool,
}

/// Per-session discovery engine.
pub struct DiscoveryEngine {
    registry: Arc<PlaceRegistry>,
    store: Arc<dyn VisitedStore>,
    cooldown: Duration,
    states: HashMap<String, DiscoveryState>,
    visited: HashSet<String>,
}

impl DiscoveryEngine {
    /// Create an engine for one session, loading the visited set from the
    /// store. A failing store is tolerated: discovery stays available with
    /// an empty visited set.
    pub fn new(
        registry: Arc<PlaceRegistry>,
        store: Arc<dyn VisitedStore>,
        cooldown_secs: u64,
    ) -> Self {
        let visited = match store.load() {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load visited set, starting empty");
                HashSet::new()
            }
        };

        Self {
            registry,
            store,
            cooldown: Duration::seconds(cooldown_secs as i64),
            states: HashMap::new(),
            visited,
        }
    }

    /// Check a sample against every place and return the places newly
    /// surfaced by this call, in registry order.
    ///
    /// The cooldown is measured from the last notification (not from entry),
    /// and is per-place: proximity to one place never suppresses another.
    /// The sample's own timestamp is the clock, so out-of-order samples are
    /// judged by their capture time.
    pub fn check_nearby_places(&mut self, sample: &LocationSample) -> Vec<Place> {
        let position = sample.coordinate();
        let mut discovered = Vec::new();

        for place in self.registry.places() {
            let distance = distance_meters(position, place.coordinate);
            let state = self.states.entry(place.id.clone()).or_default();

            if distance <= place.radius_meters {
                let off_cooldown = match state.last_notified {
                    None => true,
                    Some(last) => sample.timestamp - last > self.cooldown,
                };

                if off_cooldown {
                    state.last_notified = Some(sample.timestamp);
                    state.inside = true;
                    tracing::info!(place_id = %place.id, distance_m = distance, "Place discovered");
                    discovered.push(place.clone());
                } else {
                    // Still inside, notification suppressed
                    state.inside = true;
                    tracing::debug!(place_id = %place.id, "Discovery suppressed by cooldown");
                }
            } else if state.inside {
                // Exit is silent state cleanup; no event is emitted
                state.inside = false;
            }
        }

        discovered
    }

    /// Record that the user has visited a place. Idempotent; the store is
    /// only written when the set actually grows, and a write failure keeps
    /// the in-memory set intact.
    pub fn mark_visited(&mut self, place_id: &str) {
        if !self.visited.insert(place_id.to_string()) {
            return;
        }
        if let Err(e) = self.store.save(&self.visited) {
            tracing::warn!(place_id, error = %e, "Failed to persist visited set");
        }
    }

    pub fn has_visited(&self, place_id: &str) -> bool {
        self.visited.contains(place_id)
    }

    /// Places whose latest distance check fell inside their radius.
    pub fn active_places(&self) -> Vec<Place> {
        self.registry
            .places()
            .iter()
            .filter(|p| self.states.get(&p.id).is_some_and(|s| s.inside))
            .cloned()
            .collect()
    }

    /// Places the user has ever visited, in registry order.
    pub fn visited_places(&self) -> Vec<Place> {
        self.registry
            .places()
            .iter()
            .filter(|p| self.visited.contains(&p.id))
            .cloned()
            .collect()
    }

    /// Number of distinct visited places.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
