// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory visited store, keyed by user id.

use super::{StoreError, VisitedStore};
use dashmap::DashMap;
use std::collections::HashSet;
use std::sync::Arc;

/// Visited sets for every user sharing one process, keyed by user id.
pub type SharedVisitedSets = Arc<DashMap<String, HashSet<String>>>;

/// In-memory store backed by a process-wide map.
///
/// Each session gets its own handle scoped to one user id, so concurrent
/// sessions stay isolated while sharing the map. Useful for tests and as a
/// cache layer in front of a durable backend.
#[derive(Clone)]
pub struct MemoryVisitedStore {
    user_id: String,
    sets: SharedVisitedSets,
}

impl MemoryVisitedStore {
    pub fn new(user_id: impl Into<String>, sets: SharedVisitedSets) -> Self {
        Self {
            user_id: user_id.into(),
            sets,
        }
    }

    /// Convenience constructor for a store that is not shared with any
    /// other session.
    pub fn standalone(user_id: impl Into<String>) -> Self {
        Self::new(user_id, Arc::new(DashMap::new()))
    }
}

impl VisitedStore for MemoryVisitedStore {
    fn load(&self) -> Result<HashSet<String>, StoreError> {
        Ok(self
            .sets
            .get(&self.user_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    fn save(&self, ids: &HashSet<String>) -> Result<(), StoreError> {
        self.sets.insert(self.user_id.clone(), ids.clone());
        Ok(())
    }
}
