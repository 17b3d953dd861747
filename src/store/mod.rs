// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Durable storage of the visited-place set.
//!
//! The discovery engine only ever needs load/save of a set of place ids,
//! so the storage technology stays behind this narrow capability.

pub mod file;
pub mod memory;

pub use file::FileVisitedStore;
pub use memory::{MemoryVisitedStore, SharedVisitedSets};

use std::collections::HashSet;

/// Narrow persistence capability injected into the discovery engine.
pub trait VisitedStore: Send + Sync {
    /// Load the full set of visited place ids. A missing record is an
    /// empty set, not an error.
    fn load(&self) -> Result<HashSet<String>, StoreError>;

    /// Persist the full set of visited place ids.
    fn save(&self, ids: &HashSet<String>) -> Result<(), StoreError>;
}

/// Errors from visited-set persistence.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
