// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! File-backed visited store (one JSON document per user).

use super::{StoreError, VisitedStore};
use crate::time_utils::format_utc_rfc3339;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

/// On-disk document format.
#[derive(Debug, Serialize, Deserialize)]
struct VisitedDocument {
    place_ids: Vec<String>,
    updated_at: String,
}

/// Visited store persisting to a single JSON file.
#[derive(Debug, Clone)]
pub struct FileVisitedStore {
    path: PathBuf,
}

impl FileVisitedStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl VisitedStore for FileVisitedStore {
    fn load(&self) -> Result<HashSet<String>, StoreError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            // First launch: nothing visited yet
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashSet::new()),
            Err(e) => return Err(StoreError::Io(e.to_string())),
        };

        let doc: VisitedDocument =
            serde_json::from_str(&data).map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(doc.place_ids.into_iter().collect())
    }

    fn save(&self, ids: &HashSet<String>) -> Result<(), StoreError> {
        let mut place_ids: Vec<String> = ids.iter().cloned().collect();
        place_ids.sort();

        let doc = VisitedDocument {
            place_ids,
            updated_at: format_utc_rfc3339(chrono::Utc::now()),
        };

        let json = serde_json::to_string_pretty(&doc)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| StoreError::Io(e.to_string()))
    }
}
