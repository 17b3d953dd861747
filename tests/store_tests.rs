// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! File-backed visited store tests.

use movemint_core::store::{FileVisitedStore, StoreError, VisitedStore};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

/// Unique temp path per test so parallel tests do not collide.
fn temp_store_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("movemint_store_{}_{}.json", name, std::process::id()));
    path
}

fn ids(names: &[&str]) -> HashSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_missing_file_loads_empty() {
    let store = FileVisitedStore::new(temp_store_path("missing"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_save_then_load_roundtrip() {
    let path = temp_store_path("roundtrip");
    let store = FileVisitedStore::new(&path);

    let visited = ids(&["ferry-building", "dolores-park"]);
    store.save(&visited).unwrap();
    assert_eq!(store.load().unwrap(), visited);

    fs::remove_file(&path).ok();
}

#[test]
fn test_saved_document_shape() {
    let path = temp_store_path("shape");
    let store = FileVisitedStore::new(&path);
    store.save(&ids(&["b-place", "a-place"])).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();

    // Sorted ids keep the file diff-friendly
    assert_eq!(
        doc["place_ids"],
        serde_json::json!(["a-place", "b-place"])
    );
    // RFC3339 with Z suffix
    let updated_at = doc["updated_at"].as_str().unwrap();
    assert!(updated_at.ends_with('Z'), "got {}", updated_at);

    fs::remove_file(&path).ok();
}

#[test]
fn test_corrupt_file_is_serialization_error() {
    let path = temp_store_path("corrupt");
    fs::write(&path, "{ not json").unwrap();

    let store = FileVisitedStore::new(&path);
    assert!(matches!(store.load(), Err(StoreError::Serialization(_))));

    fs::remove_file(&path).ok();
}

#[test]
fn test_save_overwrites_previous_set() {
    let path = temp_store_path("overwrite");
    let store = FileVisitedStore::new(&path);

    store.save(&ids(&["one"])).unwrap();
    store.save(&ids(&["one", "two"])).unwrap();

    assert_eq!(store.load().unwrap(), ids(&["one", "two"]));

    fs::remove_file(&path).ok();
}
