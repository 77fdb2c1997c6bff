//! Tests for storage helpers

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::*;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Sample {
    name: String,
}

fn fallback() -> Sample {
    Sample {
        name: "default".to_string(),
    }
}

#[test]
fn test_load_missing_key_returns_default() {
    let store = MemoryStore::new();
    let loaded = load_or_default(&store, "opencraft/sample", fallback).unwrap();
    assert_eq!(loaded, fallback());
}

#[test]
fn test_load_wrong_shape_returns_default() {
    let store = MemoryStore::new();
    store.insert_raw("opencraft/sample", json!([1, 2, 3]));

    let loaded = load_or_default(&store, "opencraft/sample", fallback).unwrap();
    assert_eq!(loaded, fallback());
}

#[test]
fn test_save_then_load() {
    let store = MemoryStore::new();
    let sample = Sample {
        name: "saved".to_string(),
    };

    save(&store, "opencraft/sample", &sample).unwrap();

    assert_eq!(store.raw("opencraft/sample"), Some(json!({"name": "saved"})));
    let loaded = load_or_default(&store, "opencraft/sample", fallback).unwrap();
    assert_eq!(loaded, sample);
}

#[test]
fn test_save_propagates_write_failure() {
    let store = MemoryStore::new();
    store.set_fail_writes(true);

    let result = save(&store, "opencraft/sample", &fallback());

    assert!(matches!(result, Err(OpencraftError::Storage { ref key, .. }) if key == "opencraft/sample"));
    assert_eq!(store.raw("opencraft/sample"), None);
}

#[test]
fn test_memory_store_clones_share_entries() {
    let store = MemoryStore::new();
    let clone = store.clone();

    store.write("k", &json!(1)).unwrap();

    assert_eq!(clone.read("k").unwrap(), Some(json!(1)));
}
