//! Integration Tests for the cache and its snapshots
//!
//! Exercises the public API end to end: eviction scenarios, file
//! persistence and concurrent access.

use std::fs;
use std::sync::Arc;
use std::thread;

use mini_lru::{CacheError, CacheValue, LruCache};
use serde::{Deserialize, Serialize};

// == Helper Types ==

/// Payload charged one unit regardless of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Unit(String);

impl CacheValue for Unit {
    fn size(&self) -> u64 {
        1
    }
}

/// Payload with an explicit, serialized weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Blob {
    weight: u64,
    tag: String,
}

impl CacheValue for Blob {
    fn size(&self) -> u64 {
        self.weight
    }
}

fn unit(s: &str) -> Unit {
    Unit(s.to_string())
}

// == Eviction Scenarios ==

#[test]
fn test_ten_unit_items_then_one_more() {
    let cache = LruCache::new(10);
    for name in ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"] {
        cache.set(name.to_string(), unit(name));
    }

    let stats = cache.stats();
    assert_eq!(stats.length, 10);
    assert_eq!(stats.size, 10);

    cache.set("K".to_string(), unit("K"));

    let stats = cache.stats();
    assert_eq!(stats.length, 10);
    assert_eq!(stats.size, 10);
    assert_eq!(cache.keys()[0], "K");
    assert_eq!(cache.get("A"), None);
}

#[test]
fn test_recency_not_insertion_decides_eviction() {
    let cache = LruCache::new(2);

    cache.set("A".to_string(), unit("a"));
    cache.set("B".to_string(), unit("b"));
    cache.get("A");
    cache.set("C".to_string(), unit("c"));

    assert_eq!(cache.get("B"), None);
    assert_eq!(cache.get("A"), Some(unit("a")));
}

#[test]
fn test_delete_absent_leaves_stats_unchanged() {
    let cache = LruCache::new(10);
    cache.set("A".to_string(), unit("a"));
    let before = cache.stats();

    assert!(!cache.delete("missing"));
    assert_eq!(cache.stats(), before);
}

#[test]
fn test_set_capacity_then_grow_again() {
    let cache = LruCache::new(10);
    for name in ["a", "b", "c", "d", "e"] {
        cache.set(name.to_string(), unit(name));
    }

    cache.set_capacity(3);
    assert_eq!(cache.keys(), vec!["e", "d", "c"]);

    cache.set_capacity(10);
    cache.set("f".to_string(), unit("f"));
    assert_eq!(cache.len(), 4);
}

#[test]
fn test_oversized_entry_is_kept_alone() {
    let cache = LruCache::new(10);
    cache.set(
        "small".to_string(),
        Blob {
            weight: 2,
            tag: "s".to_string(),
        },
    );
    cache.set(
        "huge".to_string(),
        Blob {
            weight: 100,
            tag: "h".to_string(),
        },
    );

    let stats = cache.stats();
    assert_eq!(stats.length, 1);
    assert_eq!(stats.size, 100);
    assert!(stats.size > stats.capacity);
    assert_eq!(cache.keys(), vec!["huge"]);
}

#[test]
fn test_stats_oldest_access_tracks_lru_entry() {
    let cache = LruCache::new(10);
    assert_eq!(cache.stats().oldest_access, None);

    cache.set("a".to_string(), unit("a"));
    let first = cache.stats().oldest_access;
    assert!(first.is_some());

    cache.set("b".to_string(), unit("b"));
    assert_eq!(cache.stats().oldest_access, first, "a is still the LRU entry");

    cache.get("a");
    let after = cache.stats().oldest_access;
    assert!(after >= first);
}

// == File Persistence ==

#[test]
fn test_file_roundtrip_with_custom_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.bin");

    let source = LruCache::new(100);
    for (i, tag) in ["x", "y", "z"].iter().enumerate() {
        source.set(
            format!("key{}", i),
            Blob {
                weight: (i as u64 + 1) * 10,
                tag: tag.to_string(),
            },
        );
    }
    source.save_to_file(&path).unwrap();

    let restored: LruCache<Blob> = LruCache::new(100);
    assert_eq!(restored.load_from_file(&path).unwrap(), 3);

    assert_eq!(restored.stats().size, 60);
    for key in ["key0", "key1", "key2"] {
        assert_eq!(restored.get(key), source.get(key));
    }
}

#[test]
fn test_load_order_follows_stream_order() {
    let source = LruCache::new(100);
    source.set("old".to_string(), unit("1"));
    source.set("new".to_string(), unit("2"));

    let mut buf = Vec::new();
    source.save(&mut buf).unwrap();

    let restored: LruCache<Unit> = LruCache::new(100);
    restored.load(buf.as_slice()).unwrap();

    // Saved MRU first, so the last item applied ("old") ends up in front
    assert_eq!(restored.keys(), vec!["old", "new"]);
}

#[test]
fn test_load_into_smaller_cache_evicts() {
    let source = LruCache::new(100);
    for i in 0..10 {
        source.set(format!("k{}", i), unit("v"));
    }
    let mut buf = Vec::new();
    source.save(&mut buf).unwrap();

    let small: LruCache<Unit> = LruCache::new(4);
    small.load(buf.as_slice()).unwrap();

    let stats = small.stats();
    assert_eq!(stats.length, 4);
    assert_eq!(stats.size, 4);
}

#[test]
fn test_save_to_file_truncates_previous_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.bin");
    fs::write(&path, vec![0xAB; 4096]).unwrap();

    let cache = LruCache::new(10);
    cache.set("a".to_string(), "b".to_string());
    cache.save_to_file(&path).unwrap();

    assert!(fs::metadata(&path).unwrap().len() < 4096);
    let restored: LruCache<String> = LruCache::new(10);
    restored.load_from_file(&path).unwrap();
    assert_eq!(restored.keys(), vec!["a"]);
}

#[test]
fn test_save_to_unwritable_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("cache.bin");
    let cache: LruCache<String> = LruCache::new(10);

    let result = cache.save_to_file(&path);

    assert!(matches!(result, Err(CacheError::Io { .. })));
}

#[test]
fn test_corrupt_file_is_decode_error_and_cache_stays_usable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.bin");
    fs::write(&path, b"not a snapshot").unwrap();

    let cache: LruCache<String> = LruCache::new(10);
    let result = cache.load_from_file(&path);

    assert!(matches!(result, Err(CacheError::Decode(_))));
    cache.set("still".to_string(), "works".to_string());
    assert_eq!(cache.get("still"), Some("works".to_string()));
}

// == Concurrency ==

#[test]
fn test_save_while_writers_run() {
    let cache = Arc::new(LruCache::new(256));
    let writers: Vec<_> = (0..4)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..500 {
                    cache.set(format!("{}-{}", t, i), "xy".to_string());
                }
            })
        })
        .collect();

    let mut snapshots = Vec::new();
    for _ in 0..10 {
        let mut buf = Vec::new();
        cache.save(&mut buf).unwrap();
        snapshots.push(buf);
    }
    for writer in writers {
        writer.join().unwrap();
    }

    // Every snapshot is a consistent, loadable point-in-time copy
    for buf in snapshots {
        let restored: LruCache<String> = LruCache::new(256);
        restored.load(buf.as_slice()).unwrap();
        let stats = restored.stats();
        assert!(stats.size <= 256);
        assert_eq!(stats.size, stats.length * 2);
    }
}
