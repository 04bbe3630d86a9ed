//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cache::CacheValue;

// == Item ==
/// A (key, value) pair as enumerated by the cache and written to snapshots.
///
/// Carries no recency or size information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item<V> {
    pub key: String,
    pub value: V,
}

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The key this entry is indexed under
    pub key: String,
    /// The stored value
    pub value: V,
    /// Size of `value` when it was stored
    pub size: u64,
    /// Last time the entry was inserted, read or promoted
    pub accessed_at: DateTime<Utc>,
}

impl<V: CacheValue> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry, computing its size from the value.
    pub fn new(key: String, value: V) -> Self {
        let size = value.size();
        Self {
            key,
            value,
            size,
            accessed_at: Utc::now(),
        }
    }

    // == Touch ==
    /// Refreshes the last-access timestamp.
    pub fn touch(&mut self) {
        self.accessed_at = Utc::now();
    }

    // == Replace ==
    /// Swaps in a new value and recomputes the cached size.
    ///
    /// Returns the previous cached size so the caller can adjust its
    /// running total.
    pub fn replace(&mut self, value: V) -> u64 {
        let old_size = self.size;
        self.size = value.size();
        self.value = value;
        old_size
    }
}

impl<V: Clone> CacheEntry<V> {
    /// Projects the entry onto a snapshot item.
    pub fn to_item(&self) -> Item<V> {
        Item {
            key: self.key.clone(),
            value: self.value.clone(),
        }
    }
}
