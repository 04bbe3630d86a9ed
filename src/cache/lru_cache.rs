//! Thread-safe LRU cache
//!
//! Wraps a [`CacheStore`] in a single mutex. Every operation holds the lock
//! for its whole body, so no caller can observe a half-applied mutation.

use parking_lot::Mutex;

use crate::cache::{CacheStats, CacheStore, CacheValue, Item};

// == LRU Cache ==
/// Size-bounded LRU cache, shareable across threads behind an `Arc`.
///
/// # Example
/// ```
/// use mini_lru::LruCache;
///
/// let cache = LruCache::new(8);
/// cache.set("a".to_string(), "1234".to_string());
/// cache.set("b".to_string(), "1234".to_string());
/// cache.get("a");
/// cache.set("c".to_string(), "1234".to_string());
///
/// assert_eq!(cache.keys(), vec!["c", "a"]);
/// ```
#[derive(Debug)]
pub struct LruCache<V> {
    store: Mutex<CacheStore<V>>,
}

impl<V: CacheValue> LruCache<V> {
    // == Constructor ==
    /// Creates an empty cache with the given size ceiling.
    pub fn new(capacity: u64) -> Self {
        Self {
            store: Mutex::new(CacheStore::new(capacity)),
        }
    }

    // == Set ==
    /// Inserts `value` if `key` is absent, evicting as needed.
    ///
    /// If `key` is present the entry is only promoted to most recently
    /// used; its stored value is kept. See [`LruCache::upsert`].
    ///
    /// Returns `true` if a new entry was inserted.
    pub fn set(&self, key: String, value: V) -> bool {
        self.store.lock().set(key, value)
    }

    // == Set If Absent ==
    /// Inserts `value` only if `key` is absent. Returns `true` on insert.
    ///
    /// A present key is not promoted.
    pub fn set_if_absent(&self, key: String, value: V) -> bool {
        self.store.lock().set_if_absent(key, value)
    }

    // == Upsert ==
    /// Replaces the value of `key` (recomputing its size and promoting it),
    /// or inserts it if absent, then evicts as needed.
    pub fn upsert(&self, key: String, value: V) {
        self.store.lock().upsert(key, value);
    }

    // == Upsert Batch ==
    /// Applies `items` in order as [`LruCache::upsert`] does, under a single
    /// lock acquisition. Returns the number of items applied.
    pub fn upsert_batch(&self, items: Vec<Item<V>>) -> usize {
        let applied = items.len();
        let mut store = self.store.lock();
        for item in items {
            store.upsert(item.key, item.value);
        }
        applied
    }

    // == Delete ==
    /// Removes `key`. Returns `false` if it was absent.
    pub fn delete(&self, key: &str) -> bool {
        self.store.lock().delete(key)
    }

    // == Clear ==
    /// Drops all entries, keeping the capacity.
    pub fn clear(&self) {
        self.store.lock().clear();
    }

    // == Set Capacity ==
    /// Changes the size ceiling and evicts down to it immediately.
    pub fn set_capacity(&self, capacity: u64) {
        self.store.lock().set_capacity(capacity);
    }

    // == Stats ==
    /// Returns a consistent snapshot of length, size, capacity and the
    /// oldest access time.
    pub fn stats(&self) -> CacheStats {
        self.store.lock().stats()
    }

    // == Keys ==
    /// Returns a copy of all keys, most recently used first.
    pub fn keys(&self) -> Vec<String> {
        self.store.lock().keys()
    }

    /// Checks for a key without promoting it.
    pub fn contains(&self, key: &str) -> bool {
        self.store.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }

    pub fn capacity(&self) -> u64 {
        self.store.lock().capacity()
    }
}

impl<V: CacheValue + Clone> LruCache<V> {
    // == Get ==
    /// Returns a copy of the value for `key`, promoting it to most recently
    /// used. A miss has no side effect.
    pub fn get(&self, key: &str) -> Option<V> {
        self.store.lock().get(key).cloned()
    }

    // == Items ==
    /// Returns a copy of all (key, value) pairs, most recently used first.
    pub fn items(&self) -> Vec<Item<V>> {
        self.store.lock().items()
    }
}
