//! Cache Store Module
//!
//! Main cache engine combining a HashMap index with the LRU list and size
//! accounting. `CacheStore` is not synchronized; [`crate::LruCache`] wraps it
//! in a mutex.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats, CacheValue, Item, LruList, SlotId};

// == Cache Store ==
/// Size-bounded LRU storage.
///
/// Invariants held between calls:
/// - every key in `index` points at a live node in `list`, and every node
///   in `list` is indexed under its own key
/// - `size` is the sum of the cached sizes of all entries
/// - `size <= capacity`, or exactly one entry is present
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key to list handle
    index: HashMap<String, SlotId>,
    /// Entries ordered by recency, owns the entries
    list: LruList<CacheEntry<V>>,
    /// Sum of cached entry sizes, wide enough that no sum of `u64` sizes
    /// overflows
    size: u128,
    /// Size ceiling that drives eviction
    capacity: u64,
}

impl<V: CacheValue> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store with the given size ceiling.
    pub fn new(capacity: u64) -> Self {
        Self {
            index: HashMap::new(),
            list: LruList::new(),
            size: 0,
            capacity,
        }
    }

    // == Get ==
    /// Looks up a key, promoting it to most recently used on a hit.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        let id = *self.index.get(key)?;
        self.promote(id);
        self.list.get(id).map(|entry| &entry.value)
    }

    // == Set ==
    /// Inserts a new entry, or only promotes the key if it already exists.
    ///
    /// An existing entry keeps its stored value and size; use
    /// [`CacheStore::upsert`] to replace it. Returns `true` if a new entry
    /// was inserted.
    pub fn set(&mut self, key: String, value: V) -> bool {
        match self.index.get(&key).copied() {
            Some(id) => {
                self.promote(id);
                false
            }
            None => {
                self.add_new(key, value);
                true
            }
        }
    }

    // == Set If Absent ==
    /// Inserts a new entry only if the key is absent.
    ///
    /// Returns `true` if the entry was inserted. A present key is left
    /// completely untouched, recency included.
    pub fn set_if_absent(&mut self, key: String, value: V) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        self.add_new(key, value);
        true
    }

    // == Upsert ==
    /// Replaces the value of an existing entry, or inserts a new one.
    ///
    /// On replacement the cached size is recomputed, the running total is
    /// adjusted by the difference and the entry becomes most recently used.
    pub fn upsert(&mut self, key: String, value: V) {
        match self.index.get(&key).copied() {
            Some(id) => self.update_in_place(id, value),
            None => self.add_new(key, value),
        }
    }

    // == Delete ==
    /// Removes an entry by key.
    ///
    /// Returns `false` if the key was absent.
    pub fn delete(&mut self, key: &str) -> bool {
        let Some(id) = self.index.remove(key) else {
            return false;
        };
        if let Some(entry) = self.list.remove(id) {
            self.size -= u128::from(entry.size);
        }
        true
    }

    // == Clear ==
    /// Drops all entries. Capacity is kept.
    pub fn clear(&mut self) {
        self.list.clear();
        self.index.clear();
        self.size = 0;
    }

    // == Set Capacity ==
    /// Changes the size ceiling and evicts down to it.
    pub fn set_capacity(&mut self, capacity: u64) {
        self.capacity = capacity;
        self.check_capacity();
    }

    // == Stats ==
    /// Returns current occupancy figures.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            length: self.list.len() as u64,
            size: self.size(),
            capacity: self.capacity,
            oldest_access: self.list.peek_oldest().map(|entry| entry.accessed_at),
        }
    }

    // == Keys ==
    /// Returns all keys from most to least recently used.
    pub fn keys(&self) -> Vec<String> {
        self.list.iter().map(|entry| entry.key.clone()).collect()
    }

    // == Contains ==
    /// Checks for a key without affecting recency.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the sum of cached entry sizes, saturating at `u64::MAX`.
    pub fn size(&self) -> u64 {
        u64::try_from(self.size).unwrap_or(u64::MAX)
    }

    /// Returns the configured size ceiling.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    fn promote(&mut self, id: SlotId) {
        self.list.touch(id);
        if let Some(entry) = self.list.get_mut(id) {
            entry.touch();
        }
    }

    fn add_new(&mut self, key: String, value: V) {
        let entry = CacheEntry::new(key.clone(), value);
        self.size += u128::from(entry.size);
        let id = self.list.push_front(entry);
        self.index.insert(key, id);
        self.check_capacity();
    }

    fn update_in_place(&mut self, id: SlotId, value: V) {
        if let Some(entry) = self.list.get_mut(id) {
            let old_size = entry.replace(value);
            self.size = self.size - u128::from(old_size) + u128::from(entry.size);
        }
        self.promote(id);
        self.check_capacity();
    }

    /// Evicts from the back until the size fits, always keeping the last
    /// remaining entry.
    fn check_capacity(&mut self) {
        while self.size > u128::from(self.capacity) && self.list.len() > 1 {
            let Some(evicted) = self.list.evict_oldest() else {
                break;
            };
            self.index.remove(&evicted.key);
            self.size -= u128::from(evicted.size);
        }
    }
}

impl<V: CacheValue + Clone> CacheStore<V> {
    // == Items ==
    /// Returns all (key, value) pairs from most to least recently used.
    pub fn items(&self) -> Vec<Item<V>> {
        self.list.iter().map(CacheEntry::to_item).collect()
    }
}
