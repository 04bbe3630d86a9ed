//! Cache Module
//!
//! Provides a size-bounded in-memory cache with LRU eviction.

mod entry;
mod lru;
mod lru_cache;
mod stats;
mod store;
mod value;


// Re-export public types
pub use entry::{CacheEntry, Item};
pub use lru::{LruList, SlotId};
pub use lru_cache::LruCache;
pub use stats::CacheStats;
pub use store::CacheStore;
pub use value::CacheValue;
