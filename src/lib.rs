//! Mini LRU - A size-bounded in-memory cache
//!
//! Provides a thread-safe least-recently-used cache with size accounting
//! and binary snapshot persistence.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod persistence;
pub mod shell;
pub mod tasks;

pub use cache::{CacheStats, CacheValue, Item, LruCache};
pub use config::Config;
pub use error::{CacheError, Result};
pub use tasks::spawn_snapshot_task;
