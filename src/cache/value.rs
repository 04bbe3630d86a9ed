//! Cache Value Module
//!
//! Defines the capability every stored payload must provide.

use std::sync::Arc;

// == Cache Value ==
/// A payload that can report its own size.
///
/// The size is the unit of capacity accounting. Callers choose what it
/// means (bytes, item weight, ...); the cache only sums it.
pub trait CacheValue {
    /// Returns the size charged against the cache capacity.
    fn size(&self) -> u64;
}

impl CacheValue for String {
    fn size(&self) -> u64 {
        self.len() as u64
    }
}

impl CacheValue for Vec<u8> {
    fn size(&self) -> u64 {
        self.len() as u64
    }
}

impl CacheValue for Box<str> {
    fn size(&self) -> u64 {
        self.len() as u64
    }
}

impl CacheValue for Box<[u8]> {
    fn size(&self) -> u64 {
        self.len() as u64
    }
}

impl<T: CacheValue + ?Sized> CacheValue for Arc<T> {
    fn size(&self) -> u64 {
        (**self).size()
    }
}
