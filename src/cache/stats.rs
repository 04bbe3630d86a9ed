//! Cache Statistics Module
//!
//! Point-in-time view of cache occupancy.

use chrono::{DateTime, Utc};
use serde::Serialize;

// == Cache Stats ==
/// Snapshot of cache occupancy, taken under a single lock acquisition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of entries in the cache
    pub length: u64,
    /// Sum of the cached sizes of all entries
    pub size: u64,
    /// Configured size ceiling
    pub capacity: u64,
    /// Last access time of the least recently used entry, None when empty
    pub oldest_access: Option<DateTime<Utc>>,
}

impl CacheStats {
    // == Usage ==
    /// Returns size / capacity, or 0.0 for a zero capacity.
    pub fn usage(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.size as f64 / self.capacity as f64
        }
    }

    // == JSON ==
    /// Renders the stats as a JSON object.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn empty_stats() -> CacheStats {
        CacheStats {
            length: 0,
            size: 0,
            capacity: 100,
            oldest_access: None,
        }
    }

    #[test]
    fn test_usage_empty() {
        assert_eq!(empty_stats().usage(), 0.0);
    }

    #[test]
    fn test_usage_zero_capacity() {
        let stats = CacheStats {
            capacity: 0,
            size: 5,
            ..empty_stats()
        };
        assert_eq!(stats.usage(), 0.0);
    }

    #[test]
    fn test_usage_half() {
        let stats = CacheStats {
            length: 2,
            size: 50,
            ..empty_stats()
        };
        assert_eq!(stats.usage(), 0.5);
    }

    #[test]
    fn test_to_json_empty_has_null_oldest() {
        let json: serde_json::Value = serde_json::from_str(&empty_stats().to_json()).unwrap();

        assert_eq!(json["length"], 0);
        assert_eq!(json["size"], 0);
        assert_eq!(json["capacity"], 100);
        assert!(json["oldest_access"].is_null());
    }

    #[test]
    fn test_to_json_with_oldest() {
        let stats = CacheStats {
            length: 1,
            size: 3,
            oldest_access: Some(Utc::now()),
            ..empty_stats()
        };
        let json: serde_json::Value = serde_json::from_str(&stats.to_json()).unwrap();

        assert!(json["oldest_access"].is_string());
    }
}
