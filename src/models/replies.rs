//! Reply DTOs for the cache shell
//!
//! Each command produces one reply, written as a single JSON line.

use serde::Serialize;

use crate::cache::CacheStats;

/// Reply to `GET`. A miss has a null value.
#[derive(Debug, Clone, Serialize)]
pub struct GetReply {
    /// The requested key
    pub key: String,
    /// The stored value, None on a miss
    pub value: Option<String>,
}

impl GetReply {
    /// Creates a new GetReply
    pub fn new(key: impl Into<String>, value: Option<String>) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Reply to `SET` and `SETNX`.
#[derive(Debug, Clone, Serialize)]
pub struct SetReply {
    /// The key that was written
    pub key: String,
    /// False when the key already existed and its value was kept
    pub stored: bool,
    /// Human readable outcome
    pub message: String,
}

impl SetReply {
    /// Creates a new SetReply
    pub fn new(key: impl Into<String>, stored: bool) -> Self {
        let key = key.into();
        let message = if stored {
            format!("Key '{}' stored", key)
        } else {
            format!("Key '{}' already present, value kept", key)
        };
        Self {
            key,
            stored,
            message,
        }
    }
}

/// Reply to `DEL`.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteReply {
    /// The key that was targeted
    pub key: String,
    /// Whether anything was removed
    pub deleted: bool,
}

impl DeleteReply {
    /// Creates a new DeleteReply
    pub fn new(key: impl Into<String>, deleted: bool) -> Self {
        Self {
            key: key.into(),
            deleted,
        }
    }
}

/// Reply to `STATS`.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReply {
    /// Number of entries
    pub length: u64,
    /// Total accounted size
    pub size: u64,
    /// Configured size ceiling
    pub capacity: u64,
    /// size / capacity
    pub usage: f64,
    /// Last access of the least recently used entry, RFC 3339
    pub oldest_access: Option<String>,
}

impl From<CacheStats> for StatsReply {
    fn from(stats: CacheStats) -> Self {
        Self {
            usage: stats.usage(),
            length: stats.length,
            size: stats.size,
            capacity: stats.capacity,
            oldest_access: stats.oldest_access.map(|t| t.to_rfc3339()),
        }
    }
}

/// Reply to `KEYS`, most recently used first.
#[derive(Debug, Clone, Serialize)]
pub struct KeysReply {
    pub keys: Vec<String>,
}

/// Acknowledgement for commands without a payload.
#[derive(Debug, Clone, Serialize)]
pub struct MessageReply {
    pub message: String,
}

impl MessageReply {
    /// Creates a new MessageReply
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error reply for parse and execution failures
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReply {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorReply {
    /// Creates a new ErrorReply
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
