//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache persistence.
///
/// Misses are never errors: `get` returns `Option` and `delete` returns `bool`.
#[derive(Error, Debug)]
pub enum CacheError {
    /// File open, read or write failure
    #[error("Failed {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A value could not be serialized, or the sink rejected the write
    #[error("Encoding error: {0}")]
    Encode(#[source] bincode::Error),

    /// The snapshot stream is malformed or truncated
    #[error("Decoding error: {0}")]
    Decode(#[source] bincode::Error),
}

impl CacheError {
    /// Wraps an I/O error with the failing action and path.
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        CacheError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Attaches `path` to an I/O failure that surfaced through bincode.
    ///
    /// A stream that ends early stays a decoding error.
    pub fn with_path(self, action: &'static str, path: &Path) -> Self {
        let (inner, rewrap): (bincode::Error, fn(bincode::Error) -> CacheError) = match self {
            CacheError::Encode(inner) => (inner, CacheError::Encode),
            CacheError::Decode(inner) => (inner, CacheError::Decode),
            other => return other,
        };
        match *inner {
            bincode::ErrorKind::Io(source) if source.kind() != io::ErrorKind::UnexpectedEof => {
                CacheError::io(action, path, source)
            }
            kind => rewrap(Box::new(kind)),
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
