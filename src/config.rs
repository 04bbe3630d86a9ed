//! Configuration Module
//!
//! Handles loading and managing cache configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default size ceiling: 1 MiB of string payload.
pub const DEFAULT_CAPACITY: u64 = 1024 * 1024;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Size ceiling in bytes of stored values
    pub capacity: u64,
    /// Snapshot file restored at startup and written at shutdown
    pub snapshot_path: Option<PathBuf>,
    /// Background snapshot interval in seconds, 0 disables it
    pub snapshot_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Size ceiling in bytes (default: 1048576)
    /// - `SNAPSHOT_PATH` - Snapshot file (default: none)
    /// - `SNAPSHOT_INTERVAL` - Background snapshot frequency in seconds (default: 0, off)
    pub fn from_env() -> Self {
        Self {
            capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CAPACITY),
            snapshot_path: env::var_os("SNAPSHOT_PATH")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            snapshot_interval: env::var("SNAPSHOT_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
        }
    }

    /// Returns the path and period of the background snapshot task, if
    /// both a path and a non-zero interval are configured.
    pub fn periodic_snapshot(&self) -> Option<(PathBuf, Duration)> {
        match (&self.snapshot_path, self.snapshot_interval) {
            (Some(path), secs) if secs > 0 => Some((path.clone(), Duration::from_secs(secs))),
            _ => None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            snapshot_path: None,
            snapshot_interval: 0,
        }
    }
}
