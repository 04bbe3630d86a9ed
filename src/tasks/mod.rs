//! Background Tasks Module
//!
//! Contains background tasks that run periodically alongside the cache.
//!
//! # Tasks
//! - Snapshot: Writes the cache to a file at a configured interval

mod snapshot;

pub use snapshot::{spawn_snapshot_task, SnapshotTask};
