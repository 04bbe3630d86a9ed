//! Periodic Snapshot Task
//!
//! Background thread that periodically writes the cache to a snapshot file.

use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::cache::{CacheValue, LruCache};

/// Handle to a running snapshot task.
///
/// Dropping the handle stops the task as well, without waiting for it.
#[derive(Debug)]
pub struct SnapshotTask {
    /// Taken on the first stop signal
    stop: Option<Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl SnapshotTask {
    /// Signals the task to stop and waits for the thread to exit.
    ///
    /// A snapshot in progress is completed first.
    pub fn stop(mut self) {
        self.signal();
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("Snapshot task panicked");
            }
        }
    }

    /// Returns true once the thread has exited.
    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Sends the stop signal at most once.
    fn signal(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }
}

impl Drop for SnapshotTask {
    fn drop(&mut self) {
        self.signal();
    }
}

/// Spawns a background thread that saves the cache to `path` every
/// `interval`.
///
/// Failures are logged and the task keeps running; the next tick retries
/// with a fresh snapshot.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use std::time::Duration;
/// use mini_lru::{spawn_snapshot_task, LruCache};
///
/// let cache = Arc::new(LruCache::<String>::new(1024));
/// let task = spawn_snapshot_task(cache.clone(), "cache.bin", Duration::from_secs(60));
/// // Later, during shutdown:
/// task.stop();
/// ```
pub fn spawn_snapshot_task<V>(
    cache: Arc<LruCache<V>>,
    path: impl Into<PathBuf>,
    interval: Duration,
) -> SnapshotTask
where
    V: CacheValue + Clone + Serialize + Send + 'static,
{
    let path = path.into();
    let (stop, stop_rx) = mpsc::channel::<()>();

    let thread = thread::spawn(move || {
        info!(
            "Starting snapshot task for {} with interval of {:?}",
            path.display(),
            interval
        );

        loop {
            // Sleep for the configured interval, waking early on stop
            match stop_rx.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => {}
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }

            match cache.save_to_file(&path) {
                Ok(()) => debug!("Snapshot written to {}", path.display()),
                Err(e) => warn!("Snapshot failed: {}", e),
            }
        }

        debug!("Snapshot task stopped");
    });

    SnapshotTask {
        stop: Some(stop),
        thread: Some(thread),
    }
}
