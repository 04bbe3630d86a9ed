//! Mini LRU - A size-bounded in-memory cache shell
//!
//! Reads commands from stdin and writes JSON replies to stdout, with
//! optional snapshot restore, periodic snapshots and save on exit.

use std::io;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mini_lru::shell::{run_session, Shell};
use mini_lru::{spawn_snapshot_task, Config};

/// Main entry point for the Mini LRU shell.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the cache and restore the snapshot if one exists
/// 4. Start the periodic snapshot task if configured
/// 5. Serve commands from stdin until EOF or QUIT
/// 6. Stop the snapshot task and write a final snapshot
fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mini_lru=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Starting Mini LRU");

    let config = Config::from_env();
    info!(
        "Configuration loaded: capacity={}, snapshot_path={:?}, snapshot_interval={}s",
        config.capacity, config.snapshot_path, config.snapshot_interval
    );

    let shell = Shell::from_config(&config);

    if let Some(path) = shell.snapshot_path().filter(|path| path.exists()) {
        let loaded = shell
            .cache
            .load_from_file(path)
            .with_context(|| format!("restoring snapshot {}", path.display()))?;
        info!("Restored {} items from {}", loaded, path.display());
    }

    let snapshot_task = config
        .periodic_snapshot()
        .map(|(path, interval)| spawn_snapshot_task(shell.cache.clone(), path, interval));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = run_session(&shell, stdin.lock(), stdout.lock());

    if let Some(task) = snapshot_task {
        task.stop();
    }

    if let Some(path) = shell.snapshot_path() {
        match shell.cache.save_to_file(path) {
            Ok(()) => info!("Saved {} items to {}", shell.cache.len(), path.display()),
            Err(e) => warn!("Final snapshot failed: {}", e),
        }
    }

    session.context("reading commands")?;
    info!("Shutdown complete");
    Ok(())
}
