//! Shell Handlers
//!
//! Executes parsed commands against a shared cache and renders replies.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::cache::LruCache;
use crate::config::Config;
use crate::error::CacheError;
use crate::models::{
    Command, CommandError, DeleteReply, GetReply, KeysReply, MessageReply, SetReply, StatsReply,
};

/// Failures surfaced to the shell user as error replies.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error("No snapshot path given and none configured")]
    NoSnapshotPath,

    #[error("Failed to render reply: {0}")]
    Render(#[from] serde_json::Error),
}

/// Shell state shared across sessions.
///
/// Contains the cache wrapped in an `Arc` so a snapshot task can hold it too.
#[derive(Debug, Clone)]
pub struct Shell {
    /// Thread-safe cache
    pub cache: Arc<LruCache<String>>,
    /// Default target of `SAVE`/`LOAD` without a path
    snapshot_path: Option<PathBuf>,
}

impl Shell {
    /// Creates a new Shell over the given cache.
    pub fn new(cache: Arc<LruCache<String>>) -> Self {
        Self {
            cache,
            snapshot_path: None,
        }
    }

    /// Creates a new Shell from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            cache: Arc::new(LruCache::new(config.capacity)),
            snapshot_path: config.snapshot_path.clone(),
        }
    }

    /// Sets the default snapshot file.
    pub fn with_snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot_path = Some(path.into());
        self
    }

    /// Returns the default snapshot file, if any.
    pub fn snapshot_path(&self) -> Option<&Path> {
        self.snapshot_path.as_deref()
    }

    /// Parses and executes one input line, returning the JSON reply.
    pub fn execute_line(&self, line: &str) -> Result<String, ShellError> {
        let command: Command = line.parse()?;
        self.execute(command)
    }

    /// Executes a command and returns the JSON reply.
    pub fn execute(&self, command: Command) -> Result<String, ShellError> {
        match command {
            Command::Get { key } => {
                let value = self.cache.get(&key);
                render(&GetReply::new(key, value))
            }
            Command::Set { key, value } => {
                // An existing key is only promoted, its value is kept
                let stored = self.cache.set(key.clone(), value);
                render(&SetReply::new(key, stored))
            }
            Command::SetIfAbsent { key, value } => {
                let stored = self.cache.set_if_absent(key.clone(), value);
                render(&SetReply::new(key, stored))
            }
            Command::Delete { key } => {
                let deleted = self.cache.delete(&key);
                render(&DeleteReply::new(key, deleted))
            }
            Command::Clear => {
                self.cache.clear();
                render(&MessageReply::new("Cache cleared"))
            }
            Command::Capacity(capacity) => {
                self.cache.set_capacity(capacity);
                render(&MessageReply::new(format!("Capacity set to {}", capacity)))
            }
            Command::Stats => render(&StatsReply::from(self.cache.stats())),
            Command::Keys => render(&KeysReply {
                keys: self.cache.keys(),
            }),
            Command::Save(path) => {
                let path = self.resolve(path)?;
                self.cache.save_to_file(&path)?;
                render(&MessageReply::new(format!(
                    "Saved {} items to {}",
                    self.cache.len(),
                    path.display()
                )))
            }
            Command::Load(path) => {
                let path = self.resolve(path)?;
                let loaded = self.cache.load_from_file(&path)?;
                render(&MessageReply::new(format!(
                    "Loaded {} items from {}",
                    loaded,
                    path.display()
                )))
            }
            Command::Quit => render(&MessageReply::new("Bye")),
        }
    }

    fn resolve(&self, path: Option<PathBuf>) -> Result<PathBuf, ShellError> {
        path.or_else(|| self.snapshot_path.clone())
            .ok_or(ShellError::NoSnapshotPath)
    }
}

fn render<T: Serialize>(reply: &T) -> Result<String, ShellError> {
    Ok(serde_json::to_string(reply)?)
}
