//! Snapshot persistence for [`LruCache`].
//!
//! A snapshot is the bincode encoding of `Vec<Item<V>>`, most recently used
//! first: a little-endian `u64` item count followed by each item's key and
//! value. Values are encoded through their `serde` implementation.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::cache::{CacheValue, Item, LruCache};
use crate::error::{CacheError, Result};

impl<V> LruCache<V>
where
    V: CacheValue + Clone + Serialize,
{
    /// Writes all items to `sink`.
    ///
    /// The items are copied out under the lock and encoded after it is
    /// released, so a slow sink does not block other cache operations.
    /// Mutations racing with the save are not part of it.
    pub fn save<W: Write>(&self, sink: W) -> Result<()> {
        let items = self.items();
        bincode::serialize_into(sink, &items).map_err(CacheError::Encode)?;
        debug!("Saved {} cache items", items.len());
        Ok(())
    }

    /// Writes all items to the file at `path`, creating or truncating it.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| CacheError::io("creating snapshot", path, e))?;
        let mut writer = BufWriter::new(file);

        self.save(&mut writer)
            .map_err(|e| e.with_path("writing snapshot", path))?;
        writer
            .flush()
            .map_err(|e| CacheError::io("writing snapshot", path, e))?;
        Ok(())
    }
}

impl<V> LruCache<V>
where
    V: CacheValue + DeserializeOwned,
{
    /// Reads items from `source` and applies them in stream order.
    ///
    /// A key already in the cache has its value replaced (see
    /// [`LruCache::upsert`]); a new key is inserted. Items are decoded
    /// without holding the lock, then applied as one batch, so other
    /// threads see either none or all of them. On a decoding error every
    /// item before the faulty one is still applied.
    ///
    /// Returns the number of items applied.
    pub fn load<R: Read>(&self, source: R) -> Result<usize> {
        let mut reader = source;
        let count: u64 = bincode::deserialize_from(&mut reader).map_err(CacheError::Decode)?;

        let mut items = Vec::new();
        let mut failure = None;
        for _ in 0..count {
            match bincode::deserialize_from::<_, Item<V>>(&mut reader) {
                Ok(item) => items.push(item),
                Err(e) => {
                    failure = Some(CacheError::Decode(e));
                    break;
                }
            }
        }

        let applied = self.upsert_batch(items);
        match failure {
            Some(e) => Err(e),
            None => {
                debug!("Loaded {} cache items", applied);
                Ok(applied)
            }
        }
    }

    /// Reads items from the file at `path`. See [`LruCache::load`].
    pub fn load_from_file(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| CacheError::io("opening snapshot", path, e))?;
        self.load(BufReader::new(file))
            .map_err(|e| e.with_path("reading snapshot", path))
    }
}
