//! Process-wide icon cache.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::IconError;
use crate::pixmap::Pixmap;

#[derive(Debug)]
struct CacheEntry {
    icon: Pixmap,
    accesses: u64,
}

/// Keyed store of resolved icons.
///
/// The cache is insert-once and unbounded: a key, once stored, is never
/// overwritten and never evicted for the lifetime of the process. Keys are
/// plain identifier strings (themed names, file paths, desktop-entry
/// basenames), so the first resolution of a key fixes the bitmap that every
/// later lookup of that key returns.
///
/// Lookups and stores are individually atomic; share one cache across
/// threads as `Arc<IconCache>`.
pub struct IconCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl IconCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Fetch the icon stored under `key`, bumping its access counter.
    ///
    /// A miss has no side effect.
    pub fn lookup(&self, key: &str) -> Option<Pixmap> {
        let mut entries = self.entries.lock().unwrap();
        let entry = entries.get_mut(key)?;
        entry.accesses += 1;
        log::debug!(
            "IconCache: hit for '{}' ({} accesses)",
            key,
            entry.accesses
        );
        Some(entry.icon.clone())
    }

    /// Insert an icon under `key`, starting its access counter at zero.
    ///
    /// Fails with [`IconError::AlreadyCached`] when the key is already
    /// present, whether or not the new bitmap differs from the stored one.
    /// Callers are expected to check the cache before resolving.
    pub fn store(&self, key: &str, icon: Pixmap) -> Result<(), IconError> {
        let mut entries = self.entries.lock().unwrap();
        if entries.contains_key(key) {
            return Err(IconError::AlreadyCached(key.to_string()));
        }
        log::debug!("IconCache: storing '{}'", key);
        entries.insert(key.to_string(), CacheEntry { icon, accesses: 0 });
        Ok(())
    }

    /// Whether `key` has been stored. Does not count as an access.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }

    /// How many lookups `key` has served, if it is stored. Does not count
    /// as an access itself.
    pub fn access_count(&self, key: &str) -> Option<u64> {
        self.entries.lock().unwrap().get(key).map(|e| e.accesses)
    }

    /// Number of cached icons.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Whether the cache holds no icons.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

impl Default for IconCache {
    fn default() -> Self {
        Self::new()
    }
}
