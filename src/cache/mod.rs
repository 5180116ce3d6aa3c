use crate::model::CatalogEntry;
use std::collections::HashMap;
use std::sync::RwLock;

/// Key/value store holding scanned catalogs.
///
/// The whole catalog is stored as one value under the source id.
/// Expiry, if any, is up to the implementation.
pub trait CacheBackend: Send + Sync {
    /// Returns the cached catalog, or `None` on a miss.
    fn get(&self, id: &str) -> Option<Vec<CatalogEntry>>;

    /// Stores `entries` under `id`, replacing any previous value.
    fn set(&self, id: &str, entries: Vec<CatalogEntry>);

    /// Drops the value stored under `id`.
    fn invalidate(&self, id: &str);
}

/// In-process cache without expiry.
#[derive(Debug, Default)]
pub struct MemoryCache {
    bins: RwLock<HashMap<String, Vec<CatalogEntry>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

// A panic while holding the lock cannot leave a half-written catalog, so
// poisoned locks are used as-is.
impl CacheBackend for MemoryCache {
    fn get(&self, id: &str) -> Option<Vec<CatalogEntry>> {
        let bins = self.bins.read().unwrap_or_else(|e| e.into_inner());
        bins.get(id).cloned()
    }

    fn set(&self, id: &str, entries: Vec<CatalogEntry>) {
        let mut bins = self.bins.write().unwrap_or_else(|e| e.into_inner());
        bins.insert(id.to_string(), entries);
    }

    fn invalidate(&self, id: &str) {
        let mut bins = self.bins.write().unwrap_or_else(|e| e.into_inner());
        bins.remove(id);
    }
}
