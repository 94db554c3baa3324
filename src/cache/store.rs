//! Response Cache Store
//!
//! Slot storage plus the consult-then-populate read path used by the handlers.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::cache::CacheSlot;
use crate::models::Movie;
use crate::store::StoreResult;

/// Shared, immutable snapshot of a cached result.
pub type CachedMovies = Arc<Vec<Movie>>;

// == Response Cache ==
/// Process-wide cache holding one movie list per [`CacheSlot`].
///
/// The locks only make individual reads and writes memory safe. Nothing is
/// held across a store call, so two concurrent misses on the same slot both
/// fetch and the later `put` wins.
#[derive(Debug, Default)]
pub struct ResponseCache {
    all: RwLock<CachedMovies>,
    search: RwLock<CachedMovies>,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates a cache with both slots empty.
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, slot: CacheSlot) -> &RwLock<CachedMovies> {
        match slot {
            CacheSlot::All => &self.all,
            CacheSlot::Search => &self.search,
        }
    }

    // == Get ==
    /// Returns the list currently stored for `slot`, which may be empty.
    pub async fn get(&self, slot: CacheSlot) -> CachedMovies {
        Arc::clone(&*self.slot(slot).read().await)
    }

    // == Put ==
    /// Unconditionally overwrites the list stored for `slot`.
    pub async fn put(&self, slot: CacheSlot, records: CachedMovies) {
        *self.slot(slot).write().await = records;
    }

    // == Is Empty ==
    /// True when `slot` was never populated or last held zero records.
    ///
    /// The two cases are indistinguishable, so zero-result reads are never
    /// served from cache.
    pub async fn is_empty(&self, slot: CacheSlot) -> bool {
        self.slot(slot).read().await.is_empty()
    }

    // == Clear ==
    /// Empties every slot. No request handler calls this.
    pub async fn clear(&self) {
        for slot in CacheSlot::ALL_SLOTS {
            self.put(slot, CachedMovies::default()).await;
        }
    }

    // == Get Or Fetch ==
    /// Serves `slot` from cache, or runs `fetch` and stores its result.
    ///
    /// A failed fetch leaves the slot as it was.
    pub async fn get_or_fetch<F, Fut>(&self, slot: CacheSlot, fetch: F) -> StoreResult<CachedMovies>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = StoreResult<Vec<Movie>>>,
    {
        let cached = self.get(slot).await;
        if !cached.is_empty() {
            info!("Serving '{}' from cache", slot);
            return Ok(cached);
        }

        debug!("Cache miss for '{}', querying store", slot);
        let records: CachedMovies = Arc::new(fetch().await?);
        self.put(slot, Arc::clone(&records)).await;
        Ok(records)
    }
}
