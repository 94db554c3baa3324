//! Cache Module
//!
//! Remembers the last result of the two read operations so repeat reads skip
//! the record store.
//!
//! The cache has no expiry, no size bound and no invalidation hook. Writes to
//! the store leave both slots untouched, so a populated slot can serve stale
//! data until [`ResponseCache::clear`] is called or the process exits.

mod slot;
mod store;


// Re-export public types
pub use slot::CacheSlot;
pub use store::{CachedMovies, ResponseCache};
