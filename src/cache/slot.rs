//! Named cache slots.

use std::fmt;

/// One of the fixed cache entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheSlot {
    /// Result of listing every movie
    All,
    /// Result of the most recent search, whatever its query text
    Search,
}

impl CacheSlot {
    /// Every slot, in declaration order.
    pub const ALL_SLOTS: [CacheSlot; 2] = [CacheSlot::All, CacheSlot::Search];

    pub fn as_str(&self) -> &'static str {
        match self {
            CacheSlot::All => "all",
            CacheSlot::Search => "search",
        }
    }
}

impl fmt::Display for CacheSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
