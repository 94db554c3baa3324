//! Movie record as held by the record store and returned by the API.

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub genre: String,
    pub rating: f64,
    pub streaming_link: String,
}

impl Movie {
    /// Case-insensitive substring match against title or genre.
    pub fn title_or_genre_contains(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle) || self.genre.to_lowercase().contains(&needle)
    }
}
