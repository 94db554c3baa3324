//! Record Store Module
//!
//! The document-store interface the handlers query, plus an in-process
//! implementation used by the server binary and the tests.

mod memory;

pub use memory::InMemoryMovieStore;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{Movie, MovieFields};

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Query filters understood by [`MovieStore::find`].
#[derive(Debug, Clone, PartialEq)]
pub enum MovieFilter {
    /// Case-insensitive substring match on title OR genre
    TitleOrGenreContains(String),
}

impl MovieFilter {
    /// Returns true if `movie` satisfies the filter.
    pub fn matches(&self, movie: &Movie) -> bool {
        match self {
            MovieFilter::TitleOrGenreContains(text) => movie.title_or_genre_contains(text),
        }
    }
}

/// Generic query interface over the movie collection.
///
/// Implementations must be safe to share across request tasks.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Returns every record in insertion order.
    async fn find_all(&self) -> StoreResult<Vec<Movie>>;

    /// Returns the records matching `filter`, in insertion order.
    async fn find(&self, filter: &MovieFilter) -> StoreResult<Vec<Movie>>;

    /// Looks up a single record.
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Movie>>;

    /// Inserts a new record and returns it with its assigned identifier.
    ///
    /// `title`, `genre` and `streaming_link` are required; `rating` defaults to 0.
    async fn insert(&self, fields: MovieFields) -> StoreResult<Movie>;

    /// Applies the supplied fields to an existing record.
    ///
    /// Returns `None` if no record has the given identifier.
    async fn update_by_id(&self, id: &str, fields: MovieFields) -> StoreResult<Option<Movie>>;

    /// Removes a record and returns its last state.
    async fn delete_by_id(&self, id: &str) -> StoreResult<Option<Movie>>;
}
