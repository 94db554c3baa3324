//! In-memory Record Store
//!
//! Keeps the collection in an insertion-ordered vector behind an async lock.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::{MovieFilter, MovieStore, StoreResult};
use crate::error::StoreError;
use crate::models::{Movie, MovieFields};

// == In-Memory Store ==
/// Process-local movie collection.
#[derive(Debug, Default)]
pub struct InMemoryMovieStore {
    movies: RwLock<Vec<Movie>>,
}

impl InMemoryMovieStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `movies`.
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: RwLock::new(movies),
        }
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.movies.read().await.len()
    }

    /// Returns true if the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.movies.read().await.is_empty()
    }
}

fn required(value: Option<String>, field: &str) -> StoreResult<String> {
    value.ok_or_else(|| StoreError::Validation(format!("Path `{}` is required.", field)))
}

#[async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn find_all(&self) -> StoreResult<Vec<Movie>> {
        Ok(self.movies.read().await.clone())
    }

    async fn find(&self, filter: &MovieFilter) -> StoreResult<Vec<Movie>> {
        let movies = self.movies.read().await;
        Ok(movies.iter().filter(|m| filter.matches(m)).cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Movie>> {
        let movies = self.movies.read().await;
        Ok(movies.iter().find(|m| m.id == id).cloned())
    }

    async fn insert(&self, fields: MovieFields) -> StoreResult<Movie> {
        let movie = Movie {
            id: Uuid::new_v4().to_string(),
            title: required(fields.title, "title")?,
            genre: required(fields.genre, "genre")?,
            rating: fields.rating.unwrap_or(0.0),
            streaming_link: required(fields.streaming_link, "streamingLink")?,
        };

        self.movies.write().await.push(movie.clone());
        debug!("Inserted movie {}", movie.id);
        Ok(movie)
    }

    async fn update_by_id(&self, id: &str, fields: MovieFields) -> StoreResult<Option<Movie>> {
        let mut movies = self.movies.write().await;
        let Some(movie) = movies.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };

        if let Some(title) = fields.title {
            movie.title = title;
        }
        if let Some(genre) = fields.genre {
            movie.genre = genre;
        }
        if let Some(rating) = fields.rating {
            movie.rating = rating;
        }
        if let Some(streaming_link) = fields.streaming_link {
            movie.streaming_link = streaming_link;
        }

        Ok(Some(movie.clone()))
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<Option<Movie>> {
        let mut movies = self.movies.write().await;
        let index = movies.iter().position(|m| m.id == id);
        Ok(index.map(|index| movies.remove(index)))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str, genre: &str) -> MovieFields {
        MovieFields {
            title: Some(title.to_string()),
            genre: Some(genre.to_string()),
            rating: Some(4.0),
            streaming_link: Some(format!("https://example.com/{}", title)),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id() {
        let store = InMemoryMovieStore::new();

        let a = store.insert(fields("Alien", "Horror")).await.unwrap();
        let b = store.insert(fields("Heat", "Crime")).await.unwrap();

        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_insert_defaults_rating() {
        let store = InMemoryMovieStore::new();
        let mut input = fields("Alien", "Horror");
        input.rating = None;

        let movie = store.insert(input).await.unwrap();
        assert_eq!(movie.rating, 0.0);
    }

    #[tokio::test]
    async fn test_insert_missing_required_field() {
        let store = InMemoryMovieStore::new();
        let mut input = fields("Alien", "Horror");
        input.streaming_link = None;

        let result = store.insert(input).await;
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_find_all_preserves_insertion_order() {
        let store = InMemoryMovieStore::new();
        store.insert(fields("Zodiac", "Crime")).await.unwrap();
        store.insert(fields("Amelie", "Romance")).await.unwrap();

        let titles: Vec<String> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["Zodiac", "Amelie"]);
    }

    #[tokio::test]
    async fn test_find_matches_title_or_genre() {
        let store = InMemoryMovieStore::new();
        store.insert(fields("Die Hard", "Action")).await.unwrap();
        store.insert(fields("Action Jackson", "Comedy")).await.unwrap();
        store.insert(fields("Up", "Animation")).await.unwrap();

        let filter = MovieFilter::TitleOrGenreContains("action".to_string());
        let found = store.find(&filter).await.unwrap();
        assert_eq!(found.len(), 2);
    }

    #[tokio::test]
    async fn test_seeded_store() {
        let seeded = Movie {
            id: "seed-1".to_string(),
            title: "Up".to_string(),
            genre: "Animation".to_string(),
            rating: 4.2,
            streaming_link: "https://example.com/up".to_string(),
        };
        let store = InMemoryMovieStore::with_movies(vec![seeded.clone()]);

        assert_eq!(store.find_by_id("seed-1").await.unwrap(), Some(seeded));
        let added = store.insert(fields("Heat", "Crime")).await.unwrap();
        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1], added);
    }

    #[tokio::test]
    async fn test_update_only_supplied_fields() {
        let store = InMemoryMovieStore::new();
        let movie = store.insert(fields("Alien", "Horror")).await.unwrap();

        let changes = MovieFields {
            rating: Some(5.0),
            ..MovieFields::default()
        };
        let updated = store.update_by_id(&movie.id, changes).await.unwrap().unwrap();

        assert_eq!(updated.id, movie.id);
        assert_eq!(updated.rating, 5.0);
        assert_eq!(updated.title, "Alien");
        assert_eq!(store.find_by_id(&movie.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_nonexistent() {
        let store = InMemoryMovieStore::new();
        let result = store
            .update_by_id("missing", fields("Alien", "Horror"))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete() {
        let store = InMemoryMovieStore::new();
        let movie = store.insert(fields("Alien", "Horror")).await.unwrap();

        let deleted = store.delete_by_id(&movie.id).await.unwrap();
        assert_eq!(deleted, Some(movie.clone()));
        assert!(store.find_by_id(&movie.id).await.unwrap().is_none());
        assert!(store.delete_by_id(&movie.id).await.unwrap().is_none());
    }
}
