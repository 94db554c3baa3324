//! API Handlers
//!
//! HTTP request handlers for each movie service endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use super::extractors::{JsonBody, QueryParams};
use crate::cache::{CacheSlot, CachedMovies, ResponseCache};
use crate::error::{MovieError, Result};
use crate::models::{HealthResponse, Movie, MovieFields, SearchQuery};
use crate::store::{InMemoryMovieStore, MovieFilter, MovieStore};

/// Application state shared across all handlers.
///
/// The cache is owned here rather than living in a global, so tests can hand
/// in their own cache and store.
#[derive(Clone)]
pub struct AppState {
    /// Backing record store
    pub store: Arc<dyn MovieStore>,
    /// Cache for the list and search endpoints
    pub cache: Arc<ResponseCache>,
}

impl AppState {
    /// Creates a new AppState around the given store with an empty cache.
    pub fn new(store: Arc<dyn MovieStore>) -> Self {
        Self::with_cache(store, Arc::new(ResponseCache::new()))
    }

    /// Creates a new AppState with an explicit cache.
    pub fn with_cache(store: Arc<dyn MovieStore>, cache: Arc<ResponseCache>) -> Self {
        Self { store, cache }
    }

    /// Creates a new AppState backed by an empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryMovieStore::new()))
    }
}

/// Handler for GET /api/movies
///
/// Returns every movie, served from the `all` cache slot when populated.
pub async fn list_movies(State(state): State<AppState>) -> Result<Json<CachedMovies>> {
    let store = Arc::clone(&state.store);
    let movies = state
        .cache
        .get_or_fetch(CacheSlot::All, || async move { store.find_all().await })
        .await?;

    Ok(Json(movies))
}

/// Handler for GET /api/search?q=
///
/// Matches `q` against title or genre. The `search` slot is not keyed by the
/// query, so any cached result is returned for any later query text.
pub async fn search_movies(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<SearchQuery>,
) -> Result<Json<CachedMovies>> {
    let Some(text) = query.text() else {
        return Err(MovieError::InvalidRequest(
            "Query parameter \"q\" is required".to_string(),
        ));
    };

    let filter = MovieFilter::TitleOrGenreContains(text.to_string());
    let store = Arc::clone(&state.store);
    let movies = state
        .cache
        .get_or_fetch(CacheSlot::Search, || async move { store.find(&filter).await })
        .await?;

    Ok(Json(movies))
}

/// Handler for POST /api/movies
///
/// Inserts a movie and returns it with its assigned id.
pub async fn create_movie(
    State(state): State<AppState>,
    JsonBody(fields): JsonBody<MovieFields>,
) -> Result<(StatusCode, Json<Movie>)> {
    let movie = state.store.insert(fields).await?;
    info!("Created movie {}", movie.id);

    Ok((StatusCode::CREATED, Json(movie)))
}

/// Handler for PUT /api/movies/:id
///
/// Applies the supplied fields and returns the updated movie.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(fields): JsonBody<MovieFields>,
) -> Result<Json<Movie>> {
    let movie = state
        .store
        .update_by_id(&id, fields)
        .await?
        .ok_or(MovieError::NotFound)?;
    info!("Updated movie {}", movie.id);

    Ok(Json(movie))
}

/// Handler for DELETE /api/movies/:id
///
/// Removes a movie and returns the deleted record.
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>> {
    let movie = state
        .store
        .delete_by_id(&id)
        .await?
        .ok_or(MovieError::NotFound)?;
    info!("Deleted movie {}", movie.id);

    Ok(Json(movie))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
