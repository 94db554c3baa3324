//! API Routes
//!
//! Configures the Axum router with all movie service endpoints.

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::auth::require_auth_header_present;
use super::handlers::{
    create_movie, delete_movie, health_handler, list_movies, search_movies, update_movie,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/movies` - List every movie
/// - `POST /api/movies` - Create a movie (gated)
/// - `PUT /api/movies/:id` - Update a movie (gated)
/// - `DELETE /api/movies/:id` - Delete a movie (gated)
/// - `GET /api/search?q=` - Search by title or genre
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Auth gate: applied to the write routes only
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Reads stay public, writes go through the auth gate
    let movies = get(list_movies).merge(
        post(create_movie).route_layer(middleware::from_fn(require_auth_header_present)),
    );
    let movie_by_id = put(update_movie)
        .delete(delete_movie)
        .route_layer(middleware::from_fn(require_auth_header_present));

    Router::new()
        .route("/api/movies", movies)
        .route("/api/movies/:id", movie_by_id)
        .route("/api/search", get(search_movies))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
