//! API Module
//!
//! HTTP handlers, the authorization gate and routing for the movie REST API.
//!
//! # Endpoints
//! - `GET /api/movies` - List every movie (cached)
//! - `GET /api/search?q=` - Search title or genre (cached)
//! - `POST /api/movies` - Create a movie (auth header required)
//! - `PUT /api/movies/:id` - Update a movie (auth header required)
//! - `DELETE /api/movies/:id` - Delete a movie (auth header required)
//! - `GET /health` - Health check endpoint

pub mod auth;
pub mod extractors;
pub mod handlers;
pub mod routes;

pub use auth::require_auth_header_present;
pub use extractors::{JsonBody, QueryParams};
pub use handlers::*;
pub use routes::create_router;
