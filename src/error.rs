//! Error types for the movie service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

/// Message returned for every store failure. Store details are never sent to clients.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

// == Store Error Enum ==
/// Failures raised by a record store backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// A record failed the store's schema checks
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The backend could not be reached or returned garbage
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

// == Movie Error Enum ==
/// Unified error type for the movie service.
#[derive(Error, Debug)]
pub enum MovieError {
    /// Missing or malformed request input
    #[error("{0}")]
    InvalidRequest(String),

    /// Write request without an authorization header
    #[error("Unauthorized. Token missing.")]
    Unauthorized,

    /// No record matched the given identifier
    #[error("Movie not found")]
    NotFound,

    /// Any record store failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

// == IntoResponse Implementation ==
impl IntoResponse for MovieError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            MovieError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            MovieError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            MovieError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            MovieError::Store(err) => {
                error!("Record store failure: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the movie service.
pub type Result<T> = std::result::Result<T, MovieError>;
