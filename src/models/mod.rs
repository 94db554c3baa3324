//! Data models for the movie service API
//!
//! This module defines the movie record and the DTOs (Data Transfer Objects)
//! used for serializing/deserializing HTTP request and response bodies.

pub mod movie;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use movie::Movie;
pub use requests::{MovieFields, SearchQuery};
pub use responses::{ErrorResponse, HealthResponse};
