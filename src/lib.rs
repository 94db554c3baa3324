//! Movie Lobby - A small movie catalog REST service
//!
//! CRUD endpoints over a record store, with the list and search reads
//! served from a process-local response cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
