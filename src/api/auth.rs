//! Authorization Gate
//!
//! Placeholder check for write endpoints: the request must carry a non-empty
//! `Authorization` header. The value itself is never inspected.

use axum::{
    extract::Request,
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::error::{MovieError, Result};

/// True if `headers` carries a non-empty `Authorization` value.
pub fn has_auth_header(headers: &HeaderMap) -> bool {
    headers
        .get(AUTHORIZATION)
        .is_some_and(|value| !value.is_empty())
}

/// Middleware that rejects requests without an `Authorization` header with 401.
///
/// Requests that pass are forwarded unchanged.
pub async fn require_auth_header_present(request: Request, next: Next) -> Result<Response> {
    if !has_auth_header(request.headers()) {
        warn!(
            "Rejected {} {}: authorization header missing",
            request.method(),
            request.uri().path()
        );
        return Err(MovieError::Unauthorized);
    }

    Ok(next.run(request).await)
}
