//! Request extractors that reject with [`MovieError`].
//!
//! axum's own `Json` and `Query` rejections render as `text/plain` with
//! 415/422 statuses. These wrappers keep every failure on the JSON error path.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{MovieError, StoreError};

/// JSON request body.
///
/// A body that is not JSON, or does not fit `T`, is rejected the way the store
/// rejects a malformed document: `MovieError::Store(StoreError::Validation)`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = MovieError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            debug!("Rejected request body: {}", e.body_text());
            MovieError::Store(StoreError::Validation(e.body_text()))
        })?;

        Ok(JsonBody(value))
    }
}

/// Query string parameters. Malformed query strings are a 400.
#[derive(Debug, Clone)]
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = MovieError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| MovieError::InvalidRequest(e.body_text()))?;

        Ok(QueryParams(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MovieFields, SearchQuery};
    use axum::body::Body;

    fn post(content_type: Option<&str>, body: &str) -> Request {
        let mut builder = Request::builder().method("POST").uri("/api/movies");
        if let Some(ct) = content_type {
            builder = builder.header("content-type", ct);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_json_body_accepts_valid_document() {
        let req = post(Some("application/json"), r#"{"title":"Heat"}"#);
        let JsonBody(fields) = JsonBody::<MovieFields>::from_request(req, &())
            .await
            .unwrap();
        assert_eq!(fields.title.as_deref(), Some("Heat"));
    }

    #[tokio::test]
    async fn test_json_body_rejections_are_store_validation() {
        let cases = [
            post(None, r#"{"title":"Heat"}"#),
            post(Some("application/json"), r#"{"rating":"great"}"#),
            post(Some("application/json"), r#"{"title":5}"#),
            post(Some("application/json"), r#"{"invalid json"#),
        ];

        for req in cases {
            let result = JsonBody::<MovieFields>::from_request(req, &()).await;
            assert!(matches!(
                result,
                Err(MovieError::Store(StoreError::Validation(_)))
            ));
        }
    }

    #[tokio::test]
    async fn test_query_params_rejection_is_invalid_request() {
        let req = Request::builder()
            .uri("/api/search?q=a&q=b")
            .body(Body::empty())
            .unwrap();
        let (mut parts, _) = req.into_parts();

        let result = QueryParams::<SearchQuery>::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(MovieError::InvalidRequest(_))));
    }
}
