//! Request extractors shared by the handlers.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::AppError;

/// JSON request body that tolerates an empty payload.
///
/// An empty or whitespace-only body yields `T::default()`, so a bodiless
/// `POST` behaves like `{}`. Anything else must parse as JSON; failures are
/// rendered as 400 through [`AppError`] instead of axum's plain-text rejection.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            AppError::bad_request("Invalid request body", json!({ "reason": e.body_text() }))
        })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        serde_json::from_slice(&bytes).map(Self).map_err(|e| {
            AppError::bad_request("Malformed JSON body", json!({ "reason": e.to_string() }))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::contact::ContactRequest;
    use axum::body::Body;
    use axum::http::StatusCode;

    async fn extract(body: &'static str) -> Result<JsonBody<ContactRequest>, AppError> {
        let req = Request::builder()
            .method("POST")
            .uri("/api/contacts")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();

        JsonBody::<ContactRequest>::from_request(req, &()).await
    }

    #[tokio::test]
    async fn test_empty_body_is_default() {
        let JsonBody(req) = extract("").await.unwrap();

        assert!(req.first_name.is_none());
        assert!(req.last_name.is_none());
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let err = extract("{\"firstName\":").await.unwrap_err();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_error_info().message, "Malformed JSON body");
    }

    #[tokio::test]
    async fn test_object_body_parses() {
        let JsonBody(req) = extract(r#"{"firstName":"Post1","lastName":"Post1"}"#)
            .await
            .unwrap();

        assert_eq!(req.first_name, Some(Some("Post1".to_string())));
    }
}
