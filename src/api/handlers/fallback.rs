//! Fallback for requests no route or verb accepts.

use axum::http::{Method, Uri};
use serde_json::json;

use crate::error::AppError;

/// Answers unknown paths and unsupported verbs on known paths.
///
/// Both are reported as a JSON 404 so clients never see an empty-bodied
/// 405 from the router.
pub async fn route_not_found_handler(method: Method, uri: Uri) -> AppError {
    AppError::not_found(
        "Route not found",
        json!({ "method": method.as_str(), "path": uri.path() }),
    )
}
