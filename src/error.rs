//! Application error type and its HTTP rendering.
//!
//! Every failure leaving a handler or middleware is an [`AppError`]. The
//! `From<StoreError>` conversion is the single place where store failures are
//! classified into responses.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::WWW_AUTHENTICATE},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

use crate::domain::repositories::StoreError;
use crate::domain::validation::{FieldViolation, violations};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serialized error payload: a stable machine code, a message and details.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Unauthorized { message: String, details: Value },
    #[error("{message}")]
    MalformedIdentifier { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    UniquenessConflict { message: String, details: Value },
    #[error("{message}")]
    MethodNotAllowed { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn malformed_identifier(message: impl Into<String>, details: Value) -> Self {
        Self::MalformedIdentifier {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::UniquenessConflict {
            message: message.into(),
            details,
        }
    }
    pub fn method_not_allowed(message: impl Into<String>, details: Value) -> Self {
        Self::MethodNotAllowed {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Builds a validation error that lists every violated field.
    pub fn invalid_fields(message: impl Into<String>, fields: &[FieldViolation]) -> Self {
        let fields: Vec<Value> = fields
            .iter()
            .map(|v| json!({ "field": v.field, "message": v.message }))
            .collect();

        Self::bad_request(message, json!({ "fields": fields }))
    }

    /// HTTP status this error renders as.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::MalformedIdentifier { .. }
            | AppError::Validation { .. }
            | AppError::UniquenessConflict { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its serializable payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Unauthorized { message, details } => ("unauthorized", message, details),
            AppError::MalformedIdentifier { message, details } => {
                ("invalid_id", message, details)
            }
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::UniquenessConflict { message, details } => {
                ("duplicate_key", message, details)
            }
            AppError::MethodNotAllowed { message, details } => {
                ("method_not_allowed", message, details)
            }
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        let mut response = (status, Json(body)).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::invalid_fields("Validation failed", &violations(&errors))
    }
}

/// Classifies store failures.
///
/// Validation and uniqueness failures are client errors (400); a vanished
/// document is a 404; everything else is an unclassified 500 whose detail is
/// logged and echoed back.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(fields) => {
                AppError::invalid_fields("Validation failed", &fields)
            }
            StoreError::UniqueViolation { constraint } => AppError::conflict(
                "Duplicate key violates unique constraint",
                json!({ "constraint": constraint }),
            ),
            StoreError::Missing => {
                AppError::not_found("Document no longer exists", json!({}))
            }
            StoreError::Backend(reason) => {
                tracing::error!(error = %reason, "Unclassified store error");
                AppError::internal("Store error", json!({ "reason": reason }))
            }
        }
    }
}
