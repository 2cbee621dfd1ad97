//! Handler for the login endpoint.

use axum::{Json, extract::State};

use crate::api::dto::auth::{LoginRequest, TokenResponse};
use crate::api::extract::JsonBody;
use crate::domain::entities::Credentials;
use crate::error::AppError;
use crate::state::AppState;

/// Exchanges a username and password for a bearer token.
///
/// # Endpoint
///
/// `POST /api/auth/login`
///
/// # Request
///
/// ```json
/// { "username": "user", "password": "password" }
/// ```
///
/// # Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIs..." }
/// ```
///
/// # Errors
///
/// Returns 400 if username or password is missing.
/// Returns 401 if the credentials do not match a user.
pub async fn login_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let credentials = Credentials::new(payload.username.as_deref(), payload.password.as_deref());

    let token = state.auth_service.login(credentials).await?;

    Ok(Json(TokenResponse { token }))
}
