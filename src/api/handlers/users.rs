//! Handlers for user management endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::user::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::api::extract::JsonBody;
use crate::application::services::AuthUser;
use crate::domain::entities::{Credentials, User};
use crate::error::AppError;
use crate::state::AppState;

fn user_to_response(u: User) -> UserResponse {
    UserResponse {
        id: u.id.to_string(),
        username: u.username,
        created_at: u.created_at,
        updated_at: u.updated_at,
    }
}

/// Lists all users.
///
/// # Endpoint
///
/// `GET /api/users`
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.list().await?;

    Ok(Json(users.into_iter().map(user_to_response).collect()))
}

/// Creates a user.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Errors
///
/// Returns 400 if username or password is blank, or the username is taken.
pub async fn create_user_handler(
    State(state): State<AppState>,
    actor: AuthUser,
    JsonBody(payload): JsonBody<CreateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let credentials = Credentials::new(payload.username.as_deref(), payload.password.as_deref());

    let user = state.user_service.create(credentials).await?;

    tracing::info!(user = %actor.username, username = %user.username, "User created");

    Ok(Json(user_to_response(user)))
}

/// Returns one user.
///
/// # Endpoint
///
/// `GET /api/users/{username}`
///
/// # Errors
///
/// Returns 404 if no user has that username.
pub async fn get_user_handler(
    Path(username): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.get(&username).await?;

    Ok(Json(user_to_response(user)))
}

/// Changes a user's password.
///
/// # Endpoint
///
/// `PUT /api/users/{username}`
///
/// # Errors
///
/// Returns 404 if no user has that username, whatever the body.
/// Returns 400 if the password is blank.
pub async fn update_user_handler(
    Path(username): Path<String>,
    State(state): State<AppState>,
    actor: AuthUser,
    JsonBody(payload): JsonBody<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let password = payload.password.unwrap_or_default();

    let user = state
        .user_service
        .update_password(&username, &password)
        .await?;

    tracing::info!(user = %actor.username, username = %user.username, "User password changed");

    Ok(Json(user_to_response(user)))
}

/// Deletes a user and returns it as it was.
///
/// # Endpoint
///
/// `DELETE /api/users/{username}`
///
/// # Errors
///
/// Returns 404 if no user has that username.
pub async fn delete_user_handler(
    Path(username): Path<String>,
    State(state): State<AppState>,
    actor: AuthUser,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.delete(&username).await?;

    tracing::info!(user = %actor.username, username = %user.username, "User deleted");

    Ok(Json(user_to_response(user)))
}

/// Rejects `POST` on an existing user.
///
/// # Endpoint
///
/// `POST /api/users/{username}`
///
/// # Errors
///
/// Returns 404 if no user has that username, 405 otherwise.
pub async fn user_method_not_allowed_handler(
    Path(username): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.get(&username).await?;

    Err(AppError::method_not_allowed(
        "Method not allowed",
        json!({ "method": "POST", "username": user.username }),
    ))
}
