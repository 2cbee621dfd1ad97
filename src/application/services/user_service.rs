//! User account management service.

use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::domain::entities::{Credentials, NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::hash_password;

/// Service for managing the users that may log in.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

fn digest(password: &str) -> Result<String, AppError> {
    hash_password(password).map_err(|e| {
        tracing::error!(error = %e, "Password hashing failed");
        AppError::internal("Password hashing failed", json!({}))
    })
}

fn user_not_found(username: &str) -> AppError {
    AppError::not_found(
        "No user with that username has been found",
        json!({ "username": username }),
    )
}

impl UserService {
    /// Creates a new user service.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Lists all users in creation order.
    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.repository.list().await?)
    }

    /// Retrieves a user by username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no such user exists.
    pub async fn get(&self, username: &str) -> Result<User, AppError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| user_not_found(username))
    }

    /// Creates a user, storing only an Argon2 digest of the password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if username or password is blank.
    /// Returns [`AppError::UniquenessConflict`] if the username is taken.
    pub async fn create(&self, credentials: Credentials) -> Result<User, AppError> {
        credentials.validate()?;

        let new_user = NewUser {
            password_hash: digest(&credentials.password)?,
            username: credentials.username,
        };

        Ok(self.repository.create(new_user).await?)
    }

    /// Replaces a user's password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no such user exists, before the
    /// password is looked at.
    /// Returns [`AppError::Validation`] if the password is blank.
    pub async fn update_password(&self, username: &str, password: &str) -> Result<User, AppError> {
        let user = self.get(username).await?;

        Credentials::new(Some(&user.username), Some(password)).validate()?;

        self.repository
            .update_password(&user.username, &digest(password)?)
            .await?
            .ok_or_else(|| user_not_found(username))
    }

    /// Deletes a user and returns it as it was.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no such user exists.
    pub async fn delete(&self, username: &str) -> Result<User, AppError> {
        self.repository
            .delete(username)
            .await?
            .ok_or_else(|| user_not_found(username))
    }
}
