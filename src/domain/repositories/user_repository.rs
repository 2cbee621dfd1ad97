//! Repository trait for user accounts.

use async_trait::async_trait;

use super::StoreError;
use crate::domain::entities::{NewUser, User};

/// Repository interface for user accounts.
///
/// Usernames are unique; a duplicate insert yields [`StoreError::UniqueViolation`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryUserRepository`] - In-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Lists all users in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on storage errors.
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// Finds a user by exact username.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on storage errors.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UniqueViolation`] if the username is taken.
    /// Returns [`StoreError::Backend`] on storage errors.
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError>;

    /// Replaces a user's password digest.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))` with the updated user
    /// - `Ok(None)` if no such user exists
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on storage errors.
    async fn update_password(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<Option<User>, StoreError>;

    /// Deletes a user, returning it as it was before removal.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on storage errors.
    async fn delete(&self, username: &str) -> Result<Option<User>, StoreError>;
}
