//! Repository trait for contact storage.

use async_trait::async_trait;

use super::StoreError;
use crate::domain::entities::{Contact, ContactFields, ObjectId};

/// Repository interface for the contacts collection.
///
/// Implementations must enforce uniqueness of `(first_name, last_name)`
/// atomically and report a violation as [`StoreError::UniqueViolation`]. Callers
/// never pre-check uniqueness; they attempt the write and classify the outcome.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgContactRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryContactRepository`] - In-process store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_contact.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Returns every contact in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on storage errors.
    async fn find_all(&self) -> Result<Vec<Contact>, StoreError>;

    /// Finds a contact by its identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Contact))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on storage errors.
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Contact>, StoreError>;

    /// Inserts a new contact, assigning its id and equal creation/update timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UniqueViolation`] if the name pair already exists.
    /// Returns [`StoreError::Validation`] if the store rejects a blank field.
    /// Returns [`StoreError::Backend`] on storage errors.
    async fn create(&self, fields: ContactFields) -> Result<Contact, StoreError>;

    /// Persists the names and `updated_at` of an existing contact.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UniqueViolation`] if the new name pair belongs to another contact.
    /// Returns [`StoreError::Validation`] if the store rejects a blank field.
    /// Returns [`StoreError::Missing`] if the contact no longer exists.
    /// Returns [`StoreError::Backend`] on storage errors.
    async fn save(&self, contact: &Contact) -> Result<Contact, StoreError>;

    /// Deletes a contact permanently.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Missing`] if the contact no longer exists.
    /// Returns [`StoreError::Backend`] on storage errors.
    async fn remove(&self, id: &ObjectId) -> Result<(), StoreError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if it is not.
    async fn ping(&self) -> Result<(), StoreError>;
}
