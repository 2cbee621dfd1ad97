//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! operations following the Repository pattern. These traits are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Failures are reported as [`StoreError`] and classified into HTTP errors by
//!   `From<StoreError> for AppError`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`ContactRepository`] - Contact CRUD with a unique name index
//! - [`UserRepository`] - User accounts keyed by username

pub mod contact_repository;
pub mod user_repository;

pub use contact_repository::ContactRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use contact_repository::MockContactRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;

use crate::domain::validation::FieldViolation;

/// Failure reported by a store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A field rule enforced by the store was violated.
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    /// A write collided with an existing document on a unique index.
    #[error("unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    /// The document addressed by a write no longer exists.
    #[error("document not found")]
    Missing,

    /// Any other storage failure.
    #[error("{0}")]
    Backend(String),
}
