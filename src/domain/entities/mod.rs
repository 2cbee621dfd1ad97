//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Contact`] - A person in the address book, unique by first and last name
//! - [`User`] - An account that can log in and obtain bearer tokens
//! - [`ObjectId`] - The store-assigned identifier both of them carry
//!
//! # Design Pattern
//!
//! Stored entities are plain data. Writable input has its own types:
//! - `ContactFields`, `Credentials` - validated field sets
//! - `ContactPatch` - partial updates with absent/null distinction
//! - `NewUser` - For creating new records

pub mod contact;
pub mod object_id;
pub mod user;

use chrono::{DateTime, SubsecRound, Utc};

pub use contact::{Contact, ContactFields, ContactPatch};
pub use object_id::{InvalidObjectId, ObjectId};
pub use user::{Credentials, NewUser, User};

/// Current time truncated to the microsecond precision stores keep.
///
/// Truncating up front makes a value read back from PostgreSQL compare equal
/// to the one that was written.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
