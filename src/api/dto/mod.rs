//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Request bodies
//! are lenient: every field is optional and field rules are checked by the
//! services, so a missing field and a blank one produce the same error.

pub mod auth;
pub mod contact;
pub mod health;
pub mod user;
