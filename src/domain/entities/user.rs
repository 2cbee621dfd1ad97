//! User entity and login credentials.

use chrono::{DateTime, Utc};
use validator::Validate;

use super::ObjectId;

/// A user allowed to obtain bearer tokens.
///
/// `password_hash` is the Argon2id digest produced by
/// [`crate::utils::password::hash_password`]; it never leaves the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: ObjectId,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

/// A username/password pair as submitted by a client.
///
/// The username is trimmed; the password is kept verbatim.
#[derive(Debug, Clone, Validate)]
pub struct Credentials {
    #[validate(length(min = 1, message = "Username can not be blank"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password can not be blank"))]
    pub password: String,
}

impl Credentials {
    /// Builds credentials, treating missing values as blank.
    pub fn new(username: Option<&str>, password: Option<&str>) -> Self {
        Self {
            username: username.unwrap_or_default().trim().to_string(),
            password: password.unwrap_or_default().to_string(),
        }
    }
}
