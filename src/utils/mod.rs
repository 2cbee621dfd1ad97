//! Utility functions shared by services, repositories and the admin CLI.
//!
//! - [`db_error`] - Classification of database errors into store errors
//! - [`password`] - Salted password digests and password generation

pub mod db_error;
pub mod password;
