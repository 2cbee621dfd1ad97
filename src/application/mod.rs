//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::contact_service::ContactService`] - Contact CRUD
//! - [`services::user_service::UserService`] - User account management
//! - [`services::auth_service::AuthService`] - Login and bearer token verification

pub mod services;
