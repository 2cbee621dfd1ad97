//! Shared application state injected into handlers and middleware.

use std::sync::Arc;

use crate::application::services::{AuthService, ContactService, UserService};
use crate::domain::repositories::{ContactRepository, UserRepository};

/// Services shared by every request.
///
/// Cloning is cheap; all members are reference counted.
#[derive(Clone)]
pub struct AppState {
    pub contact_service: Arc<ContactService>,
    pub user_service: Arc<UserService>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Wires the services on top of the given repositories.
    ///
    /// # Arguments
    ///
    /// - `contacts` - contact store
    /// - `users` - user store, shared by user management and login
    /// - `jwt_secret` - token signing key
    /// - `token_ttl_seconds` - lifetime of issued tokens
    pub fn new(
        contacts: Arc<dyn ContactRepository>,
        users: Arc<dyn UserRepository>,
        jwt_secret: &str,
        token_ttl_seconds: u64,
    ) -> Self {
        Self {
            contact_service: Arc::new(ContactService::new(contacts)),
            user_service: Arc::new(UserService::new(users.clone())),
            auth_service: Arc::new(AuthService::new(users, jwt_secret, token_ttl_seconds)),
        }
    }
}
