//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod contacts;
pub mod fallback;
pub mod health;
pub mod users;

pub use auth::login_handler;
pub use contacts::{
    contact_method_not_allowed_handler, create_contact_handler, delete_contact_handler,
    get_contact_handler, list_contacts_handler, update_contact_handler,
};
pub use fallback::route_not_found_handler;
pub use health::health_handler;
pub use users::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_handler, user_method_not_allowed_handler,
};
