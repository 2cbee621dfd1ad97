//! API route configuration.
//!
//! Everything except login requires Bearer token authentication via
//! [`crate::api::middleware::auth`], which the top-level router applies to
//! [`protected_routes`].

use crate::api::handlers::{
    contact_method_not_allowed_handler, create_contact_handler, create_user_handler,
    delete_contact_handler, delete_user_handler, get_contact_handler, get_user_handler,
    list_contacts_handler, list_users_handler, login_handler, route_not_found_handler,
    update_contact_handler, update_user_handler, user_method_not_allowed_handler,
};
use crate::api::middleware::contact_loader;
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// API routes that require an authenticated subject.
///
/// # Endpoints
///
/// - `GET    /contacts`            - List contacts
/// - `POST   /contacts`            - Create a contact
/// - `GET    /contacts/{id}`       - Read a contact
/// - `PUT    /contacts/{id}`       - Update a contact
/// - `DELETE /contacts/{id}`       - Delete a contact
/// - `POST   /contacts/{id}`       - 405 once the contact is loaded
/// - `GET    /users`               - List users
/// - `POST   /users`               - Create a user
/// - `GET    /users/{username}`    - Read a user
/// - `PUT    /users/{username}`    - Change a user's password
/// - `DELETE /users/{username}`    - Delete a user
/// - `POST   /users/{username}`    - 405 once the user is found
///
/// Any other verb on these paths is a JSON 404. The `/contacts/{id}` routes
/// run [`contact_loader::layer`] before their handlers.
pub fn protected_routes(state: &AppState) -> Router<AppState> {
    let contact_routes = Router::new()
        .route(
            "/contacts/{id}",
            get(get_contact_handler)
                .put(update_contact_handler)
                .delete(delete_contact_handler)
                .post(contact_method_not_allowed_handler)
                .fallback(route_not_found_handler),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            contact_loader::layer,
        ))
        .route(
            "/contacts",
            get(list_contacts_handler)
                .post(create_contact_handler)
                .fallback(route_not_found_handler),
        );

    Router::new()
        .merge(contact_routes)
        .route(
            "/users",
            get(list_users_handler)
                .post(create_user_handler)
                .fallback(route_not_found_handler),
        )
        .route(
            "/users/{username}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler)
                .post(user_method_not_allowed_handler)
                .fallback(route_not_found_handler),
        )
}

/// API routes reachable without a token.
///
/// # Endpoints
///
/// - `POST /auth/login` - Exchange credentials for a token
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(login_handler))
}
