//! Handlers for the contacts endpoints.
//!
//! Id-scoped handlers receive their contact through [`CurrentContact`], so by
//! the time they run the id has been validated and the document loaded.

use axum::{Json, extract::State};
use serde_json::json;

use crate::api::dto::contact::{ContactRequest, ContactResponse};
use crate::api::extract::JsonBody;
use crate::api::middleware::contact_loader::CurrentContact;
use crate::application::services::AuthUser;
use crate::domain::entities::Contact;
use crate::error::AppError;
use crate::state::AppState;

fn contact_to_response(c: Contact) -> ContactResponse {
    ContactResponse {
        id: c.id.to_string(),
        first_name: c.first_name,
        last_name: c.last_name,
        created_at: c.created_at,
        updated_at: c.updated_at,
    }
}

/// Lists all contacts in creation order.
///
/// # Endpoint
///
/// `GET /api/contacts`
pub async fn list_contacts_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactResponse>>, AppError> {
    let contacts = state.contact_service.list().await?;

    Ok(Json(contacts.into_iter().map(contact_to_response).collect()))
}

/// Creates a contact.
///
/// # Endpoint
///
/// `POST /api/contacts`
///
/// An empty body is treated as `{}` and therefore fails validation.
///
/// # Errors
///
/// Returns 400 if a name is blank or the name pair already exists.
pub async fn create_contact_handler(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(payload): JsonBody<ContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    let contact = state.contact_service.create(payload.into()).await?;

    tracing::info!(user = %user.username, id = %contact.id, "Contact created");

    Ok(Json(contact_to_response(contact)))
}

/// Returns one contact.
///
/// # Endpoint
///
/// `GET /api/contacts/{id}`
///
/// # Errors
///
/// Returns 400 if the id is malformed.
/// Returns 404 if no contact has that id.
pub async fn get_contact_handler(CurrentContact(contact): CurrentContact) -> Json<ContactResponse> {
    Json(contact_to_response(contact))
}

/// Updates a contact.
///
/// # Endpoint
///
/// `PUT /api/contacts/{id}`
///
/// Present fields overwrite, absent fields are kept and `null` resets a field
/// to empty (which then fails validation).
///
/// # Errors
///
/// Returns 400 if the id is malformed, a name is blank, or the new name pair
/// belongs to another contact.
/// Returns 404 if no contact has that id.
pub async fn update_contact_handler(
    State(state): State<AppState>,
    user: AuthUser,
    CurrentContact(contact): CurrentContact,
    JsonBody(payload): JsonBody<ContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    let contact = state
        .contact_service
        .update(contact, payload.into())
        .await?;

    tracing::info!(user = %user.username, id = %contact.id, "Contact updated");

    Ok(Json(contact_to_response(contact)))
}

/// Deletes a contact and returns it as it was before removal.
///
/// # Endpoint
///
/// `DELETE /api/contacts/{id}`
///
/// # Errors
///
/// Returns 400 if the id is malformed.
/// Returns 404 if no contact has that id.
pub async fn delete_contact_handler(
    State(state): State<AppState>,
    user: AuthUser,
    CurrentContact(contact): CurrentContact,
) -> Result<Json<ContactResponse>, AppError> {
    let contact = state.contact_service.delete(contact).await?;

    tracing::info!(user = %user.username, id = %contact.id, "Contact deleted");

    Ok(Json(contact_to_response(contact)))
}

/// Rejects `POST` on an existing contact.
///
/// # Endpoint
///
/// `POST /api/contacts/{id}`
///
/// The contact is loaded first, so a malformed or unknown id still yields 400
/// or 404; only an existing contact gets 405.
pub async fn contact_method_not_allowed_handler(
    CurrentContact(contact): CurrentContact,
) -> AppError {
    AppError::method_not_allowed(
        "Method not allowed",
        json!({ "method": "POST", "id": contact.id.to_string() }),
    )
}
