//! Contact loading for id-scoped routes.
//!
//! Loading happens in two stages. [`layer`] fetches the contact named by the
//! `{id}` path segment and stores a [`ContactContext`] in the request
//! extensions without judging the outcome. Handlers then take a
//! [`CurrentContact`], which turns the context into either the contact or the
//! matching error:
//!
//! ```text
//! id absent                  -> 404
//! id present, malformed      -> 400
//! id well-formed, not found  -> 404
//! id well-formed, found      -> handler
//! ```

use axum::{
    extract::{FromRequestParts, Path, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use serde_json::json;
use std::collections::HashMap;

use crate::application::services::ContactService;
use crate::domain::entities::{Contact, ObjectId};
use crate::{error::AppError, state::AppState};

/// Path parameter holding the contact id.
pub const ID_PARAM: &str = "id";

/// Result of the lookup stage, attached to the request.
#[derive(Debug, Clone, Default)]
pub struct ContactContext {
    /// The id segment as received, if the route had one.
    pub raw_id: Option<String>,
    /// The contact, if the id was well-formed and a document matched.
    pub contact: Option<Contact>,
}

/// Looks up the contact for `raw_id`.
///
/// Performs at most one store lookup, and none for a malformed id.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the lookup itself fails.
pub async fn load_contact(
    service: &ContactService,
    raw_id: Option<&str>,
) -> Result<ContactContext, AppError> {
    let Some(raw_id) = raw_id else {
        return Ok(ContactContext::default());
    };

    let contact = match raw_id.parse::<ObjectId>() {
        Ok(id) => service.find(&id).await?,
        Err(_) => None,
    };

    Ok(ContactContext {
        raw_id: Some(raw_id.to_string()),
        contact,
    })
}

/// Resolves a loaded context into the contact a handler operates on.
///
/// # Errors
///
/// - [`AppError::NotFound`] if there was no id or no matching contact
/// - [`AppError::MalformedIdentifier`] if the id is not a valid identifier
pub fn require_contact(context: ContactContext) -> Result<Contact, AppError> {
    match context {
        ContactContext {
            contact: Some(contact),
            ..
        } => Ok(contact),
        ContactContext { raw_id: None, .. } => Err(AppError::not_found(
            "No contact with that id has been found",
            json!({}),
        )),
        ContactContext {
            raw_id: Some(raw_id),
            ..
        } if !ObjectId::is_valid(&raw_id) => Err(AppError::malformed_identifier(
            "Id is invalid",
            json!({ "id": raw_id }),
        )),
        ContactContext {
            raw_id: Some(raw_id),
            ..
        } => Err(AppError::not_found(
            "No contact with that id has been found",
            json!({ "id": raw_id }),
        )),
    }
}

/// Middleware running the lookup stage on routes with an `{id}` segment.
///
/// Must sit inside the authentication layer so unauthenticated requests never
/// reach the store.
pub async fn layer(
    State(st): State<AppState>,
    params: Option<Path<HashMap<String, String>>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let raw_id = params.as_ref().and_then(|Path(p)| p.get(ID_PARAM));

    let context = load_contact(&st.contact_service, raw_id.map(String::as_str)).await?;
    req.extensions_mut().insert(context);

    Ok(next.run(req).await)
}

/// The contact addressed by the request path.
#[derive(Debug, Clone)]
pub struct CurrentContact(pub Contact);

impl<S> FromRequestParts<S> for CurrentContact
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let context = parts
            .extensions
            .get::<ContactContext>()
            .cloned()
            .unwrap_or_default();

        require_contact(context).map(CurrentContact)
    }
}
