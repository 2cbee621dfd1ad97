//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`          - Health check: store connectivity (public)
//! - `POST /api/auth/login`  - Token issuance (public)
//! - `/api/*`                - REST API (Bearer token required)
//! - anything else           - 404 with a JSON error body, including
//!   unsupported verbs on known paths
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Bearer token on protected API routes
//! - **Contact loading** - On `/api/contacts/{id}`, inside authentication
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, route_not_found_handler};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and middleware except path normalization.
///
/// Integration tests drive this directly.
pub fn router(state: AppState) -> Router {
    let api_router = api::routes::protected_routes(&state)
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .merge(api::routes::public_routes());

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .fallback(route_not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with trailing slashes trimmed before routing.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
