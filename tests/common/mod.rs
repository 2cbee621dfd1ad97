#![allow(dead_code)]

use axum_test::TestServer;
use contacts_api::domain::entities::Credentials;
use contacts_api::infrastructure::persistence::{MemoryContactRepository, MemoryUserRepository};
use contacts_api::routes::router;
use contacts_api::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;

pub const TEST_SECRET: &str = "test-jwt-secret";
pub const TEST_USER: &str = "user";
pub const TEST_PASSWORD: &str = "password";

/// State backed by fresh in-memory stores.
pub fn create_test_state() -> AppState {
    AppState::new(
        Arc::new(MemoryContactRepository::new()),
        Arc::new(MemoryUserRepository::new()),
        TEST_SECRET,
        3600,
    )
}

pub fn make_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

/// `Authorization` header value for a token issued to `username`.
pub fn bearer(state: &AppState, username: &str) -> String {
    let token = state.auth_service.issue_token(username).unwrap();
    format!("Bearer {token}")
}

pub async fn create_test_user(state: &AppState, username: &str, password: &str) {
    state
        .user_service
        .create(Credentials::new(Some(username), Some(password)))
        .await
        .unwrap();
}

/// Server with one user and that user's authorization header.
pub async fn authed_server() -> (TestServer, AppState, String) {
    let state = create_test_state();
    create_test_user(&state, TEST_USER, TEST_PASSWORD).await;
    let auth = bearer(&state, TEST_USER);
    (make_server(state.clone()), state, auth)
}

pub async fn create_test_contact(
    server: &TestServer,
    auth: &str,
    first_name: &str,
    last_name: &str,
) -> Value {
    let response = server
        .post("/api/contacts")
        .add_header("Authorization", auth)
        .json(&json!({ "firstName": first_name, "lastName": last_name }))
        .await;

    response.assert_status_ok();
    response.json::<Value>()
}
