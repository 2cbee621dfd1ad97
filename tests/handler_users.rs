mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_users_require_token() {
    let (server, _state, _auth) = common::authed_server().await;

    server
        .get("/api/users")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    server
        .get(&format!("/api/users/{}", common::TEST_USER))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_users_hides_password() {
    let (server, _state, auth) = common::authed_server().await;

    let response = server
        .get("/api/users")
        .add_header("Authorization", &auth)
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["username"], common::TEST_USER);
    assert!(items[0].get("password").is_none());
    assert!(items[0].get("passwordHash").is_none());
}

#[tokio::test]
async fn test_create_user_then_login() {
    let (server, _state, auth) = common::authed_server().await;

    let response = server
        .post("/api/users")
        .add_header("Authorization", &auth)
        .json(&json!({ "username": " admin ", "password": "admin" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["username"], "admin");

    server
        .post("/api/auth/login")
        .json(&json!({ "username": "admin", "password": "admin" }))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_create_user_duplicate_is_bad_request() {
    let (server, _state, auth) = common::authed_server().await;

    let response = server
        .post("/api/users")
        .add_header("Authorization", &auth)
        .json(&json!({ "username": common::TEST_USER, "password": "other" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "duplicate_key");
}

#[tokio::test]
async fn test_create_user_blank_is_bad_request() {
    let (server, _state, auth) = common::authed_server().await;

    let response = server
        .post("/api/users")
        .add_header("Authorization", &auth)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"]["code"],
        "validation_error"
    );
}

#[tokio::test]
async fn test_get_unknown_user_is_not_found() {
    let (server, _state, auth) = common::authed_server().await;

    let response = server
        .get("/api/users/nobody")
        .add_header("Authorization", &auth)
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_user_password() {
    let (server, _state, auth) = common::authed_server().await;

    let before = server
        .get(&format!("/api/users/{}", common::TEST_USER))
        .add_header("Authorization", &auth)
        .await
        .json::<Value>();

    let response = server
        .put(&format!("/api/users/{}", common::TEST_USER))
        .add_header("Authorization", &auth)
        .json(&json!({ "password": "new-password" }))
        .await;

    response.assert_status_ok();
    assert_ne!(response.json::<Value>()["updatedAt"], before["updatedAt"]);

    server
        .post("/api/auth/login")
        .json(&json!({ "username": common::TEST_USER, "password": common::TEST_PASSWORD }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    server
        .post("/api/auth/login")
        .json(&json!({ "username": common::TEST_USER, "password": "new-password" }))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_update_user_blank_password_is_bad_request() {
    let (server, _state, auth) = common::authed_server().await;

    let response = server
        .put(&format!("/api/users/{}", common::TEST_USER))
        .add_header("Authorization", &auth)
        .json(&json!({ "password": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_unknown_user_without_body_is_not_found() {
    let (server, _state, auth) = common::authed_server().await;

    let response = server
        .put("/api/users/bogus")
        .add_header("Authorization", &auth)
        .await;

    response.assert_status(StatusCode::NOT_FOUND);

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["username"], "bogus");
}

#[tokio::test]
async fn test_delete_user_returns_user() {
    let (server, state, auth) = common::authed_server().await;
    common::create_test_user(&state, "frankzappa", "secret").await;

    let response = server
        .delete("/api/users/frankzappa")
        .add_header("Authorization", &auth)
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["username"], "frankzappa");

    server
        .get("/api/users/frankzappa")
        .add_header("Authorization", &auth)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_post_on_username() {
    let (server, _state, auth) = common::authed_server().await;

    server
        .post(&format!("/api/users/{}", common::TEST_USER))
        .add_header("Authorization", &auth)
        .await
        .assert_status(StatusCode::METHOD_NOT_ALLOWED);

    server
        .post("/api/users/nobody")
        .add_header("Authorization", &auth)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_on_users_collection_is_json_not_found() {
    let (server, _state, auth) = common::authed_server().await;

    let response = server
        .delete("/api/users")
        .add_header("Authorization", &auth)
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");

    server
        .get(&format!("/api/users/{}", common::TEST_USER))
        .add_header("Authorization", &auth)
        .await
        .assert_status_ok();
}
