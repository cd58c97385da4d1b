//! Registration and login flow, driven through the real router.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use paydesk_api::auth::{AppState, AppStateInner};
use paydesk_api::routes::router;
use paydesk_db::Database;

fn test_app() -> Router {
    let db = Database::open_in_memory().expect("in-memory database");
    let state: AppState = Arc::new(AppStateInner {
        db,
        jwt_secret: "test-secret".into(),
    });
    router(state)
}

async fn post_json(app: &Router, path: &str, body: Value) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::post(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn read_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn new_users_can_register() {
    let app = test_app();

    let response = post_json(
        &app,
        "/auth/register",
        json!({"username": "ada", "password": "correct-horse"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json(response).await;
    assert!(body["user_id"].as_str().unwrap().parse::<uuid::Uuid>().is_ok());
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_usernames_are_rejected() {
    let app = test_app();
    let creds = json!({"username": "ada", "password": "correct-horse"});

    let first = post_json(&app, "/auth/register", creds.clone()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(&app, "/auth/register", creds).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn short_passwords_are_rejected() {
    let app = test_app();

    let response = post_json(
        &app,
        "/auth/register",
        json!({"username": "ada", "password": "short"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn registered_user_can_login() {
    let app = test_app();
    post_json(
        &app,
        "/auth/register",
        json!({"username": "ada", "password": "correct-horse"}),
    )
    .await;

    let response = post_json(
        &app,
        "/auth/login",
        json!({"username": "ada", "password": "correct-horse"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["username"], "ada");
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn wrong_password_is_rejected() {
    let app = test_app();
    post_json(
        &app,
        "/auth/register",
        json!({"username": "ada", "password": "correct-horse"}),
    )
    .await;

    let response = post_json(
        &app,
        "/auth/login",
        json!({"username": "ada", "password": "battery-staple"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_users_cannot_login() {
    let app = test_app();

    let response = post_json(
        &app,
        "/auth/login",
        json!({"username": "nobody", "password": "correct-horse"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_page_renders() {
    let app = test_app();

    let response = app
        .oneshot(Request::get("/login").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&bytes).contains("Log in"));
}
