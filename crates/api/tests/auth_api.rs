//! Integration tests for login and the authenticated identity echo.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use folio_db::repositories::UserRepo;

use common::{
    body_json, build_test_app, create_admin, get, get_auth, login_token, post_json,
    TEST_PASSWORD, TEST_USERNAME,
};

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_returns_token_and_user(pool: PgPool) {
    create_admin(&pool).await;
    let app = build_test_app(pool.clone());

    let response = post_json(
        &app,
        "/api/auth/login",
        json!({ "username": TEST_USERNAME, "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["token"].is_string());
    assert_eq!(body["expires_in"], 3600);
    assert_eq!(body["user"]["username"], TEST_USERNAME);
    assert!(
        body["user"].get("password_hash").is_none(),
        "password hash must never leave the server"
    );

    // A successful login stamps last_login_at.
    let user = UserRepo::find_by_username(&pool, TEST_USERNAME)
        .await
        .unwrap()
        .unwrap();
    assert!(user.last_login_at.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_wrong_password_is_401(pool: PgPool) {
    create_admin(&pool).await;
    let app = build_test_app(pool);

    let response = post_json(
        &app,
        "/api/auth/login",
        json!({ "username": TEST_USERNAME, "password": "wrong" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_unknown_user_is_401(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        &app,
        "/api/auth/login",
        json!({ "username": "nobody", "password": "whatever" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Same message as a wrong password: no username probing.
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid username or password");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_deactivated_account_is_403(pool: PgPool) {
    create_admin(&pool).await;
    let user = UserRepo::find_by_username(&pool, TEST_USERNAME)
        .await
        .unwrap()
        .unwrap();
    UserRepo::deactivate(&pool, user.id).await.unwrap();

    let app = build_test_app(pool);
    let response = post_json(
        &app,
        "/api/auth/login",
        json!({ "username": TEST_USERNAME, "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_me_echoes_identity(pool: PgPool) {
    create_admin(&pool).await;
    let app = build_test_app(pool);
    let token = login_token(&app).await;

    let response = get_auth(&app, "/api/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["username"], TEST_USERNAME);
    assert_eq!(body["email"], "admin@example.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_me_without_token_is_401(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(&app, "/api/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_me_with_malformed_header_is_401(pool: PgPool) {
    create_admin(&pool).await;
    let app = build_test_app(pool);
    let token = login_token(&app).await;

    // Token without the Bearer prefix.
    let request = axum::http::Request::builder()
        .uri("/api/auth/me")
        .header("authorization", token)
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.clone(), request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Garbage token with the right prefix.
    let response = get_auth(&app, "/api/auth/me", "not.a.jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
