//! Integration tests for the singleton profile resource and the admin
//! dashboard counts.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::{
    body_json, build_test_app, create_admin, get, get_auth, login_token, post_json_auth,
    put_json_auth,
};

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_profile_404_until_seeded(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(&app, "/api/profile").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_profile_put_creates_then_public_get(pool: PgPool) {
    create_admin(&pool).await;
    let app = build_test_app(pool);
    let token = login_token(&app).await;

    let response = put_json_auth(
        &app,
        "/api/admin/profile",
        &token,
        json!({
            "full_name": "Ada Lovelace",
            "tagline": "Builder of things",
            "email": "me@example.com",
            "stats": [{"label": "Years", "value": "10"}],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&app, "/api/profile").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["full_name"], "Ada Lovelace");
    assert_eq!(body["data"]["stats"][0]["label"], "Years");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_profile_put_replaces_whole_row(pool: PgPool) {
    create_admin(&pool).await;
    let app = build_test_app(pool);
    let token = login_token(&app).await;

    put_json_auth(
        &app,
        "/api/admin/profile",
        &token,
        json!({ "full_name": "Ada Lovelace", "tagline": "Builder of things" }),
    )
    .await;

    // The second PUT omits tagline: PUT semantics clear it.
    let response = put_json_auth(
        &app,
        "/api/admin/profile",
        &token,
        json!({ "full_name": "Grace Hopper" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(get(&app, "/api/profile").await).await;
    assert_eq!(body["data"]["full_name"], "Grace Hopper");
    assert!(body["data"]["tagline"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_profile_put_rejects_bad_payloads(pool: PgPool) {
    create_admin(&pool).await;
    let app = build_test_app(pool);
    let token = login_token(&app).await;

    // Blank name.
    let response =
        put_json_auth(&app, "/api/admin/profile", &token, json!({ "full_name": " " })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // stats must be an array.
    let response = put_json_auth(
        &app,
        "/api/admin/profile",
        &token,
        json!({ "full_name": "Ada", "stats": {"label": "Years"} }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Invalid email.
    let response = put_json_auth(
        &app,
        "/api/admin/profile",
        &token,
        json!({ "full_name": "Ada", "email": "not-an-email" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_profile_put_requires_token(pool: PgPool) {
    let app = build_test_app(pool);

    let request = axum::http::Request::builder()
        .method("PUT")
        .uri("/api/admin/profile")
        .header("content-type", "application/json")
        .body(axum::body::Body::from(json!({ "full_name": "Ada" }).to_string()))
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.clone(), request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_counts(pool: PgPool) {
    create_admin(&pool).await;
    let app = build_test_app(pool);
    let token = login_token(&app).await;

    post_json_auth(
        &app,
        "/api/admin/skills",
        &token,
        json!({ "name": "Rust", "category": "Backend", "level": 90 }),
    )
    .await;
    post_json_auth(
        &app,
        "/api/admin/projects",
        &token,
        json!({ "title": "Portfolio", "category": "Web" }),
    )
    .await;

    let response = get_auth(&app, "/api/admin/dashboard", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["skills"], 1);
    assert_eq!(body["data"]["projects"], 1);
    assert_eq!(body["data"]["education"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_requires_token(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(&app, "/api/admin/dashboard").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
