//! Integration tests for error responses and edge cases across the API
//! surface: unknown routes, malformed bodies, bad path parameters, and the
//! unique-constraint conflict mapping.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use folio_db::models::user::CreateUser;
use folio_db::repositories::UserRepo;

use common::{body_json, build_test_app, create_admin, get, login_token, post_json_auth};

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_route_is_404(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(&app, "/api/nonsense").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_section_row_is_404_with_json_body(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(&app, "/api/skills/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
    assert!(body["error"].as_str().unwrap().contains("Skill"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_numeric_id_is_client_error(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(&app, "/api/skills/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_json_body_is_client_error(pool: PgPool) {
    create_admin(&pool).await;
    let app = build_test_app(pool);
    let token = login_token(&app).await;

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/admin/skills")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.clone(), request).await.unwrap();
    assert!(
        response.status().is_client_error(),
        "malformed JSON must not be a server error, got {}",
        response.status()
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_required_json_field_is_client_error(pool: PgPool) {
    create_admin(&pool).await;
    let app = build_test_app(pool);
    let token = login_token(&app).await;

    // `category` is a non-optional DTO field, so deserialization rejects this.
    let response =
        post_json_auth(&app, "/api/admin/skills", &token, json!({ "name": "Rust" })).await;
    assert!(response.status().is_client_error());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_username_maps_to_409(pool: PgPool) {
    create_admin(&pool).await;

    // Drive the conflict through the error classifier: inserting the same
    // username again violates uq_users_username.
    let dup = CreateUser {
        username: common::TEST_USERNAME.to_string(),
        email: "other@example.com".to_string(),
        password_hash: "$argon2id$test".to_string(),
    };
    let err = UserRepo::create(&pool, &dup).await.unwrap_err();

    let app_err = folio_api::error::AppError::Database(err);
    let response = axum::response::IntoResponse::into_response(app_err);
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
