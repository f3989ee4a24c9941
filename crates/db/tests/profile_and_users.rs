//! Integration tests for the singleton profile upsert and the users
//! repository.

use serde_json::json;
use sqlx::PgPool;

use folio_db::models::profile::UpsertProfile;
use folio_db::models::user::CreateUser;
use folio_db::repositories::{ProfileRepo, UserRepo};

fn new_profile(full_name: &str) -> UpsertProfile {
    UpsertProfile {
        full_name: full_name.to_string(),
        tagline: Some("Builder of things".to_string()),
        bio: None,
        email: Some("me@example.com".to_string()),
        phone: None,
        location: Some("Berlin".to_string()),
        avatar_url: None,
        github_url: None,
        linkedin_url: None,
        twitter_url: None,
        stats: None,
    }
}

fn new_user(username: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        // Not a real hash; these tests never verify passwords.
        password_hash: "$argon2id$test".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_profile_absent_until_first_upsert(pool: PgPool) {
    let profile = ProfileRepo::get(&pool).await.unwrap();
    assert!(profile.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_profile_upsert_creates_singleton(pool: PgPool) {
    let created = ProfileRepo::upsert(&pool, &new_profile("Ada Lovelace")).await.unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.full_name, "Ada Lovelace");
    assert_eq!(created.stats, json!([]), "stats defaults to an empty array");

    let fetched = ProfileRepo::get(&pool).await.unwrap().expect("row must exist");
    assert_eq!(fetched.full_name, "Ada Lovelace");
    assert_eq!(fetched.location.as_deref(), Some("Berlin"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_profile_second_upsert_replaces_whole_row(pool: PgPool) {
    ProfileRepo::upsert(&pool, &new_profile("Ada Lovelace")).await.unwrap();

    // PUT semantics: the second upsert omits location and email, so both
    // are cleared rather than preserved.
    let mut replacement = new_profile("Grace Hopper");
    replacement.location = None;
    replacement.email = None;
    replacement.stats = Some(json!([{"label": "Years", "value": "10"}]));
    let updated = ProfileRepo::upsert(&pool, &replacement).await.unwrap();

    assert_eq!(updated.id, 1, "still the singleton row");
    assert_eq!(updated.full_name, "Grace Hopper");
    assert!(updated.location.is_none());
    assert!(updated.email.is_none());
    assert_eq!(updated.stats[0]["label"], "Years");
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_create_and_find(pool: PgPool) {
    let created = UserRepo::create(&pool, &new_user("admin")).await.unwrap();
    assert!(created.is_active);
    assert!(created.last_login_at.is_none());

    let by_name = UserRepo::find_by_username(&pool, "admin")
        .await
        .unwrap()
        .expect("user must be findable by username");
    assert_eq!(by_name.id, created.id);

    let by_id = UserRepo::find_by_id(&pool, created.id).await.unwrap();
    assert!(by_id.is_some());

    let missing = UserRepo::find_by_username(&pool, "nobody").await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_duplicate_username_rejected(pool: PgPool) {
    UserRepo::create(&pool, &new_user("admin")).await.unwrap();

    let mut dup = new_user("admin");
    dup.email = "other@example.com".to_string();
    let err = UserRepo::create(&pool, &dup).await.unwrap_err();
    let db_err = err.as_database_error().expect("unique violation surfaces as a database error");
    assert_eq!(db_err.code().as_deref(), Some("23505"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_login_stamp_and_deactivate(pool: PgPool) {
    let created = UserRepo::create(&pool, &new_user("admin")).await.unwrap();

    UserRepo::record_successful_login(&pool, created.id).await.unwrap();
    let stamped = UserRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert!(stamped.last_login_at.is_some());

    UserRepo::deactivate(&pool, created.id).await.unwrap();
    let deactivated = UserRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert!(!deactivated.is_active);
}
