//! Handlers for the singleton profile (hero banner).

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use folio_core::error::CoreError;
use folio_core::validate;
use folio_db::models::profile::UpsertProfile;
use folio_db::repositories::ProfileRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/profile
///
/// The public hero/profile payload. 404 until the setup tool (or an admin
/// PUT) has created the row.
pub async fn get_profile(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let profile = ProfileRepo::get(&state.pool)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Profile", id: 1 }))?;

    Ok(Json(DataResponse { data: profile }))
}

/// PUT /api/admin/profile
///
/// Insert or fully replace the profile. PUT semantics: optional fields
/// omitted from the body are cleared.
pub async fn upsert_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpsertProfile>,
) -> AppResult<impl IntoResponse> {
    validate_upsert(&input).map_err(CoreError::Validation)?;

    let profile = ProfileRepo::upsert(&state.pool, &input).await?;

    tracing::info!(user_id = auth.user_id, "Profile upserted");

    Ok(Json(DataResponse { data: profile }))
}

fn validate_upsert(input: &UpsertProfile) -> Result<(), String> {
    validate::require_text("full_name", &input.full_name)?;
    validate::optional_text("tagline", input.tagline.as_deref())?;
    validate::optional_long_text("bio", input.bio.as_deref())?;
    validate::optional_text("phone", input.phone.as_deref())?;
    validate::optional_text("location", input.location.as_deref())?;
    if let Some(ref email) = input.email {
        validate::validate_email(email)?;
    }
    validate::optional_http_url("avatar_url", input.avatar_url.as_deref())?;
    validate::optional_http_url("github_url", input.github_url.as_deref())?;
    validate::optional_http_url("linkedin_url", input.linkedin_url.as_deref())?;
    validate::optional_http_url("twitter_url", input.twitter_url.as_deref())?;
    if let Some(ref stats) = input.stats {
        if !stats.is_array() {
            return Err("stats must be a JSON array".into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_input() -> UpsertProfile {
        UpsertProfile {
            full_name: "Jane Doe".into(),
            tagline: None,
            bio: None,
            email: None,
            phone: None,
            location: None,
            avatar_url: None,
            github_url: None,
            linkedin_url: None,
            twitter_url: None,
            stats: None,
        }
    }

    #[test]
    fn test_minimal_profile_is_valid() {
        assert!(validate_upsert(&minimal_input()).is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut input = minimal_input();
        input.full_name = "  ".into();
        assert!(validate_upsert(&input).is_err());
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut input = minimal_input();
        input.email = Some("nope".into());
        assert!(validate_upsert(&input).is_err());
    }

    #[test]
    fn test_stats_must_be_array() {
        let mut input = minimal_input();
        input.stats = Some(serde_json::json!({"label": "Years"}));
        assert!(validate_upsert(&input).is_err());

        input.stats = Some(serde_json::json!([{"label": "Years", "value": "10+"}]));
        assert!(validate_upsert(&input).is_ok());
    }
}
