//! Handlers for the work experience section.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_core::validate;
use folio_db::models::experience::{CreateExperience, UpdateExperience};
use folio_db::repositories::ExperienceRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/experience
pub async fn list_experience(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let entries = ExperienceRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// GET /api/experience/{id}
pub async fn get_experience(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let entry = ExperienceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Experience", id }))?;

    Ok(Json(DataResponse { data: entry }))
}

/// POST /api/admin/experience
pub async fn create_experience(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateExperience>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input).map_err(CoreError::Validation)?;

    let entry = ExperienceRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        experience_id = entry.id,
        position = %entry.position,
        company = %entry.company,
        "Experience entry created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}

/// PUT /api/admin/experience/{id}
pub async fn update_experience(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateExperience>,
) -> AppResult<impl IntoResponse> {
    validate_update(&input).map_err(CoreError::Validation)?;

    let entry = ExperienceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Experience", id }))?;

    tracing::info!(user_id = auth.user_id, experience_id = id, "Experience entry updated");

    Ok(Json(DataResponse { data: entry }))
}

/// DELETE /api/admin/experience/{id}
pub async fn delete_experience(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ExperienceRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Experience", id }));
    }

    tracing::info!(user_id = auth.user_id, experience_id = id, "Experience entry deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn validate_create(input: &CreateExperience) -> Result<(), String> {
    validate::require_text("position", &input.position)?;
    validate::require_text("company", &input.company)?;
    validate::require_text("period", &input.period)?;
    validate::optional_long_text("description", input.description.as_deref())
}

fn validate_update(input: &UpdateExperience) -> Result<(), String> {
    if let Some(ref v) = input.position {
        validate::require_text("position", v)?;
    }
    if let Some(ref v) = input.company {
        validate::require_text("company", v)?;
    }
    if let Some(ref v) = input.period {
        validate::require_text("period", v)?;
    }
    validate::optional_long_text("description", input.description.as_deref())
}
