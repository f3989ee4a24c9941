//! Handlers for the education section.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_core::validate;
use folio_db::models::education::{CreateEducation, UpdateEducation};
use folio_db::repositories::EducationRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/education
pub async fn list_education(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let entries = EducationRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// GET /api/education/{id}
pub async fn get_education(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let entry = EducationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Education", id }))?;

    Ok(Json(DataResponse { data: entry }))
}

/// POST /api/admin/education
pub async fn create_education(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateEducation>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input).map_err(CoreError::Validation)?;

    let entry = EducationRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        education_id = entry.id,
        degree = %entry.degree,
        "Education entry created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}

/// PUT /api/admin/education/{id}
pub async fn update_education(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEducation>,
) -> AppResult<impl IntoResponse> {
    validate_update(&input).map_err(CoreError::Validation)?;

    let entry = EducationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Education", id }))?;

    tracing::info!(user_id = auth.user_id, education_id = id, "Education entry updated");

    Ok(Json(DataResponse { data: entry }))
}

/// DELETE /api/admin/education/{id}
pub async fn delete_education(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = EducationRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Education", id }));
    }

    tracing::info!(user_id = auth.user_id, education_id = id, "Education entry deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn validate_create(input: &CreateEducation) -> Result<(), String> {
    validate::require_text("degree", &input.degree)?;
    validate::require_text("institution", &input.institution)?;
    validate::require_text("start_year", &input.start_year)?;
    validate::optional_text("end_year", input.end_year.as_deref())?;
    validate::optional_long_text("description", input.description.as_deref())
}

fn validate_update(input: &UpdateEducation) -> Result<(), String> {
    // Required columns cannot be blanked through a partial update.
    if let Some(ref v) = input.degree {
        validate::require_text("degree", v)?;
    }
    if let Some(ref v) = input.institution {
        validate::require_text("institution", v)?;
    }
    if let Some(ref v) = input.start_year {
        validate::require_text("start_year", v)?;
    }
    validate::optional_text("end_year", input.end_year.as_deref())?;
    validate::optional_long_text("description", input.description.as_deref())
}
