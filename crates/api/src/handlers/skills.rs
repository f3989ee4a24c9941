//! Handlers for the skills section.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_core::validate;
use folio_db::models::skill::{CreateSkill, UpdateSkill};
use folio_db::repositories::SkillRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/skills
pub async fn list_skills(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let skills = SkillRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: skills }))
}

/// GET /api/skills/{id}
pub async fn get_skill(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let skill = SkillRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Skill", id }))?;

    Ok(Json(DataResponse { data: skill }))
}

/// POST /api/admin/skills
pub async fn create_skill(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateSkill>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input).map_err(CoreError::Validation)?;

    let skill = SkillRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        skill_id = skill.id,
        name = %skill.name,
        "Skill created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: skill })))
}

/// PUT /api/admin/skills/{id}
pub async fn update_skill(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSkill>,
) -> AppResult<impl IntoResponse> {
    validate_update(&input).map_err(CoreError::Validation)?;

    let skill = SkillRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Skill", id }))?;

    tracing::info!(user_id = auth.user_id, skill_id = id, "Skill updated");

    Ok(Json(DataResponse { data: skill }))
}

/// DELETE /api/admin/skills/{id}
pub async fn delete_skill(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = SkillRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Skill", id }));
    }

    tracing::info!(user_id = auth.user_id, skill_id = id, "Skill deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn validate_create(input: &CreateSkill) -> Result<(), String> {
    validate::require_text("name", &input.name)?;
    validate::require_text("category", &input.category)?;
    if let Some(level) = input.level {
        validate::validate_skill_level(level)?;
    }
    Ok(())
}

fn validate_update(input: &UpdateSkill) -> Result<(), String> {
    if let Some(ref v) = input.name {
        validate::require_text("name", v)?;
    }
    if let Some(ref v) = input.category {
        validate::require_text("category", v)?;
    }
    if let Some(level) = input.level {
        validate::validate_skill_level(level)?;
    }
    Ok(())
}
