//! Handlers for the projects section.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_core::validate;
use folio_db::models::project::{CreateProject, UpdateProject};
use folio_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/projects
pub async fn list_projects(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Project", id }))?;

    Ok(Json(DataResponse { data: project }))
}

/// POST /api/admin/projects
pub async fn create_project(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input).map_err(CoreError::Validation)?;

    let project = ProjectRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        project_id = project.id,
        title = %project.title,
        "Project created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// PUT /api/admin/projects/{id}
pub async fn update_project(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<impl IntoResponse> {
    validate_update(&input).map_err(CoreError::Validation)?;

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Project", id }))?;

    tracing::info!(user_id = auth.user_id, project_id = id, "Project updated");

    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/admin/projects/{id}
pub async fn delete_project(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Project", id }));
    }

    tracing::info!(user_id = auth.user_id, project_id = id, "Project deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn validate_create(input: &CreateProject) -> Result<(), String> {
    validate::require_text("title", &input.title)?;
    validate::require_text("category", &input.category)?;
    validate::optional_long_text("description", input.description.as_deref())?;
    validate::optional_http_url("project_url", input.project_url.as_deref())?;
    validate::optional_http_url("repo_url", input.repo_url.as_deref())?;
    validate::optional_http_url("image_url", input.image_url.as_deref())
}

fn validate_update(input: &UpdateProject) -> Result<(), String> {
    if let Some(ref v) = input.title {
        validate::require_text("title", v)?;
    }
    if let Some(ref v) = input.category {
        validate::require_text("category", v)?;
    }
    validate::optional_long_text("description", input.description.as_deref())?;
    validate::optional_http_url("project_url", input.project_url.as_deref())?;
    validate::optional_http_url("repo_url", input.repo_url.as_deref())?;
    validate::optional_http_url("image_url", input.image_url.as_deref())
}
