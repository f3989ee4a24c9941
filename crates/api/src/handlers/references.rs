//! Handlers for the references (testimonials) section.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_core::validate;
use folio_db::models::reference::{CreateReference, UpdateReference};
use folio_db::repositories::ReferenceRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/references
pub async fn list_references(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let references = ReferenceRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: references }))
}

/// GET /api/references/{id}
pub async fn get_reference(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let reference = ReferenceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Reference", id }))?;

    Ok(Json(DataResponse { data: reference }))
}

/// POST /api/admin/references
pub async fn create_reference(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateReference>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input).map_err(CoreError::Validation)?;

    let reference = ReferenceRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        reference_id = reference.id,
        name = %reference.name,
        "Reference created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: reference })))
}

/// PUT /api/admin/references/{id}
pub async fn update_reference(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReference>,
) -> AppResult<impl IntoResponse> {
    validate_update(&input).map_err(CoreError::Validation)?;

    let reference = ReferenceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Reference", id }))?;

    tracing::info!(user_id = auth.user_id, reference_id = id, "Reference updated");

    Ok(Json(DataResponse { data: reference }))
}

/// DELETE /api/admin/references/{id}
pub async fn delete_reference(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ReferenceRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Reference", id }));
    }

    tracing::info!(user_id = auth.user_id, reference_id = id, "Reference deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn validate_create(input: &CreateReference) -> Result<(), String> {
    validate::require_text("name", &input.name)?;
    validate::require_long_text("quote", &input.quote)?;
    validate::optional_text("position", input.position.as_deref())?;
    validate::optional_text("company", input.company.as_deref())
}

fn validate_update(input: &UpdateReference) -> Result<(), String> {
    if let Some(ref v) = input.name {
        validate::require_text("name", v)?;
    }
    if let Some(ref v) = input.quote {
        validate::require_long_text("quote", v)?;
    }
    validate::optional_text("position", input.position.as_deref())?;
    validate::optional_text("company", input.company.as_deref())
}
