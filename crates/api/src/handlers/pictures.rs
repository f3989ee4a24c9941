//! Handlers for the picture gallery section.
//!
//! Uploads never pass through this server: the admin client pushes media to
//! the image CDN directly and submits the resulting URL here.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_core::validate;
use folio_db::models::picture::{CreatePicture, UpdatePicture};
use folio_db::repositories::PictureRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/pictures
pub async fn list_pictures(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pictures = PictureRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: pictures }))
}

/// GET /api/pictures/{id}
pub async fn get_picture(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let picture = PictureRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Picture", id }))?;

    Ok(Json(DataResponse { data: picture }))
}

/// POST /api/admin/pictures
pub async fn create_picture(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreatePicture>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input).map_err(CoreError::Validation)?;

    let picture = PictureRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        picture_id = picture.id,
        title = %picture.title,
        "Picture created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: picture })))
}

/// PUT /api/admin/pictures/{id}
pub async fn update_picture(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePicture>,
) -> AppResult<impl IntoResponse> {
    validate_update(&input).map_err(CoreError::Validation)?;

    let picture = PictureRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Picture", id }))?;

    tracing::info!(user_id = auth.user_id, picture_id = id, "Picture updated");

    Ok(Json(DataResponse { data: picture }))
}

/// DELETE /api/admin/pictures/{id}
pub async fn delete_picture(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PictureRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Picture", id }));
    }

    tracing::info!(user_id = auth.user_id, picture_id = id, "Picture deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn validate_create(input: &CreatePicture) -> Result<(), String> {
    validate::require_text("title", &input.title)?;
    validate::require_http_url("image_url", &input.image_url)?;
    validate::optional_text("category", input.category.as_deref())
}

fn validate_update(input: &UpdatePicture) -> Result<(), String> {
    if let Some(ref v) = input.title {
        validate::require_text("title", v)?;
    }
    if let Some(ref v) = input.image_url {
        validate::require_http_url("image_url", v)?;
    }
    validate::optional_text("category", input.category.as_deref())
}
