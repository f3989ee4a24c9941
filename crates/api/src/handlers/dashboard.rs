//! Handlers for the admin dashboard.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use folio_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/admin/dashboard
///
/// Per-section row counts, the only derived state the dashboard shows.
pub async fn section_counts(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let counts = DashboardRepo::section_counts(&state.pool).await?;
    Ok(Json(DataResponse { data: counts }))
}
