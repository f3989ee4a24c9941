//! Route definitions for the education section.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::education;
use crate::state::AppState;

/// Public read routes mounted at `/api/education`.
///
/// ```text
/// GET /      -> list_education
/// GET /{id}  -> get_education
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(education::list_education))
        .route("/{id}", get(education::get_education))
}

/// Admin editing routes mounted at `/api/admin/education`.
///
/// ```text
/// POST   /      -> create_education
/// PUT    /{id}  -> update_education
/// DELETE /{id}  -> delete_education
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", post(education::create_education))
        .route(
            "/{id}",
            put(education::update_education).delete(education::delete_education),
        )
}
