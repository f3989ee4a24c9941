//! Route definitions for the work experience section.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::experience;
use crate::state::AppState;

/// Public read routes mounted at `/api/experience`.
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(experience::list_experience))
        .route("/{id}", get(experience::get_experience))
}

/// Admin editing routes mounted at `/api/admin/experience`.
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", post(experience::create_experience))
        .route(
            "/{id}",
            put(experience::update_experience).delete(experience::delete_experience),
        )
}
