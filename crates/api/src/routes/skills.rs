//! Route definitions for the skills section.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::skills;
use crate::state::AppState;

/// Public read routes mounted at `/api/skills`.
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(skills::list_skills))
        .route("/{id}", get(skills::get_skill))
}

/// Admin editing routes mounted at `/api/admin/skills`.
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", post(skills::create_skill))
        .route("/{id}", put(skills::update_skill).delete(skills::delete_skill))
}
