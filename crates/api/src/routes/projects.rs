//! Route definitions for the projects section.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Public read routes mounted at `/api/projects`.
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list_projects))
        .route("/{id}", get(projects::get_project))
}

/// Admin editing routes mounted at `/api/admin/projects`.
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", post(projects::create_project))
        .route(
            "/{id}",
            put(projects::update_project).delete(projects::delete_project),
        )
}
