//! Route definitions for the references section.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::references;
use crate::state::AppState;

/// Public read routes mounted at `/api/references`.
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(references::list_references))
        .route("/{id}", get(references::get_reference))
}

/// Admin editing routes mounted at `/api/admin/references`.
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", post(references::create_reference))
        .route(
            "/{id}",
            put(references::update_reference).delete(references::delete_reference),
        )
}
