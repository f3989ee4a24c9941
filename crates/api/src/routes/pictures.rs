//! Route definitions for the picture gallery section.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::pictures;
use crate::state::AppState;

/// Public read routes mounted at `/api/pictures`.
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(pictures::list_pictures))
        .route("/{id}", get(pictures::get_picture))
}

/// Admin editing routes mounted at `/api/admin/pictures`.
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", post(pictures::create_picture))
        .route(
            "/{id}",
            put(pictures::update_picture).delete(pictures::delete_picture),
        )
}
