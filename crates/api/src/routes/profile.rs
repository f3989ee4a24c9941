//! Route definitions for the singleton profile.
//!
//! Two routers are provided:
//! - `public_router()` mounted at `/api/profile`
//! - `admin_router()` contributing `PUT /profile` under `/api/admin`

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Public profile routes mounted at `/api/profile`.
///
/// ```text
/// GET /  -> get_profile
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(profile::get_profile))
}

/// Admin profile routes merged into `/api/admin`.
///
/// ```text
/// PUT /profile  -> upsert_profile
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new().route("/profile", put(profile::upsert_profile))
}
