//! Route definitions for the admin dashboard.
//!
//! ```text
//! GET /dashboard  -> section_counts
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Dashboard routes merged into `/api/admin`.
pub fn router() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard::section_counts))
}
