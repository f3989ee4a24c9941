//! Route composition for the portfolio API.

pub mod auth;
pub mod dashboard;
pub mod education;
pub mod experience;
pub mod health;
pub mod pictures;
pub mod profile;
pub mod projects;
pub mod references;
pub mod skills;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                       login (public)
/// /auth/me                          identity echo (requires auth)
///
/// /profile                          public hero/profile (GET)
/// /education                        list (GET)
/// /education/{id}                   one (GET)
/// /experience, /skills, /projects,
/// /pictures, /references            same public shape per section
///
/// /admin/profile                    upsert singleton (PUT)
/// /admin/<section>                  create (POST)
/// /admin/<section>/{id}             update, delete (PUT, DELETE)
/// /admin/dashboard                  per-section counts (GET)
/// ```
///
/// Everything under `/admin` (and `/auth/me`) requires a bearer token; the
/// public section routes require nothing.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/profile", profile::public_router())
        .nest("/education", education::public_router())
        .nest("/experience", experience::public_router())
        .nest("/skills", skills::public_router())
        .nest("/projects", projects::public_router())
        .nest("/pictures", pictures::public_router())
        .nest("/references", references::public_router())
        .nest("/admin", admin_routes())
}

/// The authenticated editing surface mounted at `/api/admin`.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .merge(profile::admin_router())
        .merge(dashboard::router())
        .nest("/education", education::admin_router())
        .nest("/experience", experience::admin_router())
        .nest("/skills", skills::admin_router())
        .nest("/projects", projects::admin_router())
        .nest("/pictures", pictures::admin_router())
        .nest("/references", references::admin_router())
}
