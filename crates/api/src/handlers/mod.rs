//! Request handlers, one submodule per resource.
//!
//! Section submodules provide async handler functions (list, get_by_id,
//! create, update, delete) for a single portfolio section. Handlers
//! validate input via `folio_core::validate`, delegate to the
//! corresponding repository in `folio_db`, and map errors via `AppError`.

pub mod auth;
pub mod dashboard;
pub mod education;
pub mod experience;
pub mod pictures;
pub mod profile;
pub mod projects;
pub mod references;
pub mod skills;
