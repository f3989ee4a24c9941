//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod dashboard;
pub mod education;
pub mod experience;
pub mod picture;
pub mod profile;
pub mod project;
pub mod reference;
pub mod skill;
pub mod user;
