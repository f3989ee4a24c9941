//! Skill model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use folio_core::types::{DbId, Timestamp};

/// A row from the `skills` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Skill {
    pub id: DbId,
    pub name: String,
    pub category: String,
    /// Proficiency percentage, 0..=100.
    pub level: i32,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a skill.
#[derive(Debug, Deserialize)]
pub struct CreateSkill {
    pub name: String,
    pub category: String,
    pub level: Option<i32>,
    pub sort_order: Option<i32>,
}

/// DTO for updating a skill. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateSkill {
    pub name: Option<String>,
    pub category: Option<String>,
    pub level: Option<i32>,
    pub sort_order: Option<i32>,
}
