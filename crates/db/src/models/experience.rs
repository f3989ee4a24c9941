//! Work experience entry model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use folio_core::types::{DbId, Timestamp};

/// A row from the `experience` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Experience {
    pub id: DbId,
    pub position: String,
    pub company: String,
    /// Free-form period text, e.g. `"2021 - present"`.
    pub period: String,
    pub description: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an experience entry.
#[derive(Debug, Deserialize)]
pub struct CreateExperience {
    pub position: String,
    pub company: String,
    pub period: String,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
}

/// DTO for updating an experience entry. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateExperience {
    pub position: Option<String>,
    pub company: Option<String>,
    pub period: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
}
