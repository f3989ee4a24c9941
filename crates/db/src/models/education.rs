//! Education entry model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use folio_core::types::{DbId, Timestamp};

/// A row from the `education` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Education {
    pub id: DbId,
    pub degree: String,
    pub institution: String,
    pub start_year: String,
    pub end_year: Option<String>,
    pub description: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an education entry.
#[derive(Debug, Deserialize)]
pub struct CreateEducation {
    pub degree: String,
    pub institution: String,
    pub start_year: String,
    pub end_year: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
}

/// DTO for updating an education entry. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateEducation {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub start_year: Option<String>,
    pub end_year: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
}
