//! Reference (testimonial) model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use folio_core::types::{DbId, Timestamp};

/// A row from the `references` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Reference {
    pub id: DbId,
    pub name: String,
    pub quote: String,
    pub position: Option<String>,
    pub company: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a reference.
#[derive(Debug, Deserialize)]
pub struct CreateReference {
    pub name: String,
    pub quote: String,
    pub position: Option<String>,
    pub company: Option<String>,
}

/// DTO for updating a reference. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateReference {
    pub name: Option<String>,
    pub quote: Option<String>,
    pub position: Option<String>,
    pub company: Option<String>,
}
