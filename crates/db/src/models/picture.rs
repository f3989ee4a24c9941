//! Gallery picture model and DTOs.
//!
//! The server stores CDN URLs only; uploads happen client-side against the
//! image host.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use folio_core::types::{DbId, Timestamp};

/// A row from the `pictures` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Picture {
    pub id: DbId,
    pub title: String,
    pub image_url: String,
    pub category: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a picture.
#[derive(Debug, Deserialize)]
pub struct CreatePicture {
    pub title: String,
    pub image_url: String,
    pub category: Option<String>,
}

/// DTO for updating a picture. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdatePicture {
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
}
