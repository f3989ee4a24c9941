//! Profile (hero banner) model and DTO.
//!
//! The profile is a singleton: one row with id 1, enforced by a CHECK
//! constraint. Writes go through an upsert that replaces the whole row.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use folio_core::types::{DbId, Timestamp};

/// The singleton row from the `profile` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Profile {
    pub id: DbId,
    pub full_name: String,
    pub tagline: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    /// Hero stats: JSON array of `{ "label": ..., "value": ... }` pairs.
    pub stats: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for the full-row profile upsert (PUT semantics: omitted optional
/// fields are cleared, not preserved).
#[derive(Debug, Deserialize)]
pub struct UpsertProfile {
    pub full_name: String,
    pub tagline: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub stats: Option<serde_json::Value>,
}
