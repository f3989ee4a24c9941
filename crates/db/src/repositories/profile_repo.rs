//! Repository for the singleton `profile` table.

use sqlx::PgPool;

use crate::models::profile::{Profile, UpsertProfile};

const COLUMNS: &str = "id, full_name, tagline, bio, email, phone, location, avatar_url, \
    github_url, linkedin_url, twitter_url, stats, created_at, updated_at";

/// Provides read/upsert access to the singleton profile row.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Fetch the profile row, if it has been created yet.
    pub async fn get(pool: &PgPool) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profile WHERE id = 1");
        sqlx::query_as::<_, Profile>(&query).fetch_optional(pool).await
    }

    /// Insert or fully replace the singleton row (PUT semantics: optional
    /// fields absent from the input are cleared).
    pub async fn upsert(pool: &PgPool, input: &UpsertProfile) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profile
                (id, full_name, tagline, bio, email, phone, location, avatar_url,
                 github_url, linkedin_url, twitter_url, stats)
             VALUES (1, $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, COALESCE($11, '[]'::jsonb))
             ON CONFLICT (id) DO UPDATE SET
                full_name = EXCLUDED.full_name,
                tagline = EXCLUDED.tagline,
                bio = EXCLUDED.bio,
                email = EXCLUDED.email,
                phone = EXCLUDED.phone,
                location = EXCLUDED.location,
                avatar_url = EXCLUDED.avatar_url,
                github_url = EXCLUDED.github_url,
                linkedin_url = EXCLUDED.linkedin_url,
                twitter_url = EXCLUDED.twitter_url,
                stats = EXCLUDED.stats
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(&input.full_name)
            .bind(&input.tagline)
            .bind(&input.bio)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.location)
            .bind(&input.avatar_url)
            .bind(&input.github_url)
            .bind(&input.linkedin_url)
            .bind(&input.twitter_url)
            .bind(&input.stats)
            .fetch_one(pool)
            .await
    }
}
