//! Repository for the `experience` table.

use sqlx::PgPool;

use folio_core::types::DbId;

use crate::models::experience::{CreateExperience, Experience, UpdateExperience};

const COLUMNS: &str =
    "id, position, company, period, description, sort_order, created_at, updated_at";

/// Provides CRUD operations for experience entries.
pub struct ExperienceRepo;

impl ExperienceRepo {
    /// Insert a new experience entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateExperience,
    ) -> Result<Experience, sqlx::Error> {
        let query = format!(
            "INSERT INTO experience (position, company, period, description, sort_order)
             VALUES ($1, $2, $3, $4, COALESCE($5, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Experience>(&query)
            .bind(&input.position)
            .bind(&input.company)
            .bind(&input.period)
            .bind(&input.description)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Find an experience entry by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Experience>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM experience WHERE id = $1");
        sqlx::query_as::<_, Experience>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all entries in display order, newest first within equal sort keys.
    pub async fn list(pool: &PgPool) -> Result<Vec<Experience>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM experience ORDER BY sort_order ASC, created_at DESC"
        );
        sqlx::query_as::<_, Experience>(&query).fetch_all(pool).await
    }

    /// Partially update an entry; absent fields keep their current value.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateExperience,
    ) -> Result<Option<Experience>, sqlx::Error> {
        let query = format!(
            "UPDATE experience SET
                position = COALESCE($2, position),
                company = COALESCE($3, company),
                period = COALESCE($4, period),
                description = COALESCE($5, description),
                sort_order = COALESCE($6, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Experience>(&query)
            .bind(id)
            .bind(&input.position)
            .bind(&input.company)
            .bind(&input.period)
            .bind(&input.description)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete an entry. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM experience WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
