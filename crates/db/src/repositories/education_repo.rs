//! Repository for the `education` table.

use sqlx::PgPool;

use folio_core::types::DbId;

use crate::models::education::{CreateEducation, Education, UpdateEducation};

const COLUMNS: &str =
    "id, degree, institution, start_year, end_year, description, sort_order, created_at, updated_at";

/// Provides CRUD operations for education entries.
pub struct EducationRepo;

impl EducationRepo {
    /// Insert a new education entry, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEducation) -> Result<Education, sqlx::Error> {
        let query = format!(
            "INSERT INTO education (degree, institution, start_year, end_year, description, sort_order)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Education>(&query)
            .bind(&input.degree)
            .bind(&input.institution)
            .bind(&input.start_year)
            .bind(&input.end_year)
            .bind(&input.description)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Find an education entry by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Education>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM education WHERE id = $1");
        sqlx::query_as::<_, Education>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all entries in display order, newest first within equal sort keys.
    pub async fn list(pool: &PgPool) -> Result<Vec<Education>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM education ORDER BY sort_order ASC, created_at DESC"
        );
        sqlx::query_as::<_, Education>(&query).fetch_all(pool).await
    }

    /// Partially update an entry; absent fields keep their current value.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEducation,
    ) -> Result<Option<Education>, sqlx::Error> {
        let query = format!(
            "UPDATE education SET
                degree = COALESCE($2, degree),
                institution = COALESCE($3, institution),
                start_year = COALESCE($4, start_year),
                end_year = COALESCE($5, end_year),
                description = COALESCE($6, description),
                sort_order = COALESCE($7, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Education>(&query)
            .bind(id)
            .bind(&input.degree)
            .bind(&input.institution)
            .bind(&input.start_year)
            .bind(&input.end_year)
            .bind(&input.description)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete an entry. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM education WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
