//! Repository for the `references` table.
//!
//! The table name is a reserved word and stays double-quoted in SQL.

use sqlx::PgPool;

use folio_core::types::DbId;

use crate::models::reference::{CreateReference, Reference, UpdateReference};

const COLUMNS: &str = "id, name, quote, position, company, created_at, updated_at";

/// Provides CRUD operations for references (testimonials).
pub struct ReferenceRepo;

impl ReferenceRepo {
    /// Insert a new reference, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateReference) -> Result<Reference, sqlx::Error> {
        let query = format!(
            "INSERT INTO \"references\" (name, quote, position, company)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reference>(&query)
            .bind(&input.name)
            .bind(&input.quote)
            .bind(&input.position)
            .bind(&input.company)
            .fetch_one(pool)
            .await
    }

    /// Find a reference by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Reference>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM \"references\" WHERE id = $1");
        sqlx::query_as::<_, Reference>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all references, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Reference>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM \"references\" ORDER BY created_at DESC");
        sqlx::query_as::<_, Reference>(&query).fetch_all(pool).await
    }

    /// Partially update a reference; absent fields keep their current value.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateReference,
    ) -> Result<Option<Reference>, sqlx::Error> {
        let query = format!(
            "UPDATE \"references\" SET
                name = COALESCE($2, name),
                quote = COALESCE($3, quote),
                position = COALESCE($4, position),
                company = COALESCE($5, company)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reference>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.quote)
            .bind(&input.position)
            .bind(&input.company)
            .fetch_optional(pool)
            .await
    }

    /// Delete a reference. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM \"references\" WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
