//! Repository for the `pictures` table.

use sqlx::PgPool;

use folio_core::types::DbId;

use crate::models::picture::{CreatePicture, Picture, UpdatePicture};

const COLUMNS: &str = "id, title, image_url, category, created_at, updated_at";

/// Provides CRUD operations for gallery pictures.
pub struct PictureRepo;

impl PictureRepo {
    /// Insert a new picture, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePicture) -> Result<Picture, sqlx::Error> {
        let query = format!(
            "INSERT INTO pictures (title, image_url, category)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Picture>(&query)
            .bind(&input.title)
            .bind(&input.image_url)
            .bind(&input.category)
            .fetch_one(pool)
            .await
    }

    /// Find a picture by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Picture>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pictures WHERE id = $1");
        sqlx::query_as::<_, Picture>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all pictures, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Picture>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pictures ORDER BY created_at DESC");
        sqlx::query_as::<_, Picture>(&query).fetch_all(pool).await
    }

    /// Partially update a picture; absent fields keep their current value.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePicture,
    ) -> Result<Option<Picture>, sqlx::Error> {
        let query = format!(
            "UPDATE pictures SET
                title = COALESCE($2, title),
                image_url = COALESCE($3, image_url),
                category = COALESCE($4, category)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Picture>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.image_url)
            .bind(&input.category)
            .fetch_optional(pool)
            .await
    }

    /// Delete a picture. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pictures WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
