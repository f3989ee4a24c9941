//! Aggregate queries backing the admin dashboard.

use sqlx::PgPool;

use crate::models::dashboard::SectionCounts;

/// Read-only aggregates; no rows are ever written through this repo.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Count the rows in every portfolio section with a single statement.
    pub async fn section_counts(pool: &PgPool) -> Result<SectionCounts, sqlx::Error> {
        let row: (i64, i64, i64, i64, i64, i64) = sqlx::query_as(
            "SELECT
                (SELECT COUNT(*) FROM education),
                (SELECT COUNT(*) FROM experience),
                (SELECT COUNT(*) FROM skills),
                (SELECT COUNT(*) FROM projects),
                (SELECT COUNT(*) FROM pictures),
                (SELECT COUNT(*) FROM \"references\")",
        )
        .fetch_one(pool)
        .await?;

        Ok(SectionCounts {
            education: row.0,
            experience: row.1,
            skills: row.2,
            projects: row.3,
            pictures: row.4,
            references: row.5,
        })
    }
}
