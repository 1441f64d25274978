//! Repository for `technologies` and the `projects_technologies` join table.

use devfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::technology::{ProjectTechnology, Technology};

const LINK_COLUMNS: &str = r#"id, "addedIn", "projectId", "technologyId""#;

pub struct TechnologyRepo;

impl TechnologyRepo {
    /// Exact, case-sensitive lookup in the controlled vocabulary.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Technology>, sqlx::Error> {
        sqlx::query_as::<_, Technology>("SELECT id, name FROM technologies WHERE name = $1")
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// All technology names, in seed order.
    pub async fn list_names(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT name FROM technologies ORDER BY id")
            .fetch_all(pool)
            .await
    }

    pub async fn find_link(
        pool: &PgPool,
        project_id: DbId,
        technology_id: DbId,
    ) -> Result<Option<ProjectTechnology>, sqlx::Error> {
        let query = format!(
            r#"SELECT {LINK_COLUMNS} FROM projects_technologies
                WHERE "projectId" = $1 AND "technologyId" = $2"#
        );
        sqlx::query_as::<_, ProjectTechnology>(&query)
            .bind(project_id)
            .bind(technology_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a link row. The pair constraint rejects duplicates.
    pub async fn link(
        pool: &PgPool,
        project_id: DbId,
        technology_id: DbId,
    ) -> Result<ProjectTechnology, sqlx::Error> {
        let query = format!(
            r#"INSERT INTO projects_technologies ("projectId", "technologyId")
               VALUES ($1, $2)
               RETURNING {LINK_COLUMNS}"#
        );
        sqlx::query_as::<_, ProjectTechnology>(&query)
            .bind(project_id)
            .bind(technology_id)
            .fetch_one(pool)
            .await
    }

    /// Remove a link row. Returns `true` if a row was removed.
    pub async fn unlink(
        pool: &PgPool,
        project_id: DbId,
        technology_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"DELETE FROM projects_technologies WHERE "projectId" = $1 AND "technologyId" = $2"#,
        )
        .bind(project_id)
        .bind(technology_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
