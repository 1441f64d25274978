//! Repository for the `projects` table.

use devfolio_core::fields::FieldMap;
use devfolio_core::statement::{build, Filter, Operation};
use devfolio_core::tables::PROJECTS;
use devfolio_core::types::{DbId, SqlValue};
use sqlx::PgPool;

use crate::executor;
use crate::models::project::{Project, ProjectTechnologyRow};
use crate::DbError;

/// Projects left-joined with their technologies.
const WITH_TECHNOLOGIES_SELECT: &str = r#"
    SELECT pj.id AS "projectId", pj.name, pj.description, pj."estimatedTime",
           pj.repository, pj."startDate", pj."endDate", pj."developerId",
           techs.id AS "technologyId", techs.name AS "technologyName"
      FROM projects pj
      LEFT JOIN projects_technologies proj_techs ON proj_techs."projectId" = pj.id
      LEFT JOIN technologies techs ON techs.id = proj_techs."technologyId"
"#;

pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a project from validated fields, returning the created row.
    pub async fn create(pool: &PgPool, fields: &FieldMap) -> Result<Project, DbError> {
        let stmt = build(&PROJECTS, Operation::Insert, fields)?;
        Ok(executor::fetch_one(pool, &stmt).await?)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        sqlx::query_as::<_, Project>(
            r#"SELECT id, name, description, "estimatedTime", repository,
                      "startDate", "endDate", "developerId"
                 FROM projects WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// One row per linked technology; empty if the project does not exist.
    pub async fn find_with_technologies(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Vec<ProjectTechnologyRow>, sqlx::Error> {
        let query = format!("{WITH_TECHNOLOGIES_SELECT} WHERE pj.id = $1 ORDER BY techs.id");
        sqlx::query_as::<_, ProjectTechnologyRow>(&query)
            .bind(id)
            .fetch_all(pool)
            .await
    }

    pub async fn list_with_technologies(
        pool: &PgPool,
    ) -> Result<Vec<ProjectTechnologyRow>, sqlx::Error> {
        let query = format!("{WITH_TECHNOLOGIES_SELECT} ORDER BY pj.id, techs.id");
        sqlx::query_as::<_, ProjectTechnologyRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update the given columns only. Returns `None` if no row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        fields: &FieldMap,
    ) -> Result<Option<Project>, DbError> {
        let filter = Filter {
            column: PROJECTS.key,
            value: SqlValue::from(id),
        };
        let stmt = build(&PROJECTS, Operation::Update(filter), fields)?;
        Ok(executor::fetch_optional(pool, &stmt).await?)
    }

    /// Permanently delete a project; its technology links cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
