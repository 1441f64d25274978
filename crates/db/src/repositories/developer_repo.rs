//! Repository for the `developers` table.

use devfolio_core::fields::FieldMap;
use devfolio_core::statement::{build, Filter, Operation};
use devfolio_core::tables::DEVELOPERS;
use devfolio_core::types::{DbId, SqlValue};
use sqlx::PgPool;

use crate::executor;
use crate::models::developer::{Developer, DeveloperProjectRow, DeveloperWithInfo};
use crate::DbError;

/// Developer columns joined with the two info columns.
const WITH_INFO_SELECT: &str = r#"
    SELECT dev.id, dev.name, dev.email, dev."developerInfoId",
           info."developerSince", info."preferedOS"
      FROM developers dev
      LEFT JOIN developer_infos info ON info.id = dev."developerInfoId"
"#;

pub struct DeveloperRepo;

impl DeveloperRepo {
    /// Insert a developer from validated fields, returning the created row.
    pub async fn create(pool: &PgPool, fields: &FieldMap) -> Result<Developer, DbError> {
        let stmt = build(&DEVELOPERS, Operation::Insert, fields)?;
        Ok(executor::fetch_one(pool, &stmt).await?)
    }

    /// Find a bare developer row, including its info reference.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Developer>, sqlx::Error> {
        sqlx::query_as::<_, Developer>(
            r#"SELECT id, name, email, "developerInfoId" FROM developers WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_with_info(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<DeveloperWithInfo>, sqlx::Error> {
        let query = format!("{WITH_INFO_SELECT} WHERE dev.id = $1");
        sqlx::query_as::<_, DeveloperWithInfo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every developer with its info fields, oldest first.
    pub async fn list_with_info(pool: &PgPool) -> Result<Vec<DeveloperWithInfo>, sqlx::Error> {
        let query = format!("{WITH_INFO_SELECT} ORDER BY dev.id");
        sqlx::query_as::<_, DeveloperWithInfo>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update the given columns only. Returns `None` if no row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        fields: &FieldMap,
    ) -> Result<Option<Developer>, DbError> {
        let filter = Filter {
            column: DEVELOPERS.key,
            value: SqlValue::from(id),
        };
        let stmt = build(&DEVELOPERS, Operation::Update(filter), fields)?;
        Ok(executor::fetch_optional(pool, &stmt).await?)
    }

    /// Point the developer at an info row. Returns `true` if a row was updated.
    pub async fn attach_info(pool: &PgPool, id: DbId, info_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(r#"UPDATE developers SET "developerInfoId" = $1 WHERE id = $2"#)
            .bind(info_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a developer. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM developers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Every project of a developer with its technologies, flattened.
    ///
    /// A developer without projects still yields one row with null project
    /// and technology fields.
    pub async fn list_projects(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Vec<DeveloperProjectRow>, sqlx::Error> {
        sqlx::query_as::<_, DeveloperProjectRow>(
            r#"
            SELECT dev.id                  AS "developerId",
                   dev.name                AS "developerName",
                   dev.email               AS "developerEmail",
                   dev."developerInfoId"   AS "developerInfoId",
                   info."developerSince"   AS "developerInfoDeveloperSince",
                   info."preferedOS"       AS "developerInfoPreferedOS",
                   pj.id                   AS "projectId",
                   pj.name                 AS "projectName",
                   pj.description          AS "projectDescription",
                   pj."estimatedTime"      AS "projectEstimatedTime",
                   pj.repository           AS "projectRepository",
                   pj."startDate"          AS "projectStartDate",
                   pj."endDate"            AS "projectEndDate",
                   techs.id                AS "technologyId",
                   techs.name              AS "technologyName"
              FROM developers dev
              LEFT JOIN developer_infos info ON info.id = dev."developerInfoId"
              LEFT JOIN projects pj ON pj."developerId" = dev.id
              LEFT JOIN projects_technologies proj_techs ON proj_techs."projectId" = pj.id
              LEFT JOIN technologies techs ON techs.id = proj_techs."technologyId"
             WHERE dev.id = $1
             ORDER BY pj.id, techs.id
            "#,
        )
        .bind(id)
        .fetch_all(pool)
        .await
    }
}
