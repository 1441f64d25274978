//! Repository for the `developer_infos` table.

use devfolio_core::fields::FieldMap;
use devfolio_core::statement::{build, Filter, Operation};
use devfolio_core::tables::DEVELOPER_INFOS;
use devfolio_core::types::{DbId, SqlValue};
use sqlx::PgPool;

use crate::executor;
use crate::models::developer::DeveloperInfo;
use crate::DbError;

pub struct DeveloperInfoRepo;

impl DeveloperInfoRepo {
    /// Insert an info row. The caller attaches it to a developer.
    pub async fn create(pool: &PgPool, fields: &FieldMap) -> Result<DeveloperInfo, DbError> {
        let stmt = build(&DEVELOPER_INFOS, Operation::Insert, fields)?;
        Ok(executor::fetch_one(pool, &stmt).await?)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<DeveloperInfo>, sqlx::Error> {
        sqlx::query_as::<_, DeveloperInfo>(
            r#"SELECT id, "developerSince", "preferedOS" FROM developer_infos WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Update the given columns only. Returns `None` if no row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        fields: &FieldMap,
    ) -> Result<Option<DeveloperInfo>, DbError> {
        let filter = Filter {
            column: DEVELOPER_INFOS.key,
            value: SqlValue::from(id),
        };
        let stmt = build(&DEVELOPER_INFOS, Operation::Update(filter), fields)?;
        Ok(executor::fetch_optional(pool, &stmt).await?)
    }

    /// Delete an info row. The owning developer's reference is cleared by
    /// the `ON DELETE SET NULL` foreign key.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM developer_infos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
