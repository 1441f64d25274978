//! Row-count probe backing the existence gates.

use devfolio_core::gate::EntityKind;
use devfolio_core::types::DbId;
use sqlx::PgPool;

pub struct ExistenceRepo;

impl ExistenceRepo {
    /// Count rows of `kind` with the given id (0 or 1).
    pub async fn count(pool: &PgPool, kind: EntityKind, id: DbId) -> Result<u64, sqlx::Error> {
        // Table names come from a closed enum, never from the request.
        let query = format!("SELECT COUNT(*) FROM {} WHERE id = $1", kind.table());
        let (count,): (i64,) = sqlx::query_as(&query).bind(id).fetch_one(pool).await?;
        Ok(count.max(0) as u64)
    }
}
