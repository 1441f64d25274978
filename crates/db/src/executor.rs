//! Executes [`Statement`]s produced by the dynamic builder.

use devfolio_core::statement::Statement;
use devfolio_core::types::SqlValue;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, PgPool, Postgres};

type BoundQuery<'q, T> = QueryAs<'q, Postgres, T, PgArguments>;

fn prepare<'q, T>(stmt: &'q Statement) -> BoundQuery<'q, T>
where
    T: for<'r> FromRow<'r, PgRow>,
{
    tracing::debug!(sql = %stmt.text, params = stmt.params.len(), "Executing built statement");
    stmt.params
        .iter()
        .fold(sqlx::query_as::<_, T>(&stmt.text), bind)
}

fn bind<'q, T>(query: BoundQuery<'q, T>, value: &SqlValue) -> BoundQuery<'q, T> {
    match value {
        SqlValue::Text(v) => query.bind(v.clone()),
        SqlValue::BigInt(v) => query.bind(*v),
        SqlValue::Date(v) => query.bind(*v),
    }
}

/// Run a `RETURNING *` statement that must produce exactly one row.
pub async fn fetch_one<T>(pool: &PgPool, stmt: &Statement) -> Result<T, sqlx::Error>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    prepare::<T>(stmt).fetch_one(pool).await
}

/// Run a `RETURNING *` statement whose filter may match nothing.
pub async fn fetch_optional<T>(pool: &PgPool, stmt: &Statement) -> Result<Option<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    prepare::<T>(stmt).fetch_optional(pool).await
}
