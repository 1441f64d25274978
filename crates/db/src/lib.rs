use sqlx::postgres::PgPoolOptions;

pub mod executor;
pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Errors from repository writes, which build their SQL at runtime.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Statement(#[from] devfolio_core::statement::StatementError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the pool can reach the server.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
