use devfolio_core::technology::CONTROLLED_VOCABULARY;
use devfolio_db::repositories::TechnologyRepo;
use sqlx::PgPool;

/// The seeded vocabulary matches the names the API advertises, in order.
#[sqlx::test(migrations = "./migrations")]
async fn test_seeded_technologies_match_vocabulary(pool: PgPool) {
    let names = TechnologyRepo::list_names(&pool).await.unwrap();
    assert_eq!(names, CONTROLLED_VOCABULARY);
}

/// All `id` columns must be bigint.
#[sqlx::test(migrations = "./migrations")]
async fn test_all_pks_are_bigint(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name::text, data_type::text
         FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert_eq!(rows.len(), 5);
    for (table, data_type) in &rows {
        assert_eq!(data_type, "bigint", "Table {table}.id should be bigint");
    }
}

/// Request-facing columns keep their camelCase names so runtime-built
/// statements can quote them verbatim.
#[sqlx::test(migrations = "./migrations")]
async fn test_camel_case_columns_exist(pool: PgPool) {
    let expected = [
        ("developers", "developerInfoId"),
        ("developer_infos", "developerSince"),
        ("developer_infos", "preferedOS"),
        ("projects", "estimatedTime"),
        ("projects", "startDate"),
        ("projects", "endDate"),
        ("projects", "developerId"),
        ("projects_technologies", "addedIn"),
        ("projects_technologies", "projectId"),
        ("projects_technologies", "technologyId"),
    ];

    for (table, column) in expected {
        let found: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM information_schema.columns
             WHERE table_schema = 'public' AND table_name = $1 AND column_name = $2",
        )
        .bind(table)
        .bind(column)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(found, 1, "Missing column {table}.\"{column}\"");
    }
}
