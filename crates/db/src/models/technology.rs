use serde::Serialize;
use sqlx::FromRow;
use devfolio_core::types::{DbId, Timestamp};

/// A row from the `technologies` lookup table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Technology {
    pub id: DbId,
    pub name: String,
}

/// A row from the `projects_technologies` join table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct ProjectTechnology {
    pub id: DbId,
    pub added_in: Timestamp,
    pub project_id: DbId,
    pub technology_id: DbId,
}
