//! Project rows and the project-with-technologies view.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use devfolio_core::types::DbId;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub estimated_time: String,
    pub repository: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub developer_id: DbId,
}

/// A project left-joined with one of its technologies.
///
/// A project with no technologies yields a single row whose technology
/// fields are null; a project with `n` technologies yields `n` rows.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct ProjectTechnologyRow {
    pub project_id: DbId,
    pub name: String,
    pub description: String,
    pub estimated_time: String,
    pub repository: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub developer_id: DbId,
    pub technology_id: Option<DbId>,
    pub technology_name: Option<String>,
}
