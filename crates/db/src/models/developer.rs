//! Developer and developer-info rows.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use devfolio_core::types::DbId;

/// A row from the `developers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Developer {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub developer_info_id: Option<DbId>,
}

/// A row from the `developer_infos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct DeveloperInfo {
    pub id: DbId,
    pub developer_since: NaiveDate,
    #[serde(rename = "preferedOS")]
    #[sqlx(rename = "preferedOS")]
    pub prefered_os: String,
}

/// A developer joined with its info fields, which are null without an info row.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct DeveloperWithInfo {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub developer_info_id: Option<DbId>,
    pub developer_since: Option<NaiveDate>,
    #[serde(rename = "preferedOS")]
    #[sqlx(rename = "preferedOS")]
    pub prefered_os: Option<String>,
}

/// One row of `GET /developers/{id}/projects`: developer, info, project and
/// technology flattened by left joins.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct DeveloperProjectRow {
    pub developer_id: DbId,
    pub developer_name: String,
    pub developer_email: String,
    pub developer_info_id: Option<DbId>,
    pub developer_info_developer_since: Option<NaiveDate>,
    #[serde(rename = "developerInfoPreferedOS")]
    #[sqlx(rename = "developerInfoPreferedOS")]
    pub developer_info_prefered_os: Option<String>,
    pub project_id: Option<DbId>,
    pub project_name: Option<String>,
    pub project_description: Option<String>,
    pub project_estimated_time: Option<String>,
    pub project_repository: Option<String>,
    pub project_start_date: Option<NaiveDate>,
    pub project_end_date: Option<NaiveDate>,
    pub technology_id: Option<DbId>,
    pub technology_name: Option<String>,
}
