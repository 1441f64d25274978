//! Handlers for the `/developers` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use devfolio_core::error::CoreError;
use devfolio_core::fields::{ensure_not_empty, field_names, ValidationMode};
use devfolio_core::gate::EntityKind;
use devfolio_core::policy::DeveloperDeletePolicy;
use devfolio_core::tables::{DEVELOPERS, DEVELOPER_INFOS};
use devfolio_core::types::DbId;
use devfolio_db::models::developer::{
    Developer, DeveloperInfo, DeveloperProjectRow, DeveloperWithInfo,
};
use devfolio_db::repositories::{DeveloperInfoRepo, DeveloperRepo};

use super::validate_body;
use crate::error::{AppError, AppResult};
use crate::extract::{Body, JsonBody};
use crate::middleware::exists::{DeveloperExists, InfoAvailable};
use crate::state::AppState;

fn developer_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: EntityKind::Developer.label(),
        id: Some(id),
    })
}

/// POST /developers
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Body>,
) -> AppResult<Json<Developer>> {
    ensure_not_empty(&body)?;
    let fields = validate_body(&state, &body, DEVELOPERS.fields, ValidationMode::Create)?;
    let developer = DeveloperRepo::create(&state.pool, &fields).await?;
    tracing::info!(developer_id = developer.id, "Developer created");
    Ok(Json(developer))
}

/// POST /developers/{id}/infos
///
/// Inserts the info row, then points the developer at it. The two writes
/// are separate statements.
pub async fn create_info(
    State(state): State<AppState>,
    InfoAvailable(id): InfoAvailable,
    JsonBody(body): JsonBody<Body>,
) -> AppResult<Json<DeveloperInfo>> {
    let fields = validate_body(&state, &body, DEVELOPER_INFOS.fields, ValidationMode::Create)?;
    let info = DeveloperInfoRepo::create(&state.pool, &fields).await?;
    DeveloperRepo::attach_info(&state.pool, id, info.id).await?;
    tracing::info!(developer_id = id, info_id = info.id, "Developer info created");
    Ok(Json(info))
}

/// GET /developers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<DeveloperWithInfo>>> {
    let developers = DeveloperRepo::list_with_info(&state.pool).await?;
    Ok(Json(developers))
}

/// GET /developers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    DeveloperExists(id): DeveloperExists,
) -> AppResult<Json<DeveloperWithInfo>> {
    let developer = DeveloperRepo::find_with_info(&state.pool, id)
        .await?
        .ok_or_else(|| developer_not_found(id))?;
    Ok(Json(developer))
}

/// PATCH /developers/{id}
pub async fn update(
    State(state): State<AppState>,
    DeveloperExists(id): DeveloperExists,
    JsonBody(body): JsonBody<Body>,
) -> AppResult<Json<Developer>> {
    let fields = validate_body(&state, &body, DEVELOPERS.fields, ValidationMode::Patch)?;
    let developer = DeveloperRepo::update(&state.pool, id, &fields)
        .await?
        .ok_or_else(|| developer_not_found(id))?;
    tracing::info!(developer_id = id, "Developer updated");
    Ok(Json(developer))
}

/// PATCH /developers/{id}/infos
///
/// Patches the existing info row. Without one there is nothing to patch,
/// so the body must carry every info field and the row is created instead.
pub async fn update_info(
    State(state): State<AppState>,
    DeveloperExists(id): DeveloperExists,
    JsonBody(body): JsonBody<Body>,
) -> AppResult<Json<DeveloperInfo>> {
    let fields = validate_body(&state, &body, DEVELOPER_INFOS.fields, ValidationMode::Patch)?;
    let developer = DeveloperRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| developer_not_found(id))?;

    let info = match developer.developer_info_id {
        Some(info_id) => {
            let info = DeveloperInfoRepo::update(&state.pool, info_id, &fields)
                .await?
                .ok_or(CoreError::NotFound {
                    entity: "Developer info",
                    id: Some(info_id),
                })?;
            tracing::info!(developer_id = id, info_id, "Developer info updated");
            info
        }
        None => {
            let complete = DEVELOPER_INFOS
                .fields
                .iter()
                .all(|f| fields.contains(f.name));
            if !complete {
                return Err(CoreError::IncompleteInfoCreation {
                    keys: field_names(DEVELOPER_INFOS.fields),
                }
                .into());
            }
            let info = DeveloperInfoRepo::create(&state.pool, &fields).await?;
            DeveloperRepo::attach_info(&state.pool, id, info.id).await?;
            tracing::info!(developer_id = id, info_id = info.id, "Developer info created on patch");
            info
        }
    };

    Ok(Json(info))
}

/// DELETE /developers/{id}
///
/// Under [`DeveloperDeletePolicy::InfoFirst`] a developer with an info row
/// only loses the info row; the developer itself survives.
pub async fn delete(
    State(state): State<AppState>,
    DeveloperExists(id): DeveloperExists,
) -> AppResult<StatusCode> {
    let developer = DeveloperRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| developer_not_found(id))?;

    match (state.config.developer_delete_policy, developer.developer_info_id) {
        (DeveloperDeletePolicy::InfoFirst, Some(info_id)) => {
            DeveloperInfoRepo::delete(&state.pool, info_id).await?;
            tracing::info!(developer_id = id, info_id, "Developer info deleted");
        }
        (DeveloperDeletePolicy::InfoFirst, None) => {
            DeveloperRepo::delete(&state.pool, id).await?;
            tracing::info!(developer_id = id, "Developer deleted");
        }
        (DeveloperDeletePolicy::Cascade, info_id) => {
            DeveloperRepo::delete(&state.pool, id).await?;
            if let Some(info_id) = info_id {
                DeveloperInfoRepo::delete(&state.pool, info_id).await?;
            }
            tracing::info!(developer_id = id, ?info_id, "Developer deleted with info");
        }
    }

    Ok(StatusCode::NO_CONTENT)
}

/// GET /developers/{id}/projects
pub async fn list_projects(
    State(state): State<AppState>,
    DeveloperExists(id): DeveloperExists,
) -> AppResult<Json<Vec<DeveloperProjectRow>>> {
    let rows = DeveloperRepo::list_projects(&state.pool, id).await?;
    Ok(Json(rows))
}
