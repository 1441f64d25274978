//! Handlers for the `/projects` resource and its technology links.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use devfolio_core::error::CoreError;
use devfolio_core::fields::{FieldMap, ValidationMode};
use devfolio_core::gate::EntityKind;
use devfolio_core::tables::{PROJECTS, TECHNOLOGY_REQUEST};
use devfolio_core::technology::LinkOp;
use devfolio_core::types::{DbId, SqlValue};
use devfolio_db::models::project::{Project, ProjectTechnologyRow};
use devfolio_db::models::technology::Technology;
use devfolio_db::repositories::{ProjectRepo, TechnologyRepo};

use super::validate_body;
use crate::error::{AppError, AppResult};
use crate::extract::{Body, JsonBody, PathParam};
use crate::middleware::exists::{ProjectExists, ReferencedDeveloper};
use crate::state::AppState;

fn project_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: EntityKind::Project.label(),
        id: Some(id),
    })
}

/// POST /projects
pub async fn create(
    State(state): State<AppState>,
    ReferencedDeveloper { developer_id, body }: ReferencedDeveloper,
) -> AppResult<Json<Project>> {
    let fields = validate_body(&state, &body, PROJECTS.fields, ValidationMode::Create)?;
    let project = ProjectRepo::create(&state.pool, &fields).await?;
    tracing::info!(project_id = project.id, developer_id, "Project created");
    Ok(Json(project))
}

/// GET /projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectTechnologyRow>>> {
    let rows = ProjectRepo::list_with_technologies(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Vec<ProjectTechnologyRow>>> {
    let rows = ProjectRepo::find_with_technologies(&state.pool, id).await?;
    if rows.is_empty() {
        return Err(project_not_found(id));
    }
    Ok(Json(rows))
}

/// PATCH /projects/{id}
pub async fn update(
    State(state): State<AppState>,
    ProjectExists(id): ProjectExists,
    JsonBody(body): JsonBody<Body>,
) -> AppResult<Json<Project>> {
    let fields = validate_body(&state, &body, PROJECTS.fields, ValidationMode::Patch)?;
    let project = ProjectRepo::update(&state.pool, id, &fields)
        .await?
        .ok_or_else(|| project_not_found(id))?;
    tracing::info!(project_id = id, "Project updated");
    Ok(Json(project))
}

/// DELETE /projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    ProjectExists(id): ProjectExists,
) -> AppResult<StatusCode> {
    if !ProjectRepo::delete(&state.pool, id).await? {
        return Err(project_not_found(id));
    }
    tracing::info!(project_id = id, "Project deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /projects/{id}/technologies
///
/// Responds with the refreshed project-with-technologies rows.
pub async fn add_technology(
    State(state): State<AppState>,
    ProjectExists(id): ProjectExists,
    JsonBody(body): JsonBody<Body>,
) -> AppResult<Json<Vec<ProjectTechnologyRow>>> {
    let fields = validate_body(&state, &body, TECHNOLOGY_REQUEST, ValidationMode::Create)?;
    let name = technology_name(&fields)?;
    let technology = find_technology(&state, name, LinkOp::Attach).await?;

    if TechnologyRepo::find_link(&state.pool, id, technology.id)
        .await?
        .is_some()
    {
        return Err(CoreError::DuplicateTechnology {
            name: technology.name,
        }
        .into());
    }

    TechnologyRepo::link(&state.pool, id, technology.id).await?;
    tracing::info!(project_id = id, technology = %technology.name, "Technology linked");

    let rows = ProjectRepo::find_with_technologies(&state.pool, id).await?;
    Ok(Json(rows))
}

/// DELETE /projects/{id}/technologies/{name}
pub async fn remove_technology(
    State(state): State<AppState>,
    ProjectExists(id): ProjectExists,
    PathParam((_, name)): PathParam<(String, String)>,
) -> AppResult<StatusCode> {
    let technology = find_technology(&state, &name, LinkOp::Detach).await?;

    if TechnologyRepo::find_link(&state.pool, id, technology.id)
        .await?
        .is_none()
    {
        return Err(CoreError::TechnologyNotLinked { name }.into());
    }

    TechnologyRepo::unlink(&state.pool, id, technology.id).await?;
    tracing::info!(project_id = id, technology = %technology.name, "Technology unlinked");
    Ok(StatusCode::NO_CONTENT)
}

fn technology_name(fields: &FieldMap) -> AppResult<&str> {
    match fields.get("name") {
        Some(SqlValue::Text(Some(name))) => Ok(name.as_str()),
        _ => Err(AppError::InternalError(
            "validated technology request has no name".into(),
        )),
    }
}

/// Resolve a technology by exact name, listing the vocabulary on a miss.
async fn find_technology(state: &AppState, name: &str, op: LinkOp) -> AppResult<Technology> {
    match TechnologyRepo::find_by_name(&state.pool, name).await? {
        Some(technology) => Ok(technology),
        None => {
            let known = TechnologyRepo::list_names(&state.pool).await?;
            Err(CoreError::UnknownTechnology {
                name: name.to_string(),
                known,
                op,
            }
            .into())
        }
    }
}
