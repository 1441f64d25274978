//! Existence gates.
//!
//! Axum runs extractors in argument order, so a gate placed before the body
//! extractor short-circuits the request before the handler sees any input.

use std::collections::HashMap;

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use devfolio_core::error::CoreError;
use devfolio_core::gate::{resolve_id, EntityKind, ExistenceGate};
use devfolio_core::types::DbId;
use devfolio_db::repositories::{DeveloperRepo, ExistenceRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{Body, JsonBody, PathParam};
use crate::state::AppState;

/// Run one existence query and return the id if the row is present.
pub async fn ensure_exists(
    pool: &devfolio_db::DbPool,
    kind: EntityKind,
    id: Option<DbId>,
) -> AppResult<DbId> {
    let mut gate = ExistenceGate::new(kind);
    let rows = match id {
        Some(id) => ExistenceRepo::count(pool, kind, id).await?,
        None => 0,
    };
    gate.observe(id, rows);
    gate.into_result().map_err(|err| {
        tracing::debug!(entity = kind.label(), ?id, "Existence gate rejected request");
        AppError::from(err)
    })
}

async fn path_id(parts: &mut Parts, state: &AppState) -> AppResult<Option<DbId>> {
    let PathParam(params) =
        PathParam::<HashMap<String, String>>::from_request_parts(parts, state).await?;
    Ok(resolve_id(params.get("id").map(String::as_str), None))
}

/// The `{id}` path segment names an existing developer.
#[derive(Debug, Clone, Copy)]
pub struct DeveloperExists(pub DbId);

impl FromRequestParts<AppState> for DeveloperExists {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let id = path_id(parts, state).await?;
        ensure_exists(&state.pool, EntityKind::Developer, id)
            .await
            .map(DeveloperExists)
    }
}

/// The `{id}` path segment names an existing project.
#[derive(Debug, Clone, Copy)]
pub struct ProjectExists(pub DbId);

impl FromRequestParts<AppState> for ProjectExists {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let id = path_id(parts, state).await?;
        ensure_exists(&state.pool, EntityKind::Project, id)
            .await
            .map(ProjectExists)
    }
}

/// A JSON body whose `developerId` names an existing developer.
///
/// Consumes the body, so it must be the handler's last argument.
#[derive(Debug)]
pub struct ReferencedDeveloper {
    pub developer_id: DbId,
    pub body: Body,
}

impl FromRequest<AppState> for ReferencedDeveloper {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let JsonBody(body) = JsonBody::<Body>::from_request(req, state).await?;
        let id = resolve_id(None, Some(&body));
        let developer_id = ensure_exists(&state.pool, EntityKind::Developer, id).await?;
        Ok(ReferencedDeveloper { developer_id, body })
    }
}

/// The `{id}` developer exists and has no info row attached yet.
#[derive(Debug, Clone, Copy)]
pub struct InfoAvailable(pub DbId);

impl FromRequestParts<AppState> for InfoAvailable {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let DeveloperExists(id) = DeveloperExists::from_request_parts(parts, state).await?;
        let developer = DeveloperRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: EntityKind::Developer.label(),
                id: Some(id),
            })?;
        if developer.developer_info_id.is_some() {
            return Err(CoreError::Conflict("Developer info already exists!".into()).into());
        }
        Ok(InfoAvailable(id))
    }
}
