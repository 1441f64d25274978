//! Route definitions for the `/developers` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::developer;
use crate::state::AppState;

/// Routes mounted at `/developers`.
///
/// ```text
/// POST   /                -> create            (non-empty body)
/// GET    /                -> list
/// GET    /{id}            -> get_by_id         (developer exists)
/// PATCH  /{id}            -> update            (developer exists)
/// DELETE /{id}            -> delete            (developer exists)
/// POST   /{id}/infos      -> create_info       (developer exists, no info yet)
/// PATCH  /{id}/infos      -> update_info       (developer exists)
/// GET    /{id}/projects   -> list_projects     (developer exists)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(developer::create).get(developer::list))
        .route(
            "/{id}",
            get(developer::get_by_id)
                .patch(developer::update)
                .delete(developer::delete),
        )
        .route(
            "/{id}/infos",
            post(developer::create_info).patch(developer::update_info),
        )
        .route("/{id}/projects", get(developer::list_projects))
}
