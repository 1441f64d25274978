//! Route definitions for the `/projects` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// POST   /                          -> create             (body developer exists)
/// GET    /                          -> list
/// GET    /{id}                      -> get_by_id
/// PATCH  /{id}                      -> update             (project exists)
/// DELETE /{id}                      -> delete             (project exists)
/// POST   /{id}/technologies         -> add_technology     (project exists)
/// DELETE /{id}/technologies/{name}  -> remove_technology  (project exists)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(project::create).get(project::list))
        .route(
            "/{id}",
            get(project::get_by_id)
                .patch(project::update)
                .delete(project::delete),
        )
        .route("/{id}/technologies", post(project::add_technology))
        .route(
            "/{id}/technologies/{name}",
            delete(project::remove_technology),
        )
}
