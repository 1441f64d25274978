pub mod developer;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /developers                                  create, list
/// /developers/{id}                             get, patch, delete
/// /developers/{id}/infos                       create, patch
/// /developers/{id}/projects                    list projects with technologies
///
/// /projects                                    create, list
/// /projects/{id}                               get, patch, delete
/// /projects/{id}/technologies                  link technology (POST)
/// /projects/{id}/technologies/{name}           unlink technology (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/developers", developer::router())
        .nest("/projects", project::router())
}
