//! Route definitions for the `/estudiantes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::estudiantes;
use crate::state::AppState;

/// Routes mounted at `/estudiantes`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(estudiantes::list).post(estudiantes::create))
        .route(
            "/{id}",
            get(estudiantes::get_by_id)
                .put(estudiantes::update)
                .delete(estudiantes::delete),
        )
}
