//! Route tree for the API.

pub mod auth;
pub mod cursos;
pub mod dashboard;
pub mod estudiantes;
pub mod health;
pub mod pagos;
pub mod uniformes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /auth/...          login, session echo
/// /estudiantes/...   student CRUD
/// /pagos/...         search, category payments, tuition, graduation
/// /uniformes/...     catalog, sizes, reports
/// /cursos/...        extra courses and monthly payments
/// /dashboard/...     read-only aggregates
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/estudiantes", estudiantes::router())
        .nest("/pagos", pagos::router())
        .nest("/uniformes", uniformes::router())
        .nest("/cursos", cursos::router())
        .nest("/dashboard", dashboard::router())
}
