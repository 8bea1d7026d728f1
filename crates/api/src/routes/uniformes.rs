//! Route definitions for the `/uniformes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::uniformes;
use crate::state::AppState;

/// Routes mounted at `/uniformes`.
///
/// ```text
/// GET    /buscar                            -> buscar
/// GET    /categorias                        -> categorias
/// GET    /categorias/estudiante/{studentId} -> categoria_estudiante
/// GET    /tallas/{studentId}                -> tallas
/// POST   /tallas/{studentId}                -> guardar_tallas
/// DELETE /tallas/{id}                       -> eliminar_talla
/// GET    /reports                           -> reports
/// GET    /export-excel                      -> export_excel
/// GET    /inventario-tallas                 -> inventario_tallas
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/buscar", get(uniformes::buscar))
        .route("/categorias", get(uniformes::categorias))
        .route(
            "/categorias/estudiante/{student_id}",
            get(uniformes::categoria_estudiante),
        )
        .route(
            "/tallas/{student_id}",
            get(uniformes::tallas)
                .post(uniformes::guardar_tallas)
                .delete(uniformes::eliminar_talla),
        )
        .route("/reports", get(uniformes::reports))
        .route("/export-excel", get(uniformes::export_excel))
        .route("/inventario-tallas", get(uniformes::inventario_tallas))
}
