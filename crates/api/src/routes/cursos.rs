//! Route definitions for the `/cursos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::cursos;
use crate::state::AppState;

/// Routes mounted at `/cursos`.
///
/// ```text
/// GET  /cursos-extra                                  -> cursos_extra
/// GET  /estudiantes-cursos                            -> estudiantes_cursos
/// GET  /estudiantes-cursos/buscar                     -> buscar_estudiantes
/// GET  /meses                                         -> meses
/// GET  /pagos-curso/verificar/{estudianteId}/{mesId}  -> verificar_mes
/// GET  /pagos-curso/resumen/{estudianteId}            -> resumen_pagos
/// GET  /pagos-curso/{estudianteId}                    -> pagos_curso
/// POST /pagos-curso                                   -> registrar_pago
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cursos-extra", get(cursos::cursos_extra))
        .route("/estudiantes-cursos", get(cursos::estudiantes_cursos))
        .route(
            "/estudiantes-cursos/buscar",
            get(cursos::buscar_estudiantes),
        )
        .route("/meses", get(cursos::meses))
        .route(
            "/pagos-curso/verificar/{estudiante_id}/{mes_id}",
            get(cursos::verificar_mes),
        )
        .route(
            "/pagos-curso/resumen/{estudiante_id}",
            get(cursos::resumen_pagos),
        )
        .route("/pagos-curso/{estudiante_id}", get(cursos::pagos_curso))
        .route("/pagos-curso", axum::routing::post(cursos::registrar_pago))
}
