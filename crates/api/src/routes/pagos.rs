//! Route definitions for the `/pagos` resource: search, category
//! payments, tuition, graduation.

use axum::routing::get;
use axum::Router;

use crate::handlers::{colegiaturas, graduacion, pagos};
use crate::state::AppState;

/// Routes mounted at `/pagos`.
///
/// ```text
/// GET  /buscar                                  -> buscar
/// GET  /resumen                                 -> resumen
/// GET  /metodos-pago                            -> metodos_pago
///
/// GET  /graduacion/{studentId}                  -> graduacion::obtener
/// POST /graduacion/{studentId}                  -> graduacion::guardar
///
/// GET  /colegiaturas/recibo/{pagoId}            -> colegiaturas::recibo_info
/// GET  /colegiaturas/{studentId}/mes/{mes}      -> colegiaturas::verificar_mes
/// GET  /colegiaturas/{studentId}                -> colegiaturas::historial
/// POST /colegiaturas/{studentId}                -> colegiaturas::registrar
///
/// GET  /estudiante/{studentId}                  -> pagos_estudiante
/// GET  /estudiante/{studentId}/{tipoPago}       -> obtener_pago
/// POST /estudiante/{studentId}/{tipoPago}       -> guardar_pago
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/buscar", get(pagos::buscar))
        .route("/resumen", get(pagos::resumen))
        .route("/metodos-pago", get(pagos::metodos_pago))
        .route(
            "/graduacion/{student_id}",
            get(graduacion::obtener).post(graduacion::guardar),
        )
        .route(
            "/colegiaturas/recibo/{pago_id}",
            get(colegiaturas::recibo_info),
        )
        .route(
            "/colegiaturas/{student_id}/mes/{mes}",
            get(colegiaturas::verificar_mes),
        )
        .route(
            "/colegiaturas/{student_id}",
            get(colegiaturas::historial).post(colegiaturas::registrar),
        )
        .route("/estudiante/{student_id}", get(pagos::pagos_estudiante))
        .route(
            "/estudiante/{student_id}/{tipo_pago}",
            get(pagos::obtener_pago).post(pagos::guardar_pago),
        )
}
