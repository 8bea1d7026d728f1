//! Route definitions for the read-only `/dashboard` aggregates.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
///
/// ```text
/// GET /                          -> dashboard (all widgets at once)
/// GET /income-by-day             -> income_by_day
/// GET /income-by-month           -> income_by_month
/// GET /income-by-type            -> income_by_type
/// GET /students-by-type          -> students_by_type
/// GET /pending-payments          -> pending_payments
/// GET /total-mora                -> total_mora
/// GET /income-by-payment-method  -> income_by_payment_method
/// GET /detailed-report           -> detailed_report
/// GET /resumen                   -> resumen
/// GET /ingresos/dia              -> ingresos_dia
/// GET /ingresos/rango            -> ingresos_rango
/// GET /ingresos/mes              -> ingresos_mes
/// GET /ingresos/historico        -> ingresos_historico
/// GET /pendientes/total          -> pendientes_total
/// GET /pendientes/estudiantes    -> pendientes_estudiantes
/// GET /pendientes/top-deudores   -> top_deudores
/// GET /estudiantes/estadisticas  -> estadisticas_estudiantes
/// GET /cursos/estadisticas       -> estadisticas_cursos
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::dashboard))
        .route("/income-by-day", get(dashboard::income_by_day))
        .route("/income-by-month", get(dashboard::income_by_month))
        .route("/income-by-type", get(dashboard::income_by_type))
        .route("/students-by-type", get(dashboard::students_by_type))
        .route("/pending-payments", get(dashboard::pending_payments))
        .route("/total-mora", get(dashboard::total_mora))
        .route(
            "/income-by-payment-method",
            get(dashboard::income_by_payment_method),
        )
        .route("/detailed-report", get(dashboard::detailed_report))
        .route("/resumen", get(dashboard::resumen))
        .route("/ingresos/dia", get(dashboard::ingresos_dia))
        .route("/ingresos/rango", get(dashboard::ingresos_rango))
        .route("/ingresos/mes", get(dashboard::ingresos_mes))
        .route("/ingresos/historico", get(dashboard::ingresos_historico))
        .route("/pendientes/total", get(dashboard::pendientes_total))
        .route(
            "/pendientes/estudiantes",
            get(dashboard::pendientes_estudiantes),
        )
        .route("/pendientes/top-deudores", get(dashboard::top_deudores))
        .route(
            "/estudiantes/estadisticas",
            get(dashboard::estadisticas_estudiantes),
        )
        .route("/cursos/estadisticas", get(dashboard::estadisticas_cursos))
}
