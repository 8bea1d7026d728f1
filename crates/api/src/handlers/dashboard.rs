//! Handlers for the read-only dashboard aggregates.
//!
//! Every cross-category endpoint iterates the declarative source list in
//! [`colegio_core::pagos::FUENTES_INGRESO`] and reduces in memory via
//! `colegio_core::reportes`. A source whose query fails is logged and
//! contributes nothing; the endpoint still answers with the rest summed.

use std::collections::BTreeMap;

use axum::extract::{Query, State};
use axum::Json;
use chrono::{Datelike, NaiveDate, Utc};
use colegio_core::pagos::{FuenteIngreso, FUENTES_INGRESO, TABLAS_CON_MORA};
use colegio_core::reportes::{self, IngresoDia, IngresoMes};
use colegio_core::types::Timestamp;
use colegio_db::models::curso::CursoExtra;
use colegio_db::models::resumen::{DetallePago, PagoPendiente, ResumenPagoEstudiante};
use colegio_db::repositories::{CursoRepo, DashboardRepo, MetodoPagoRepo, StudentRepo};
use colegio_db::DbPool;
use futures::future::join_all;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::state::AppState;

/// Inclusive `created_at` date range accepted by most aggregates.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RangoParams {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl RangoParams {
    fn rango(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        (self.start, self.end)
    }
}

type Rango = (Option<NaiveDate>, Option<NaiveDate>);

const SIN_RANGO: Rango = (None, None);

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct IngresoTipo {
    pub tipo_pago: &'static str,
    pub total_ingresos: Decimal,
}

#[derive(Debug, Serialize)]
pub struct IngresoMetodo {
    pub metodo_pago: String,
    pub total_ingresos: Decimal,
}

#[derive(Debug, Serialize)]
pub struct EstudiantesTipo {
    pub tipo_estudiante: String,
    pub total: i64,
}

#[derive(Debug, Serialize)]
pub struct TotalMora {
    pub total_mora: Decimal,
}

/// Everything the dashboard landing page shows, fetched in one request.
#[derive(Debug, Serialize)]
pub struct DashboardData {
    #[serde(rename = "incomeByDay")]
    pub income_by_day: Vec<IngresoDia>,
    #[serde(rename = "incomeByMonth")]
    pub income_by_month: Vec<IngresoMes>,
    #[serde(rename = "incomeByType")]
    pub income_by_type: Vec<IngresoTipo>,
    #[serde(rename = "studentsByType")]
    pub students_by_type: Vec<EstudiantesTipo>,
    #[serde(rename = "pendingPayments")]
    pub pending_payments: Vec<PagoPendiente>,
    #[serde(rename = "totalMora")]
    pub total_mora: Decimal,
    #[serde(rename = "incomeByPaymentMethod")]
    pub income_by_payment_method: Vec<IngresoMetodo>,
    /// All-time total; deliberately ignores the date range.
    #[serde(rename = "monthlyIncome")]
    pub monthly_income: Decimal,
    #[serde(rename = "dailyIncome")]
    pub daily_income: Decimal,
}

// ---------------------------------------------------------------------------
// Soft-failing source helpers
// ---------------------------------------------------------------------------

/// `(created_at, amount)` rows of one source; a failing source is logged
/// and contributes an empty set.
async fn filas_fuente(pool: &DbPool, fuente: &FuenteIngreso, rango: Rango) -> Vec<(Timestamp, Decimal)> {
    match DashboardRepo::ingresos_fuente(pool, fuente, rango).await {
        Ok(filas) => filas,
        Err(err) => {
            tracing::warn!(tabla = fuente.tabla, error = %err, "Fuente de ingresos omitida");
            Vec::new()
        }
    }
}

/// Rows of every source concatenated.
async fn filas_todas_las_fuentes(pool: &DbPool, rango: Rango) -> Vec<(Timestamp, Decimal)> {
    let consultas = FUENTES_INGRESO.iter().map(|f| filas_fuente(pool, f, rango));
    join_all(consultas).await.into_iter().flatten().collect()
}

async fn income_by_day_data(pool: &DbPool, rango: Rango) -> Vec<IngresoDia> {
    reportes::ingresos_por_dia(filas_todas_las_fuentes(pool, rango).await)
}

async fn income_by_month_data(pool: &DbPool, rango: Rango) -> Vec<IngresoMes> {
    reportes::ingresos_por_mes(filas_todas_las_fuentes(pool, rango).await)
}

async fn income_by_type_data(pool: &DbPool, rango: Rango) -> Vec<IngresoTipo> {
    let consultas = FUENTES_INGRESO.iter().map(|fuente| async move {
        let total: Decimal = filas_fuente(pool, fuente, rango)
            .await
            .into_iter()
            .map(|(_, monto)| monto)
            .sum();
        IngresoTipo {
            tipo_pago: fuente.etiqueta,
            total_ingresos: total,
        }
    });

    let mut tipos: Vec<IngresoTipo> = join_all(consultas)
        .await
        .into_iter()
        .filter(|t| t.total_ingresos > Decimal::ZERO)
        .collect();
    tipos.sort_by(|a, b| b.total_ingresos.cmp(&a.total_ingresos));
    tipos
}

async fn total_ingresos_data(pool: &DbPool, rango: Rango) -> Decimal {
    filas_todas_las_fuentes(pool, rango)
        .await
        .into_iter()
        .map(|(_, monto)| monto)
        .sum()
}

async fn total_mora_data(pool: &DbPool, rango: Rango) -> Decimal {
    let consultas = TABLAS_CON_MORA.iter().map(|&tabla| async move {
        match DashboardRepo::total_mora_tabla(pool, tabla, rango).await {
            Ok(total) => total,
            Err(err) => {
                tracing::warn!(tabla, error = %err, "Tabla sin mora omitida");
                Decimal::ZERO
            }
        }
    });
    join_all(consultas).await.into_iter().sum()
}

/// Top 10 outstanding rows across category tables and graduation.
async fn pending_payments_data(pool: &DbPool, rango: Rango) -> Vec<PagoPendiente> {
    let mut fuentes: Vec<(&'static str, &'static str, &'static str)> = colegio_core::pagos::TipoPago::TODOS
        .iter()
        .map(|t| (t.tabla(), "monto_pendiente", t.etiqueta()))
        .collect();
    fuentes.push(("graduation_payments", "pending_amount", "GRADUACIÓN"));

    let consultas = fuentes.into_iter().map(|(tabla, columna, etiqueta)| async move {
        match DashboardRepo::pendientes_tabla(pool, tabla, columna, rango).await {
            Ok(filas) => filas
                .into_iter()
                .map(|(estudiante, monto)| PagoPendiente {
                    estudiante,
                    tipo_pago: etiqueta.to_string(),
                    monto_pendiente: monto,
                })
                .collect(),
            Err(err) => {
                tracing::warn!(tabla, error = %err, "Tabla de pendientes omitida");
                Vec::new()
            }
        }
    });

    let mut pendientes: Vec<PagoPendiente> =
        join_all(consultas).await.into_iter().flatten().collect();
    pendientes.sort_by(|a, b| b.monto_pendiente.cmp(&a.monto_pendiente));
    pendientes.truncate(10);
    pendientes
}

async fn income_by_method_data(pool: &DbPool, rango: Rango) -> Vec<IngresoMetodo> {
    let metodos = match MetodoPagoRepo::list(pool).await {
        Ok(metodos) => metodos,
        Err(err) => {
            tracing::warn!(error = %err, "No se pudieron listar los métodos de pago");
            return Vec::new();
        }
    };

    let consultas = metodos.into_iter().map(|metodo| async move {
        let metodo_id = metodo.id;
        let por_fuente = FUENTES_INGRESO.iter().map(|fuente| async move {
            match DashboardRepo::ingresos_fuente_por_metodo(pool, fuente, metodo_id, rango).await {
                Ok(total) => total,
                Err(err) => {
                    tracing::warn!(tabla = fuente.tabla, error = %err, "Fuente omitida por método");
                    Decimal::ZERO
                }
            }
        });
        let total: Decimal = join_all(por_fuente).await.into_iter().sum();
        IngresoMetodo {
            metodo_pago: metodo.name,
            total_ingresos: total,
        }
    });

    let mut resultado: Vec<IngresoMetodo> = join_all(consultas)
        .await
        .into_iter()
        .filter(|m| m.total_ingresos > Decimal::ZERO)
        .collect();
    resultado.sort_by(|a, b| b.total_ingresos.cmp(&a.total_ingresos));
    resultado
}

async fn students_by_type_data(pool: &DbPool) -> Vec<EstudiantesTipo> {
    match DashboardRepo::estudiantes_por_tipo(pool).await {
        Ok(filas) => filas
            .into_iter()
            .map(|(tipo_estudiante, total)| EstudiantesTipo {
                tipo_estudiante,
                total,
            })
            .collect(),
        Err(err) => {
            tracing::warn!(error = %err, "No se pudieron contar estudiantes por tipo");
            Vec::new()
        }
    }
}

// ---------------------------------------------------------------------------
// Landing page
// ---------------------------------------------------------------------------

/// GET /api/dashboard
///
/// Issues every widget's sub-queries concurrently and joins them.
pub async fn dashboard(
    State(state): State<AppState>,
    Query(params): Query<RangoParams>,
) -> AppResult<Json<DashboardData>> {
    let pool = &state.pool;
    let rango = params.rango();
    let hoy = Utc::now().date_naive();

    let (
        income_by_day,
        income_by_month,
        income_by_type,
        students_by_type,
        pending_payments,
        total_mora,
        income_by_payment_method,
        monthly_income,
        daily_income,
    ) = tokio::join!(
        income_by_day_data(pool, rango),
        income_by_month_data(pool, rango),
        income_by_type_data(pool, rango),
        students_by_type_data(pool),
        pending_payments_data(pool, rango),
        total_mora_data(pool, rango),
        income_by_method_data(pool, rango),
        // Total histórico: ignora el rango a propósito.
        total_ingresos_data(pool, SIN_RANGO),
        total_ingresos_data(pool, (Some(hoy), Some(hoy))),
    );

    Ok(Json(DashboardData {
        income_by_day,
        income_by_month,
        income_by_type,
        students_by_type,
        pending_payments,
        total_mora,
        income_by_payment_method,
        monthly_income,
        daily_income,
    }))
}

// ---------------------------------------------------------------------------
// Individual widget endpoints
// ---------------------------------------------------------------------------

/// GET /api/dashboard/income-by-day
pub async fn income_by_day(
    State(state): State<AppState>,
    Query(params): Query<RangoParams>,
) -> AppResult<Json<Vec<IngresoDia>>> {
    Ok(Json(income_by_day_data(&state.pool, params.rango()).await))
}

/// GET /api/dashboard/income-by-month
pub async fn income_by_month(
    State(state): State<AppState>,
    Query(params): Query<RangoParams>,
) -> AppResult<Json<Vec<IngresoMes>>> {
    Ok(Json(income_by_month_data(&state.pool, params.rango()).await))
}

/// GET /api/dashboard/income-by-type
pub async fn income_by_type(
    State(state): State<AppState>,
    Query(params): Query<RangoParams>,
) -> AppResult<Json<Vec<IngresoTipo>>> {
    Ok(Json(income_by_type_data(&state.pool, params.rango()).await))
}

/// GET /api/dashboard/students-by-type
pub async fn students_by_type(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<EstudiantesTipo>>> {
    Ok(Json(students_by_type_data(&state.pool).await))
}

/// GET /api/dashboard/pending-payments
pub async fn pending_payments(
    State(state): State<AppState>,
    Query(params): Query<RangoParams>,
) -> AppResult<Json<Vec<PagoPendiente>>> {
    Ok(Json(pending_payments_data(&state.pool, params.rango()).await))
}

/// GET /api/dashboard/total-mora
pub async fn total_mora(
    State(state): State<AppState>,
    Query(params): Query<RangoParams>,
) -> AppResult<Json<TotalMora>> {
    Ok(Json(TotalMora {
        total_mora: total_mora_data(&state.pool, params.rango()).await,
    }))
}

/// GET /api/dashboard/income-by-payment-method
pub async fn income_by_payment_method(
    State(state): State<AppState>,
    Query(params): Query<RangoParams>,
) -> AppResult<Json<Vec<IngresoMetodo>>> {
    Ok(Json(income_by_method_data(&state.pool, params.rango()).await))
}

// ---------------------------------------------------------------------------
// Ingresos
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct IngresosDia {
    pub total: Decimal,
    pub fecha: String,
    pub data: Vec<IngresoDia>,
}

/// GET /api/dashboard/ingresos/dia
///
/// Today's total plus the last ten days.
pub async fn ingresos_dia(State(state): State<AppState>) -> AppResult<Json<IngresosDia>> {
    let data = income_by_day_data(&state.pool, SIN_RANGO).await;
    let hoy = Utc::now().date_naive().format("%Y-%m-%d").to_string();

    let total = data
        .iter()
        .find(|d| d.dia == hoy)
        .map(|d| d.total_ingresos)
        .unwrap_or(Decimal::ZERO);

    Ok(Json(IngresosDia {
        total,
        fecha: hoy,
        data: data.into_iter().take(10).collect(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct RangoFechasParams {
    #[serde(rename = "fechaInicio")]
    pub fecha_inicio: NaiveDate,
    #[serde(rename = "fechaFin")]
    pub fecha_fin: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct IngresosRango {
    pub total: Decimal,
    #[serde(rename = "fechaInicio")]
    pub fecha_inicio: NaiveDate,
    #[serde(rename = "fechaFin")]
    pub fecha_fin: NaiveDate,
}

/// GET /api/dashboard/ingresos/rango?fechaInicio=&fechaFin=
pub async fn ingresos_rango(
    State(state): State<AppState>,
    Query(params): Query<RangoFechasParams>,
) -> AppResult<Json<IngresosRango>> {
    let total =
        DashboardRepo::ingresos_rango(&state.pool, params.fecha_inicio, params.fecha_fin).await?;
    Ok(Json(IngresosRango {
        total,
        fecha_inicio: params.fecha_inicio,
        fecha_fin: params.fecha_fin,
    }))
}

#[derive(Debug, Deserialize)]
pub struct MesParams {
    pub mes: String,
    pub anio: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct IngresosMesTotal {
    pub total: Decimal,
    pub mes: String,
    pub anio: i32,
}

/// GET /api/dashboard/ingresos/mes?mes=&anio=
pub async fn ingresos_mes(
    State(state): State<AppState>,
    Query(params): Query<MesParams>,
) -> AppResult<Json<IngresosMesTotal>> {
    let anio = params.anio.unwrap_or_else(|| Utc::now().year());
    let mes = params.mes.to_uppercase();
    let total = DashboardRepo::ingresos_mes_colegiaturas(&state.pool, &mes, anio).await?;
    Ok(Json(IngresosMesTotal { total, mes, anio }))
}

#[derive(Debug, Serialize)]
pub struct TotalSimple {
    pub total: Decimal,
}

/// GET /api/dashboard/ingresos/historico
pub async fn ingresos_historico(State(state): State<AppState>) -> AppResult<Json<TotalSimple>> {
    Ok(Json(TotalSimple {
        total: total_ingresos_data(&state.pool, SIN_RANGO).await,
    }))
}

// ---------------------------------------------------------------------------
// Pendientes
// ---------------------------------------------------------------------------

/// GET /api/dashboard/pendientes/total
pub async fn pendientes_total(State(state): State<AppState>) -> AppResult<Json<TotalSimple>> {
    let total = DashboardRepo::total_pendiente(&state.pool).await?;
    Ok(Json(TotalSimple { total }))
}

/// GET /api/dashboard/pendientes/estudiantes
pub async fn pendientes_estudiantes(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ResumenPagoEstudiante>>> {
    let filas = DashboardRepo::estudiantes_con_pendientes(&state.pool, None).await?;
    Ok(Json(filas))
}

#[derive(Debug, Deserialize)]
pub struct LimiteParams {
    pub limite: Option<i64>,
}

/// GET /api/dashboard/pendientes/top-deudores?limite=
pub async fn top_deudores(
    State(state): State<AppState>,
    Query(params): Query<LimiteParams>,
) -> AppResult<Json<Vec<ResumenPagoEstudiante>>> {
    let limite = params.limite.unwrap_or(10);
    let filas = DashboardRepo::estudiantes_con_pendientes(&state.pool, Some(limite)).await?;
    Ok(Json(filas))
}

// ---------------------------------------------------------------------------
// Estadísticas
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct EstadisticasEstudiantes {
    pub total: usize,
    pub activos: usize,
    pub inactivos: usize,
    pub regular: usize,
    pub curso: usize,
    #[serde(rename = "porJornada")]
    pub por_jornada: BTreeMap<String, i64>,
    #[serde(rename = "porModalidad")]
    pub por_modalidad: BTreeMap<String, i64>,
}

/// GET /api/dashboard/estudiantes/estadisticas
pub async fn estadisticas_estudiantes(
    State(state): State<AppState>,
) -> AppResult<Json<EstadisticasEstudiantes>> {
    let estudiantes = StudentRepo::list_clasificacion(&state.pool).await?;

    // Estado NULL cuenta como activo.
    let activos = estudiantes
        .iter()
        .filter(|e| e.estado.as_deref().map_or(true, |s| s == "ACTIVO"))
        .count();
    let inactivos = estudiantes
        .iter()
        .filter(|e| e.estado.as_deref() == Some("INACTIVO"))
        .count();
    let regular = estudiantes
        .iter()
        .filter(|e| e.tipo_estudiante == "REGULAR")
        .count();
    let curso = estudiantes
        .iter()
        .filter(|e| e.tipo_estudiante == "CURSO")
        .count();

    let mut por_jornada: BTreeMap<String, i64> = BTreeMap::new();
    let mut por_modalidad: BTreeMap<String, i64> = BTreeMap::new();
    for estudiante in &estudiantes {
        let jornada = estudiante
            .jornada
            .clone()
            .unwrap_or_else(|| "Sin definir".to_string());
        *por_jornada.entry(jornada).or_default() += 1;

        let modalidad = estudiante
            .modalidad
            .clone()
            .unwrap_or_else(|| "Sin definir".to_string());
        *por_modalidad.entry(modalidad).or_default() += 1;
    }

    Ok(Json(EstadisticasEstudiantes {
        total: estudiantes.len(),
        activos,
        inactivos,
        regular,
        curso,
        por_jornada,
        por_modalidad,
    }))
}

#[derive(Debug, Serialize)]
pub struct CursoConInscritos {
    #[serde(flatten)]
    pub curso: CursoExtra,
    pub inscritos: i64,
}

#[derive(Debug, Serialize)]
pub struct EstadisticasCursos {
    #[serde(rename = "totalCursos")]
    pub total_cursos: usize,
    #[serde(rename = "totalInscritos")]
    pub total_inscritos: i64,
    pub cursos: Vec<CursoConInscritos>,
}

/// GET /api/dashboard/cursos/estadisticas
pub async fn estadisticas_cursos(
    State(state): State<AppState>,
) -> AppResult<Json<EstadisticasCursos>> {
    let cursos = CursoRepo::list_inscritos(&state.pool).await?;

    let total_inscritos = cursos.iter().map(|(_, inscritos)| inscritos).sum();
    let cursos: Vec<CursoConInscritos> = cursos
        .into_iter()
        .map(|(curso, inscritos)| CursoConInscritos { curso, inscritos })
        .collect();

    Ok(Json(EstadisticasCursos {
        total_cursos: cursos.len(),
        total_inscritos,
        cursos,
    }))
}

// ---------------------------------------------------------------------------
// Resumen general
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ResumenEstudiantes {
    pub total: usize,
    pub activos: usize,
    pub regular: usize,
    pub curso: usize,
}

#[derive(Debug, Serialize)]
pub struct ResumenCursos {
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct ResumenFinanzas {
    #[serde(rename = "totalIngresos")]
    pub total_ingresos: Decimal,
    #[serde(rename = "totalPendiente")]
    pub total_pendiente: Decimal,
    #[serde(rename = "estudiantesConDeuda")]
    pub estudiantes_con_deuda: usize,
}

#[derive(Debug, Serialize)]
pub struct ResumenDashboard {
    pub estudiantes: ResumenEstudiantes,
    pub cursos: ResumenCursos,
    pub finanzas: ResumenFinanzas,
}

/// GET /api/dashboard/resumen
pub async fn resumen(State(state): State<AppState>) -> AppResult<Json<ResumenDashboard>> {
    let estudiantes = StudentRepo::list_clasificacion(&state.pool).await?;
    let cursos = CursoRepo::list(&state.pool).await?;
    let pagos = DashboardRepo::resumen_estudiantes(&state.pool).await?;

    let activos = estudiantes
        .iter()
        .filter(|e| e.estado.as_deref().map_or(true, |s| s == "ACTIVO"))
        .count();
    let regular = estudiantes
        .iter()
        .filter(|e| e.tipo_estudiante == "REGULAR")
        .count();
    let curso = estudiantes
        .iter()
        .filter(|e| e.tipo_estudiante == "CURSO")
        .count();

    let total_ingresos: Decimal = pagos.iter().map(|p| p.total_pagado).sum();
    let total_pendiente: Decimal = pagos.iter().map(|p| p.total_pendiente).sum();
    let estudiantes_con_deuda = pagos
        .iter()
        .filter(|p| p.total_pendiente > Decimal::ZERO)
        .count();

    Ok(Json(ResumenDashboard {
        estudiantes: ResumenEstudiantes {
            total: estudiantes.len(),
            activos,
            regular,
            curso,
        },
        cursos: ResumenCursos {
            total: cursos.len(),
        },
        finanzas: ResumenFinanzas {
            total_ingresos,
            total_pendiente,
            estudiantes_con_deuda,
        },
    }))
}

// ---------------------------------------------------------------------------
// Detailed report
// ---------------------------------------------------------------------------

/// JSON keys for each source's detail list, in [`FUENTES_INGRESO`] order.
const CLAVES_DETALLE: [&str; 10] = [
    "colegiaturas",
    "inscripciones",
    "uniformes",
    "libros_lectura",
    "copias_anuales",
    "libro_ingles",
    "excursion",
    "especialidad",
    "graduaciones",
    "cursos_extra",
];

#[derive(Debug, Serialize)]
pub struct ResumenTipo {
    pub tipo_pago: &'static str,
    pub cantidad_pagos: usize,
    pub total_ingresos: Decimal,
}

#[derive(Debug, Serialize)]
pub struct ReporteDetallado {
    pub summary: Vec<ResumenTipo>,
    #[serde(rename = "totalGeneral")]
    pub total_general: Decimal,
    pub details: BTreeMap<&'static str, Vec<DetallePago>>,
}

/// GET /api/dashboard/detailed-report?start=&end=
pub async fn detailed_report(
    State(state): State<AppState>,
    Query(params): Query<RangoParams>,
) -> AppResult<Json<ReporteDetallado>> {
    let pool = &state.pool;
    let rango = params.rango();

    let consultas = FUENTES_INGRESO.iter().map(|fuente| async move {
        match DashboardRepo::detalle_fuente(pool, fuente, rango).await {
            Ok(filas) => filas,
            Err(err) => {
                tracing::warn!(tabla = fuente.tabla, error = %err, "Detalle de fuente omitido");
                Vec::new()
            }
        }
    });
    let detalles = join_all(consultas).await;

    let mut summary = Vec::with_capacity(FUENTES_INGRESO.len());
    let mut details: BTreeMap<&'static str, Vec<DetallePago>> = BTreeMap::new();
    let mut total_general = Decimal::ZERO;

    for ((fuente, clave), filas) in FUENTES_INGRESO
        .iter()
        .zip(CLAVES_DETALLE)
        .zip(detalles)
    {
        let total: Decimal = filas.iter().map(|f| f.monto).sum();
        total_general += total;
        summary.push(ResumenTipo {
            tipo_pago: fuente.etiqueta,
            cantidad_pagos: filas.len(),
            total_ingresos: total,
        });
        details.insert(clave, filas);
    }

    Ok(Json(ReporteDetallado {
        summary,
        total_general,
        details,
    }))
}
