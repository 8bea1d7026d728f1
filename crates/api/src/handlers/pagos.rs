//! Handlers for the general `/pagos` surface: student search, payment
//! methods, the per-student payment map, and the seven single-shot
//! category payments.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{Datelike, Utc};
use colegio_core::error::CoreError;
use colegio_core::pagos::TipoPago;
use colegio_core::recibo;
use colegio_core::types::DbId;
use colegio_db::models::metodo_pago::MetodoPago;
use colegio_db::models::pago_categoria::{GuardarPago, PagoCategoria};
use colegio_db::models::resumen::ResumenPagoEstudiante;
use colegio_db::models::student::{Student, StudentConCurso};
use colegio_db::repositories::{
    DashboardRepo, MetodoPagoRepo, PagoCategoriaRepo, StudentRepo,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query params for `GET /api/pagos/buscar`.
#[derive(Debug, Deserialize)]
pub struct BuscarParams {
    pub nombre: Option<String>,
}

/// Per-student map of all category payments; absent categories are null.
#[derive(Debug, Serialize)]
pub struct PagosEstudiante {
    pub inscripcion: Option<PagoCategoria>,
    pub uniforme: Option<PagoCategoria>,
    pub libros_lectura: Option<PagoCategoria>,
    pub copias_anuales: Option<PagoCategoria>,
    pub libro_ingles: Option<PagoCategoria>,
    pub excursion: Option<PagoCategoria>,
    pub especialidad: Option<PagoCategoria>,
}

/// Receipt-ready response for a saved category payment.
#[derive(Debug, Serialize)]
pub struct RespuestaPago {
    pub pago: PagoCategoria,
    pub estudiante: Student,
    #[serde(rename = "numeroRecibo")]
    pub numero_recibo: String,
    #[serde(rename = "tipoPago")]
    pub tipo_pago: &'static str,
    #[serde(rename = "montoAbonado")]
    pub monto_abonado: Decimal,
    #[serde(rename = "montoPendienteAnterior")]
    pub monto_pendiente_anterior: Decimal,
    #[serde(rename = "estaCancelado")]
    pub esta_cancelado: bool,
    #[serde(rename = "esAbono")]
    pub es_abono: bool,
    pub metodo_pago: String,
}

/// GET /api/pagos/buscar?nombre=
///
/// Requires at least two characters; capped at 10 matches.
pub async fn buscar(
    State(state): State<AppState>,
    Query(params): Query<BuscarParams>,
) -> AppResult<Json<Vec<StudentConCurso>>> {
    let nombre = params.nombre.unwrap_or_default();
    if nombre.trim().len() < 2 {
        return Err(AppError::Core(CoreError::Validation(
            "Ingrese al menos 2 caracteres para buscar".into(),
        )));
    }

    let estudiantes = StudentRepo::search(&state.pool, nombre.trim()).await?;
    Ok(Json(estudiantes))
}

/// GET /api/pagos/metodos-pago
pub async fn metodos_pago(State(state): State<AppState>) -> AppResult<Json<Vec<MetodoPago>>> {
    let metodos = MetodoPagoRepo::list(&state.pool).await?;
    Ok(Json(metodos))
}

/// GET /api/pagos/resumen
pub async fn resumen(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ResumenPagoEstudiante>>> {
    let filas = DashboardRepo::resumen_estudiantes(&state.pool).await?;
    Ok(Json(filas))
}

/// GET /api/pagos/estudiante/{studentId}
pub async fn pagos_estudiante(
    State(state): State<AppState>,
    Path(student_id): Path<DbId>,
) -> AppResult<Json<PagosEstudiante>> {
    let mut pagos = PagosEstudiante {
        inscripcion: None,
        uniforme: None,
        libros_lectura: None,
        copias_anuales: None,
        libro_ingles: None,
        excursion: None,
        especialidad: None,
    };

    for tipo in TipoPago::TODOS {
        let pago = PagoCategoriaRepo::find(&state.pool, tipo, student_id).await?;
        match tipo {
            TipoPago::Inscripcion => pagos.inscripcion = pago,
            TipoPago::Uniforme => pagos.uniforme = pago,
            TipoPago::LibrosLectura => pagos.libros_lectura = pago,
            TipoPago::CopiasAnuales => pagos.copias_anuales = pago,
            TipoPago::LibroIngles => pagos.libro_ingles = pago,
            TipoPago::Excursion => pagos.excursion = pago,
            TipoPago::Especialidad => pagos.especialidad = pago,
        }
    }

    Ok(Json(pagos))
}

/// GET /api/pagos/estudiante/{studentId}/{tipoPago}
pub async fn obtener_pago(
    State(state): State<AppState>,
    Path((student_id, tipo_pago)): Path<(DbId, String)>,
) -> AppResult<Json<Option<PagoCategoria>>> {
    let tipo = parse_tipo(&tipo_pago)?;
    let pago = PagoCategoriaRepo::find(&state.pool, tipo, student_id).await?;
    Ok(Json(pago))
}

/// POST /api/pagos/estudiante/{studentId}/{tipoPago}
///
/// Creates the payment if absent; otherwise either adds an abono against
/// the outstanding balance (`es_pago_pendiente`) or replaces the amounts.
pub async fn guardar_pago(
    State(state): State<AppState>,
    Path((student_id, tipo_pago)): Path<(DbId, String)>,
    Json(input): Json<GuardarPago>,
) -> AppResult<Json<RespuestaPago>> {
    let tipo = parse_tipo(&tipo_pago)?;

    let estudiante = StudentRepo::find_by_id(&state.pool, student_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Estudiante",
            id: student_id,
        }))?;

    let metodo_pago = nombre_metodo(&state, input.payment_method_id).await?;

    let existente = PagoCategoriaRepo::find(&state.pool, tipo, student_id).await?;

    let monto_abonado = input.monto_abono.unwrap_or(input.monto_total);
    let monto_pendiente_anterior = existente
        .as_ref()
        .map(|p| p.monto_pendiente)
        .unwrap_or(Decimal::ZERO);

    let (pago, es_abono) = match existente {
        Some(_) if input.es_pago_pendiente && monto_pendiente_anterior > Decimal::ZERO => {
            let pago = PagoCategoriaRepo::agregar_abono(
                &state.pool,
                tipo,
                student_id,
                monto_abonado,
                input.payment_method_id,
            )
            .await?;
            (pago, true)
        }
        Some(_) => {
            let pago = PagoCategoriaRepo::update_montos(
                &state.pool,
                tipo,
                student_id,
                input.monto_total,
                input.monto_abono.unwrap_or(Decimal::ZERO),
                input.payment_method_id,
            )
            .await?;
            (pago, false)
        }
        None => {
            let pago = PagoCategoriaRepo::insert(
                &state.pool,
                tipo,
                student_id,
                input.monto_total,
                input.monto_abono.unwrap_or(Decimal::ZERO),
                input.payment_method_id,
            )
            .await?;
            (pago, false)
        }
    };

    let ahora = Utc::now();
    let numero_recibo = recibo::numero_recibo(
        &recibo::prefijo_tipo(tipo.slug()),
        ahora.year(),
        ahora.timestamp_millis(),
    );

    let esta_cancelado = pago.monto_pendiente == Decimal::ZERO;

    Ok(Json(RespuestaPago {
        pago,
        estudiante,
        numero_recibo,
        tipo_pago: tipo.nombre(),
        monto_abonado,
        monto_pendiente_anterior,
        esta_cancelado,
        es_abono,
        metodo_pago,
    }))
}

fn parse_tipo(slug: &str) -> AppResult<TipoPago> {
    TipoPago::from_slug(slug).ok_or_else(|| {
        AppError::Core(CoreError::Validation("Tipo de pago no válido".into()))
    })
}

/// Display name of a payment method, `"N/A"` when absent or unknown.
pub(crate) async fn nombre_metodo(
    state: &AppState,
    payment_method_id: Option<DbId>,
) -> AppResult<String> {
    let nombre = match payment_method_id {
        Some(id) => MetodoPagoRepo::find_name(&state.pool, id).await?,
        None => None,
    };
    Ok(nombre.unwrap_or_else(|| "N/A".to_string()))
}
