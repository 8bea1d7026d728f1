//! Handlers for graduation payments.
//!
//! Eligibility is decided from the student's grade (see
//! `colegio_core::graduacion`); ineligible students cannot register a
//! payment. The payment row is cumulative: each call adds to the running
//! `paid_amount` instead of creating a new row.

use axum::extract::{Path, State};
use axum::Json;
use chrono::{Datelike, Utc};
use colegio_core::error::CoreError;
use colegio_core::{graduacion, recibo};
use colegio_core::types::DbId;
use colegio_db::models::graduacion::{GuardarGraduacion, PagoGraduacion};
use colegio_db::models::student::Student;
use colegio_db::repositories::{GraduacionRepo, StudentRepo};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::pagos::nombre_metodo;
use crate::state::AppState;

/// Eligibility + current payment, for the fetch endpoint.
#[derive(Debug, Serialize)]
pub struct EstadoGraduacion {
    pub aplica: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mensaje: Option<&'static str>,
    pub pago: Option<PagoGraduacion>,
}

/// Receipt-ready response for a registered graduation payment.
#[derive(Debug, Serialize)]
pub struct RespuestaGraduacion {
    pub pago: PagoGraduacion,
    pub estudiante: Student,
    #[serde(rename = "numeroRecibo")]
    pub numero_recibo: String,
    #[serde(rename = "montoAbonado")]
    pub monto_abonado: Decimal,
    #[serde(rename = "estaCancelado")]
    pub esta_cancelado: bool,
    #[serde(rename = "esAbono")]
    pub es_abono: bool,
    pub metodo_pago: String,
}

fn aplica(estudiante: &Student) -> bool {
    estudiante
        .grado
        .as_deref()
        .is_some_and(graduacion::aplica_graduacion)
}

/// GET /api/pagos/graduacion/{studentId}
pub async fn obtener(
    State(state): State<AppState>,
    Path(student_id): Path<DbId>,
) -> AppResult<Json<EstadoGraduacion>> {
    let estudiante = StudentRepo::find_by_id(&state.pool, student_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Estudiante",
            id: student_id,
        }))?;

    if !aplica(&estudiante) {
        return Ok(Json(EstadoGraduacion {
            aplica: false,
            mensaje: Some("El estudiante no aplica para pago de graduación"),
            pago: None,
        }));
    }

    let pago = GraduacionRepo::find_by_student(&state.pool, student_id).await?;

    Ok(Json(EstadoGraduacion {
        aplica: true,
        mensaje: None,
        pago,
    }))
}

/// POST /api/pagos/graduacion/{studentId}
pub async fn guardar(
    State(state): State<AppState>,
    Path(student_id): Path<DbId>,
    Json(input): Json<GuardarGraduacion>,
) -> AppResult<Json<RespuestaGraduacion>> {
    let estudiante = StudentRepo::find_by_id(&state.pool, student_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Estudiante",
            id: student_id,
        }))?;

    if !aplica(&estudiante) {
        return Err(AppError::Core(CoreError::Validation(
            "El estudiante no aplica para pago de graduación".into(),
        )));
    }

    let metodo_pago = nombre_metodo(&state, input.payment_method_id).await?;

    let existente = GraduacionRepo::find_by_student(&state.pool, student_id).await?;
    let monto_abonado = input.paid_amount.unwrap_or(Decimal::ZERO);

    let (pago, es_abono) = match existente {
        Some(_) => {
            let pago = GraduacionRepo::agregar_abono(
                &state.pool,
                student_id,
                monto_abonado,
                input.payment_method_id,
            )
            .await?;
            (pago, true)
        }
        None => {
            let total = input.total_amount.ok_or_else(|| {
                AppError::Core(CoreError::Validation(
                    "El monto total es requerido".into(),
                ))
            })?;
            let pago = GraduacionRepo::insert(
                &state.pool,
                student_id,
                total,
                monto_abonado,
                input.payment_method_id,
            )
            .await?;
            (pago, false)
        }
    };

    let ahora = Utc::now();
    let numero_recibo = recibo::numero_recibo("GRA", ahora.year(), ahora.timestamp_millis());
    let esta_cancelado = pago.pending_amount == Decimal::ZERO;

    Ok(Json(RespuestaGraduacion {
        pago,
        estudiante,
        numero_recibo,
        monto_abonado,
        esta_cancelado,
        es_abono,
        metodo_pago,
    }))
}
