//! Handlers for monthly tuition ("colegiaturas") payments.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{Datelike, Utc};
use colegio_core::error::CoreError;
use colegio_core::{mora, recibo};
use colegio_core::types::DbId;
use colegio_db::models::colegiatura::{Colegiatura, RegistrarColegiatura};
use colegio_db::models::student::Student;
use colegio_db::repositories::{ColegiaturaRepo, StudentRepo};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::pagos::nombre_metodo;
use crate::state::AppState;

/// Month-paid check response.
#[derive(Debug, Serialize)]
pub struct MesPagado {
    pub pagado: bool,
    pub pago: Option<Colegiatura>,
}

/// Receipt-ready response for a registered tuition payment.
#[derive(Debug, Serialize)]
pub struct RespuestaColegiatura {
    pub pago: Colegiatura,
    pub estudiante: Student,
    #[serde(rename = "numeroBoleto")]
    pub numero_boleto: String,
    pub mora: Decimal,
    pub total: Decimal,
    pub metodo_pago: String,
}

/// Receipt lookup response.
#[derive(Debug, Serialize)]
pub struct InfoRecibo {
    pub pago: Colegiatura,
    pub estudiante: Student,
    #[serde(rename = "numeroBoleto")]
    pub numero_boleto: String,
}

/// GET /api/pagos/colegiaturas/{studentId}
///
/// Current-year history, oldest payment first.
pub async fn historial(
    State(state): State<AppState>,
    Path(student_id): Path<DbId>,
) -> AppResult<Json<Vec<Colegiatura>>> {
    let anio = Utc::now().year();
    let pagos = ColegiaturaRepo::list_by_student_year(&state.pool, student_id, anio).await?;
    Ok(Json(pagos))
}

/// GET /api/pagos/colegiaturas/{studentId}/mes/{mes}
pub async fn verificar_mes(
    State(state): State<AppState>,
    Path((student_id, mes)): Path<(DbId, String)>,
) -> AppResult<Json<MesPagado>> {
    let anio = Utc::now().year();
    let pago =
        ColegiaturaRepo::find_by_mes(&state.pool, student_id, &mes.to_uppercase(), anio).await?;
    Ok(Json(MesPagado {
        pagado: pago.is_some(),
        pago,
    }))
}

/// POST /api/pagos/colegiaturas/{studentId}
///
/// Registers the (student, month, current year) payment. The late fee is
/// computed here, stored with the row, and never recomputed.
pub async fn registrar(
    State(state): State<AppState>,
    Path(student_id): Path<DbId>,
    Json(input): Json<RegistrarColegiatura>,
) -> AppResult<(StatusCode, Json<RespuestaColegiatura>)> {
    let ahora = Utc::now();
    let anio = ahora.year();
    let mes = input.mes.trim().to_uppercase();

    if mes.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "El mes es requerido".into(),
        )));
    }

    let existente = ColegiaturaRepo::find_by_mes(&state.pool, student_id, &mes, anio).await?;
    if existente.is_some() {
        return Err(AppError::Core(CoreError::Validation(
            "Este mes ya fue pagado".into(),
        )));
    }

    let estudiante = StudentRepo::find_by_id(&state.pool, student_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Estudiante",
            id: student_id,
        }))?;

    let metodo_pago = nombre_metodo(&state, input.payment_method_id).await?;

    let mora = mora::calcular_mora_por_nombre(&mes, ahora.date_naive());

    let pago = ColegiaturaRepo::insert(
        &state.pool,
        student_id,
        &mes,
        anio,
        input.monto_colegiatura,
        mora,
        input.payment_method_id,
    )
    .await?;

    let numero_boleto = recibo::numero_recibo("COL", anio, ahora.timestamp_millis());
    let total = pago.total_pagado;

    Ok((
        StatusCode::CREATED,
        Json(RespuestaColegiatura {
            pago,
            estudiante,
            numero_boleto,
            mora,
            total,
            metodo_pago,
        }),
    ))
}

/// GET /api/pagos/colegiaturas/recibo/{pagoId}
///
/// Reconstructs the receipt number from the stored creation timestamp.
pub async fn recibo_info(
    State(state): State<AppState>,
    Path(pago_id): Path<DbId>,
) -> AppResult<Json<InfoRecibo>> {
    let pago = ColegiaturaRepo::find_by_id(&state.pool, pago_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Pago",
            id: pago_id,
        }))?;

    let estudiante = StudentRepo::find_by_id(&state.pool, pago.student_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Estudiante",
            id: pago.student_id,
        }))?;

    let numero_boleto =
        recibo::numero_recibo("COL", pago.anio, pago.created_at.timestamp_millis());

    Ok(Json(InfoRecibo {
        pago,
        estudiante,
        numero_boleto,
    }))
}
