//! Handlers for extra courses and their monthly payments.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{Datelike, Utc};
use colegio_core::error::CoreError;
use colegio_core::{mora, recibo};
use colegio_core::types::DbId;
use colegio_db::models::curso::{
    CursoExtra, PagoCurso, RegistrarPagoCurso, ResumenPagosCurso,
};
use colegio_db::models::mes::Mes;
use colegio_db::models::student::StudentConCurso;
use colegio_db::repositories::{CursoRepo, MesRepo, StudentRepo};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::handlers::pagos::nombre_metodo;
use crate::response::{DataResponse, ListResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BuscarParams {
    pub nombre: Option<String>,
}

/// Month-paid check response.
#[derive(Debug, Serialize)]
pub struct MesPagadoCurso {
    pub pagado: bool,
    pub pago: Option<PagoCurso>,
}

/// Receipt-ready response for a registered course payment.
#[derive(Debug, Serialize)]
pub struct RespuestaPagoCurso {
    #[serde(flatten)]
    pub pago: PagoCurso,
    pub numero_recibo: String,
    pub monto: Decimal,
    pub mora: Decimal,
    pub metodo_pago: String,
}

/// GET /api/cursos/cursos-extra
pub async fn cursos_extra(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<CursoExtra>>>> {
    let cursos = CursoRepo::list(&state.pool).await?;
    Ok(Json(DataResponse::new(cursos)))
}

/// GET /api/cursos/estudiantes-cursos
pub async fn estudiantes_cursos(
    State(state): State<AppState>,
) -> AppResult<Json<ListResponse<StudentConCurso>>> {
    let estudiantes = StudentRepo::list_cursos(&state.pool).await?;
    Ok(Json(ListResponse::new(estudiantes)))
}

/// GET /api/cursos/estudiantes-cursos/buscar?nombre=
pub async fn buscar_estudiantes(
    State(state): State<AppState>,
    Query(params): Query<BuscarParams>,
) -> AppResult<Json<Vec<StudentConCurso>>> {
    let nombre = params.nombre.unwrap_or_default();
    if nombre.trim().len() < 2 {
        return Ok(Json(Vec::new()));
    }

    let estudiantes = StudentRepo::search_cursos(&state.pool, nombre.trim()).await?;
    Ok(Json(estudiantes))
}

/// GET /api/cursos/meses
pub async fn meses(State(state): State<AppState>) -> AppResult<Json<Vec<Mes>>> {
    let meses = MesRepo::list(&state.pool).await?;
    Ok(Json(meses))
}

/// GET /api/cursos/pagos-curso/{estudianteId}
pub async fn pagos_curso(
    State(state): State<AppState>,
    Path(estudiante_id): Path<DbId>,
) -> AppResult<Json<Vec<PagoCurso>>> {
    let pagos = CursoRepo::list_pagos(&state.pool, estudiante_id).await?;
    Ok(Json(pagos))
}

/// GET /api/cursos/pagos-curso/verificar/{estudianteId}/{mesId}
pub async fn verificar_mes(
    State(state): State<AppState>,
    Path((estudiante_id, mes_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<MesPagadoCurso>> {
    let pago = CursoRepo::find_pago_mes(&state.pool, estudiante_id, mes_id).await?;
    Ok(Json(MesPagadoCurso {
        pagado: pago.is_some(),
        pago,
    }))
}

/// POST /api/cursos/pagos-curso
///
/// The late fee follows the same target-month rule as tuition and is
/// folded into the stored amount.
pub async fn registrar_pago(
    State(state): State<AppState>,
    Json(input): Json<RegistrarPagoCurso>,
) -> AppResult<(StatusCode, Json<RespuestaPagoCurso>)> {
    let estudiante = StudentRepo::find_by_id(&state.pool, input.estudiante_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Estudiante",
            id: input.estudiante_id,
        }))?;

    let curso_id = estudiante.curso_extra_id.ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "El estudiante no tiene un curso asignado".into(),
        ))
    })?;

    let mes_nombre = MesRepo::find_name(&state.pool, input.mes_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Validation("Mes no válido".into())))?;

    let metodo_pago = nombre_metodo(&state, input.payment_method_id).await?;

    let existente =
        CursoRepo::find_pago_mes(&state.pool, input.estudiante_id, input.mes_id).await?;
    if existente.is_some() {
        return Err(AppError::Core(CoreError::Validation(
            "Este mes ya fue pagado".into(),
        )));
    }

    let ahora = Utc::now();
    let mora_calculada = mora::calcular_mora(input.mes_id as u32, ahora.date_naive());
    let monto_total = input.monto + mora_calculada;

    let pago = CursoRepo::insert_pago(
        &state.pool,
        input.estudiante_id,
        curso_id,
        input.mes_id,
        &mes_nombre,
        monto_total,
        input.payment_method_id,
    )
    .await?;

    let numero_recibo = recibo::numero_recibo("CUR", ahora.year(), ahora.timestamp_millis());

    Ok((
        StatusCode::CREATED,
        Json(RespuestaPagoCurso {
            pago,
            numero_recibo,
            monto: input.monto,
            mora: mora_calculada,
            metodo_pago,
        }),
    ))
}

/// GET /api/cursos/pagos-curso/resumen/{estudianteId}
///
/// Summary over the 10-month school year.
pub async fn resumen_pagos(
    State(state): State<AppState>,
    Path(estudiante_id): Path<DbId>,
) -> AppResult<Json<ResumenPagosCurso>> {
    let montos = CursoRepo::list_montos(&state.pool, estudiante_id).await?;

    let meses_pagados = montos.len() as i64;
    let total_pagado: Decimal = montos.into_iter().sum();

    Ok(Json(ResumenPagosCurso {
        meses_pagados,
        meses_pendientes: 10 - meses_pagados,
        total_pagado,
    }))
}
