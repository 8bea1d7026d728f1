//! Handlers for the `/estudiantes` resource (plain CRUD).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use colegio_core::error::CoreError;
use colegio_core::types::DbId;
use colegio_db::models::student::{CreateStudent, Student, UpdateStudent};
use colegio_db::repositories::StudentRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, ListResponse, MessageResponse, StatusResponse};
use crate::state::AppState;

/// GET /api/estudiantes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ListResponse<Student>>> {
    let estudiantes = StudentRepo::list(&state.pool).await?;
    Ok(Json(ListResponse::new(estudiantes)))
}

/// GET /api/estudiantes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Student>>> {
    let estudiante = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Estudiante",
            id,
        }))?;
    Ok(Json(DataResponse::new(estudiante)))
}

/// POST /api/estudiantes
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateStudent>,
) -> AppResult<(StatusCode, Json<MessageResponse<Student>>)> {
    let estudiante = StudentRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(
            "Estudiante creado exitosamente",
            estudiante,
        )),
    ))
}

/// PUT /api/estudiantes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStudent>,
) -> AppResult<Json<MessageResponse<Student>>> {
    let estudiante = StudentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Estudiante",
            id,
        }))?;
    Ok(Json(MessageResponse::new(
        "Estudiante actualizado exitosamente",
        estudiante,
    )))
}

/// DELETE /api/estudiantes/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StatusResponse>> {
    let deleted = StudentRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(StatusResponse::new("Estudiante eliminado exitosamente")))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Estudiante",
            id,
        }))
    }
}
