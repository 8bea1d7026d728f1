//! Handlers for the `/uniformes` resource: catalog, per-student category
//! resolution, size registrations, and the reporting/export endpoints.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use colegio_core::error::CoreError;
use colegio_core::types::DbId;
use colegio_core::uniformes::{comparar_tallas, resolver_categoria};
use colegio_db::models::uniforme::{
    CategoriaConItems, GuardarTallas, ReporteUniforme, TallaRegistrada,
};
use colegio_db::repositories::{StudentRepo, UniformeRepo};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, MessageResponse, StatusResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct BuscarParams {
    pub nombre: Option<String>,
}

/// Search result shaped for the uniform registration screen.
#[derive(Debug, Serialize)]
pub struct EstudianteUniforme {
    pub id: DbId,
    pub nombre_completo: String,
    pub nivel: String,
}

/// Category resolution response when a single category applies.
#[derive(Debug, Serialize)]
pub struct CategoriaEstudiante {
    pub success: bool,
    #[serde(rename = "modalidadEstudiante")]
    pub modalidad_estudiante: Option<String>,
    #[serde(rename = "gradoEstudiante")]
    pub grado_estudiante: Option<String>,
    pub data: CategoriaConItems,
}

/// Fallback response listing every category.
#[derive(Debug, Serialize)]
pub struct TodasLasCategorias {
    pub success: bool,
    pub mensaje: &'static str,
    pub data: Vec<CategoriaConItems>,
}

#[derive(Debug, Deserialize)]
pub struct ReportParams {
    pub status: Option<String>,
    #[serde(rename = "dateFrom")]
    pub date_from: Option<NaiveDate>,
    #[serde(rename = "dateTo")]
    pub date_to: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct ReportStats {
    #[serde(rename = "totalSales")]
    pub total_sales: Decimal,
    #[serde(rename = "pendingPayments")]
    pub pending_payments: usize,
    #[serde(rename = "paidPayments")]
    pub paid_payments: usize,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub success: bool,
    pub payments: Vec<ReporteUniforme>,
    pub stats: ReportStats,
}

/// Size counts for one item in the inventory report.
#[derive(Debug, Serialize)]
pub struct InventarioItem {
    pub item_id: DbId,
    pub item_nombre: String,
    pub tallas: Vec<InventarioTalla>,
    pub total: i64,
}

#[derive(Debug, Serialize)]
pub struct InventarioTalla {
    pub talla: String,
    pub cantidad: i64,
}

/// Inventory grouped by category.
#[derive(Debug, Serialize)]
pub struct InventarioCategoria {
    pub categoria_id: DbId,
    pub categoria_nombre: String,
    pub categoria_descripcion: Option<String>,
    pub items: Vec<InventarioItem>,
    pub total_registros: i64,
}

// ---------------------------------------------------------------------------
// Catalog and resolution
// ---------------------------------------------------------------------------

/// GET /api/uniformes/buscar?nombre=
///
/// Unlike the payments search, a short query answers an empty list.
pub async fn buscar(
    State(state): State<AppState>,
    Query(params): Query<BuscarParams>,
) -> AppResult<Json<Vec<EstudianteUniforme>>> {
    let nombre = params.nombre.unwrap_or_default();
    if nombre.trim().len() < 2 {
        return Ok(Json(Vec::new()));
    }

    let estudiantes = StudentRepo::search(&state.pool, nombre.trim()).await?;
    let formateados = estudiantes
        .into_iter()
        .map(|e| EstudianteUniforme {
            id: e.id,
            nombre_completo: format!("{} {}", e.nombre, e.apellidos),
            nivel: format!(
                "{} - {}",
                e.grado.as_deref().unwrap_or(""),
                e.modalidad.as_deref().unwrap_or("")
            ),
        })
        .collect();

    Ok(Json(formateados))
}

/// GET /api/uniformes/categorias
pub async fn categorias(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<CategoriaConItems>>>> {
    let categorias = UniformeRepo::list_categorias(&state.pool).await?;
    Ok(Json(DataResponse::new(categorias)))
}

/// GET /api/uniformes/categorias/estudiante/{studentId}
///
/// Resolves the category from the student's modalidad/grado; when nothing
/// matches, answers every category with a warning instead of failing.
pub async fn categoria_estudiante(
    State(state): State<AppState>,
    Path(student_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let estudiante = StudentRepo::find_by_id(&state.pool, student_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Estudiante",
            id: student_id,
        }))?;

    let resuelta = resolver_categoria(
        estudiante.modalidad.as_deref().unwrap_or(""),
        estudiante.grado.as_deref().unwrap_or(""),
    );

    let categoria = match resuelta {
        Some(categoria) => {
            UniformeRepo::find_categoria_por_nombre(&state.pool, categoria.nombre()).await?
        }
        None => None,
    };

    match categoria {
        Some(data) => Ok(Json(CategoriaEstudiante {
            success: true,
            modalidad_estudiante: estudiante.modalidad,
            grado_estudiante: estudiante.grado,
            data,
        })
        .into_response()),
        None => {
            let todas = UniformeRepo::list_categorias(&state.pool).await?;
            Ok(Json(TodasLasCategorias {
                success: true,
                mensaje: "Nivel no reconocido, mostrando todas las categorías",
                data: todas,
            })
            .into_response())
        }
    }
}

// ---------------------------------------------------------------------------
// Size registrations
// ---------------------------------------------------------------------------

/// GET /api/uniformes/tallas/{studentId}
pub async fn tallas(
    State(state): State<AppState>,
    Path(student_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<TallaRegistrada>>>> {
    let tallas = UniformeRepo::list_tallas(&state.pool, student_id).await?;
    Ok(Json(DataResponse::new(tallas)))
}

/// POST /api/uniformes/tallas/{studentId}
///
/// Upserts each entry on (student, item).
pub async fn guardar_tallas(
    State(state): State<AppState>,
    Path(student_id): Path<DbId>,
    Json(input): Json<GuardarTallas>,
) -> AppResult<Json<MessageResponse<Vec<TallaRegistrada>>>> {
    if input.tallas.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Se requiere un array de tallas".into(),
        )));
    }

    let tallas = UniformeRepo::upsert_tallas(&state.pool, student_id, &input.tallas).await?;
    Ok(Json(MessageResponse::new(
        "Tallas guardadas correctamente",
        tallas,
    )))
}

/// DELETE /api/uniformes/tallas/{id}
pub async fn eliminar_talla(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StatusResponse>> {
    let deleted = UniformeRepo::delete_talla(&state.pool, id).await?;
    if deleted {
        Ok(Json(StatusResponse::new("Talla eliminada correctamente")))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Talla",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

async fn report_rows(
    state: &AppState,
    params: &ReportParams,
) -> AppResult<Vec<ReporteUniforme>> {
    let status = match params.status.as_deref() {
        None | Some("all") => None,
        Some(otro) => Some(otro),
    };
    let rows =
        UniformeRepo::report(&state.pool, status, params.date_from, params.date_to).await?;
    Ok(rows)
}

/// GET /api/uniformes/reports
pub async fn reports(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> AppResult<Json<ReportResponse>> {
    let payments = report_rows(&state, &params).await?;

    let stats = ReportStats {
        total_sales: payments.iter().map(|p| p.paid_amount).sum(),
        pending_payments: payments
            .iter()
            .filter(|p| p.payment_status == "pending")
            .count(),
        paid_payments: payments
            .iter()
            .filter(|p| p.payment_status == "paid")
            .count(),
    };

    Ok(Json(ReportResponse {
        success: true,
        payments,
        stats,
    }))
}

/// GET /api/uniformes/export-excel
///
/// Spreadsheet export of the uniform report, served as a CSV attachment.
pub async fn export_excel(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> AppResult<impl IntoResponse> {
    let payments = report_rows(&state, &params).await?;

    let mut csv = String::from("ID,Estudiante,Total,Abonado,Pendiente,Estado de Pago,Fecha\n");
    for p in &payments {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            p.id,
            p.student_name,
            p.total_amount,
            p.paid_amount,
            p.pending_amount,
            p.payment_status,
            p.payment_date.format("%Y-%m-%d"),
        ));
    }

    Ok(axum::response::Response::builder()
        .status(200)
        .header("Content-Type", "text/csv")
        .header(
            "Content-Disposition",
            "attachment; filename=\"reporte-uniformes.csv\"",
        )
        .body(axum::body::Body::from(csv))
        .unwrap()
        .into_response())
}

/// GET /api/uniformes/inventario-tallas
///
/// Registration counts grouped category -> item -> size, sizes ordered
/// numeric-first then XS..XXL.
pub async fn inventario_tallas(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<InventarioCategoria>>>> {
    let filas = UniformeRepo::inventario_tallas(&state.pool).await?;

    let mut categorias: Vec<InventarioCategoria> = Vec::new();
    for fila in filas {
        let idx_categoria = match categorias
            .iter()
            .position(|c| c.categoria_id == fila.categoria_id)
        {
            Some(idx) => idx,
            None => {
                categorias.push(InventarioCategoria {
                    categoria_id: fila.categoria_id,
                    categoria_nombre: fila.categoria_nombre.clone(),
                    categoria_descripcion: fila.categoria_descripcion.clone(),
                    items: Vec::new(),
                    total_registros: 0,
                });
                categorias.len() - 1
            }
        };
        let categoria = &mut categorias[idx_categoria];
        categoria.total_registros += fila.cantidad;

        let idx_item = match categoria
            .items
            .iter()
            .position(|i| i.item_id == fila.item_id)
        {
            Some(idx) => idx,
            None => {
                categoria.items.push(InventarioItem {
                    item_id: fila.item_id,
                    item_nombre: fila.item_nombre.clone(),
                    tallas: Vec::new(),
                    total: 0,
                });
                categoria.items.len() - 1
            }
        };
        let item = &mut categoria.items[idx_item];
        item.total += fila.cantidad;
        item.tallas.push(InventarioTalla {
            talla: fila.talla,
            cantidad: fila.cantidad,
        });
    }

    for categoria in &mut categorias {
        for item in &mut categoria.items {
            item.tallas.sort_by(|a, b| comparar_tallas(&a.talla, &b.talla));
        }
    }

    Ok(Json(DataResponse::new(categorias)))
}
