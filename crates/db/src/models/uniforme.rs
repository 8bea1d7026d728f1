//! Uniform catalog models and size registrations.

use colegio_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CategoriaUniformeRow {
    pub id: DbId,
    pub nombre: String,
    pub descripcion: Option<String>,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ItemUniforme {
    pub id: DbId,
    pub category_id: DbId,
    pub nombre: String,
}

/// A category with its items, as returned by the catalog endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct CategoriaConItems {
    pub id: DbId,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub uniform_items: Vec<ItemUniforme>,
}

/// One registered size row joined with its item and category names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TallaRegistrada {
    pub id: DbId,
    pub talla: String,
    pub cantidad: i32,
    pub fecha_registro: Timestamp,
    pub item_id: DbId,
    pub item_nombre: String,
    pub categoria_id: DbId,
    pub categoria_nombre: String,
}

/// One size entry in the registration request body.
#[derive(Debug, Deserialize)]
pub struct TallaEntrada {
    pub item_id: DbId,
    pub talla: String,
    pub cantidad: Option<i32>,
}

/// Request body for `POST /api/uniformes/tallas/{studentId}`.
#[derive(Debug, Deserialize)]
pub struct GuardarTallas {
    pub tallas: Vec<TallaEntrada>,
}

/// Uniform payment row shaped for the reports endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReporteUniforme {
    pub id: DbId,
    pub student_name: String,
    pub total_amount: Decimal,
    pub paid_amount: Decimal,
    pub pending_amount: Decimal,
    pub payment_status: String,
    pub payment_date: Timestamp,
}

/// One (category, item, size) count row for the size-inventory report.
#[derive(Debug, Clone, FromRow)]
pub struct FilaInventario {
    pub categoria_id: DbId,
    pub categoria_nombre: String,
    pub categoria_descripcion: Option<String>,
    pub item_id: DbId,
    pub item_nombre: String,
    pub talla: String,
    pub cantidad: i64,
}
