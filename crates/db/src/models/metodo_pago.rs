//! Payment method lookup row.

use colegio_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MetodoPago {
    pub id: DbId,
    pub name: String,
}
