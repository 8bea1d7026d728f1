//! Monthly tuition ("colegiatura") payment row and DTOs.

use chrono::NaiveDate;
use colegio_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Colegiatura {
    pub id: DbId,
    pub student_id: DbId,
    /// Spanish month name, uppercase (`ENERO` .. `DICIEMBRE`).
    pub mes: String,
    pub anio: i32,
    pub monto_colegiatura: Decimal,
    pub mora: Decimal,
    /// Generated column: `monto_colegiatura + mora`.
    pub total_pagado: Decimal,
    pub fecha_pago: NaiveDate,
    pub payment_method_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// Request body for registering a tuition payment.
#[derive(Debug, Deserialize)]
pub struct RegistrarColegiatura {
    pub mes: String,
    pub monto_colegiatura: Decimal,
    pub payment_method_id: Option<DbId>,
}
