//! Extra courses and their monthly payments.

use colegio_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CursoExtra {
    pub id: DbId,
    pub nombre: String,
    pub descripcion: Option<String>,
}

/// Course payment row, one per (student, month).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PagoCurso {
    pub id: DbId,
    pub student_id: DbId,
    pub course_id: DbId,
    pub month_id: DbId,
    /// Display name of the month, denormalized at insert time.
    pub month: String,
    pub amount: Decimal,
    pub status: String,
    pub payment_method_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// Request body for registering a course payment.
#[derive(Debug, Deserialize)]
pub struct RegistrarPagoCurso {
    pub estudiante_id: DbId,
    pub mes_id: DbId,
    pub monto: Decimal,
    pub payment_method_id: Option<DbId>,
}

/// Per-student payment summary for a course (10-month school year).
#[derive(Debug, Serialize)]
pub struct ResumenPagosCurso {
    pub meses_pagados: i64,
    pub meses_pendientes: i64,
    pub total_pagado: Decimal,
}
