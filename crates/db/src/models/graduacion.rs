//! Graduation payment row (one per student, cumulative `paid_amount`).

use colegio_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PagoGraduacion {
    pub id: DbId,
    pub student_id: DbId,
    pub total_amount: Decimal,
    /// Cumulative: each registration adds to this.
    pub paid_amount: Decimal,
    /// Generated column: `total_amount - paid_amount`.
    pub pending_amount: Decimal,
    pub payment_method_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// Request body for registering a graduation payment or abono.
#[derive(Debug, Deserialize)]
pub struct GuardarGraduacion {
    pub total_amount: Option<Decimal>,
    pub paid_amount: Option<Decimal>,
    pub payment_method_id: Option<DbId>,
}
