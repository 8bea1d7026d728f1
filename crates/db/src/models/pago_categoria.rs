//! Single-shot category payment row.
//!
//! The seven category tables (`pago_inscripcion`, `pago_uniforme`, ...)
//! share this exact shape; [`crate::repositories::PagoCategoriaRepo`]
//! selects the table from a [`colegio_core::pagos::TipoPago`].

use colegio_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PagoCategoria {
    pub id: DbId,
    pub student_id: DbId,
    pub monto_total: Decimal,
    pub monto_adelanto: Decimal,
    /// Generated column: `monto_total - monto_adelanto`.
    pub monto_pendiente: Decimal,
    pub mora: Decimal,
    pub payment_method_id: Option<DbId>,
    pub created_at: Timestamp,
    pub fecha_actualizacion: Timestamp,
}

/// Request body for creating or updating a category payment.
#[derive(Debug, Deserialize)]
pub struct GuardarPago {
    pub monto_total: Decimal,
    pub monto_abono: Option<Decimal>,
    /// When set and a balance is outstanding, the abono is added to
    /// `monto_adelanto` instead of replacing the amounts.
    #[serde(default)]
    pub es_pago_pendiente: bool,
    pub payment_method_id: Option<DbId>,
}
