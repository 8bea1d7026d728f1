//! Row of the `vista_pagos_estudiantes` view: per-student totals across
//! every payment category.

use colegio_core::types::DbId;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ResumenPagoEstudiante {
    pub student_id: DbId,
    pub estudiante: String,
    pub total_pagado: Decimal,
    pub total_pendiente: Decimal,
}

/// One payment detail row for the detailed report endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DetallePago {
    pub estudiante: String,
    pub fecha: colegio_core::types::Timestamp,
    pub metodo_pago: String,
    pub monto: Decimal,
}

/// One pending-payment row for the dashboard pending list.
#[derive(Debug, Clone, Serialize)]
pub struct PagoPendiente {
    pub estudiante: String,
    pub tipo_pago: String,
    pub monto_pendiente: Decimal,
}
