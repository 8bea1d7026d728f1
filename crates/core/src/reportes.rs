//! In-memory reductions for the dashboard endpoints.
//!
//! The reporting layer fetches `(created_at, amount)` rows from each
//! payment table and reduces here: group by calendar day or month, sort
//! most-recent-first, cap to the window each endpoint shows.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::Timestamp;

/// Daily income window shown by the dashboard.
pub const DIAS_VENTANA: usize = 30;

/// Monthly income window shown by the dashboard.
pub const MESES_VENTANA: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngresoDia {
    /// Calendar day, `YYYY-MM-DD`.
    pub dia: String,
    pub total_ingresos: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngresoMes {
    /// Calendar month, `YYYY-MM`.
    pub mes: String,
    pub total_ingresos: Decimal,
}

/// Sum rows by calendar day, most recent first, capped at [`DIAS_VENTANA`].
pub fn ingresos_por_dia<I>(filas: I) -> Vec<IngresoDia>
where
    I: IntoIterator<Item = (Timestamp, Decimal)>,
{
    let mut por_dia: BTreeMap<String, Decimal> = BTreeMap::new();
    for (fecha, monto) in filas {
        let dia = fecha.format("%Y-%m-%d").to_string();
        *por_dia.entry(dia).or_default() += monto;
    }

    por_dia
        .into_iter()
        .rev()
        .take(DIAS_VENTANA)
        .map(|(dia, total_ingresos)| IngresoDia { dia, total_ingresos })
        .collect()
}

/// Sum rows by calendar month, most recent first, capped at [`MESES_VENTANA`].
pub fn ingresos_por_mes<I>(filas: I) -> Vec<IngresoMes>
where
    I: IntoIterator<Item = (Timestamp, Decimal)>,
{
    let mut por_mes: BTreeMap<String, Decimal> = BTreeMap::new();
    for (fecha, monto) in filas {
        let mes = fecha.format("%Y-%m").to_string();
        *por_mes.entry(mes).or_default() += monto;
    }

    por_mes
        .into_iter()
        .rev()
        .take(MESES_VENTANA)
        .map(|(mes, total_ingresos)| IngresoMes { mes, total_ingresos })
        .collect()
}
