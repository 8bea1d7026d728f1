//! Read-only queries behind the dashboard aggregates.
//!
//! Cross-category endpoints iterate [`colegio_core::pagos::FUENTES_INGRESO`]
//! and call one of these per source; reduction happens in
//! `colegio_core::reportes` or in the handler. Callers decide how to treat
//! a failing source (the dashboard swallows and logs it).

use chrono::NaiveDate;
use colegio_core::pagos::FuenteIngreso;
use colegio_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::resumen::{DetallePago, ResumenPagoEstudiante};

/// Inclusive date range on `created_at`; either bound may be open.
pub type RangoFechas = (Option<NaiveDate>, Option<NaiveDate>);

pub struct DashboardRepo;

impl DashboardRepo {
    /// `(created_at, amount)` rows of one income source.
    pub async fn ingresos_fuente(
        pool: &PgPool,
        fuente: &FuenteIngreso,
        rango: RangoFechas,
    ) -> Result<Vec<(Timestamp, Decimal)>, sqlx::Error> {
        let query = format!(
            "SELECT created_at, COALESCE({campo}, 0) FROM {tabla} \
             WHERE ($1::date IS NULL OR created_at::date >= $1) \
               AND ($2::date IS NULL OR created_at::date <= $2)",
            campo = fuente.campo,
            tabla = fuente.tabla,
        );
        sqlx::query_as::<_, (Timestamp, Decimal)>(&query)
            .bind(rango.0)
            .bind(rango.1)
            .fetch_all(pool)
            .await
    }

    /// Total of one income source restricted to a payment method.
    pub async fn ingresos_fuente_por_metodo(
        pool: &PgPool,
        fuente: &FuenteIngreso,
        payment_method_id: DbId,
        rango: RangoFechas,
    ) -> Result<Decimal, sqlx::Error> {
        let query = format!(
            "SELECT COALESCE(SUM({campo}), 0) FROM {tabla} \
             WHERE payment_method_id = $1 \
               AND ($2::date IS NULL OR created_at::date >= $2) \
               AND ($3::date IS NULL OR created_at::date <= $3)",
            campo = fuente.campo,
            tabla = fuente.tabla,
        );
        sqlx::query_scalar::<_, Decimal>(&query)
            .bind(payment_method_id)
            .bind(rango.0)
            .bind(rango.1)
            .fetch_one(pool)
            .await
    }

    /// Late-fee total of one mora-bearing table.
    pub async fn total_mora_tabla(
        pool: &PgPool,
        tabla: &str,
        rango: RangoFechas,
    ) -> Result<Decimal, sqlx::Error> {
        let query = format!(
            "SELECT COALESCE(SUM(mora), 0) FROM {tabla} \
             WHERE ($1::date IS NULL OR created_at::date >= $1) \
               AND ($2::date IS NULL OR created_at::date <= $2)"
        );
        sqlx::query_scalar::<_, Decimal>(&query)
            .bind(rango.0)
            .bind(rango.1)
            .fetch_one(pool)
            .await
    }

    /// Outstanding rows `(student name, pending amount)` of one category
    /// table (or `graduation_payments` via its column names).
    pub async fn pendientes_tabla(
        pool: &PgPool,
        tabla: &str,
        columna_pendiente: &str,
        rango: RangoFechas,
    ) -> Result<Vec<(String, Decimal)>, sqlx::Error> {
        let query = format!(
            "SELECT s.nombre || ' ' || s.apellidos, p.{columna_pendiente} \
             FROM {tabla} p \
             JOIN students s ON s.id = p.student_id \
             WHERE p.{columna_pendiente} > 0 \
               AND ($1::date IS NULL OR p.created_at::date >= $1) \
               AND ($2::date IS NULL OR p.created_at::date <= $2)"
        );
        sqlx::query_as::<_, (String, Decimal)>(&query)
            .bind(rango.0)
            .bind(rango.1)
            .fetch_all(pool)
            .await
    }

    /// Payment detail rows of one source for the detailed report.
    pub async fn detalle_fuente(
        pool: &PgPool,
        fuente: &FuenteIngreso,
        rango: RangoFechas,
    ) -> Result<Vec<DetallePago>, sqlx::Error> {
        let query = format!(
            "SELECT s.nombre || ' ' || s.apellidos AS estudiante, \
                    p.created_at AS fecha, \
                    COALESCE(m.name, 'N/A') AS metodo_pago, \
                    COALESCE(p.{campo}, 0) AS monto \
             FROM {tabla} p \
             JOIN students s ON s.id = p.student_id \
             LEFT JOIN payment_methods m ON m.id = p.payment_method_id \
             WHERE ($1::date IS NULL OR p.created_at::date >= $1) \
               AND ($2::date IS NULL OR p.created_at::date <= $2) \
             ORDER BY p.created_at DESC",
            campo = fuente.campo,
            tabla = fuente.tabla,
        );
        sqlx::query_as::<_, DetallePago>(&query)
            .bind(rango.0)
            .bind(rango.1)
            .fetch_all(pool)
            .await
    }

    /// All rows of `vista_pagos_estudiantes`, ordered by student name.
    pub async fn resumen_estudiantes(
        pool: &PgPool,
    ) -> Result<Vec<ResumenPagoEstudiante>, sqlx::Error> {
        sqlx::query_as::<_, ResumenPagoEstudiante>(
            "SELECT student_id, estudiante, total_pagado, total_pendiente \
             FROM vista_pagos_estudiantes \
             ORDER BY estudiante ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// View rows with an outstanding balance, largest debt first.
    pub async fn estudiantes_con_pendientes(
        pool: &PgPool,
        limite: Option<i64>,
    ) -> Result<Vec<ResumenPagoEstudiante>, sqlx::Error> {
        sqlx::query_as::<_, ResumenPagoEstudiante>(
            "SELECT student_id, estudiante, total_pagado, total_pendiente \
             FROM vista_pagos_estudiantes \
             WHERE total_pendiente > 0 \
             ORDER BY total_pendiente DESC \
             LIMIT $1",
        )
        // LIMIT NULL quita el tope.
        .bind(limite)
        .fetch_all(pool)
        .await
    }

    /// Grand total outstanding across every student.
    pub async fn total_pendiente(pool: &PgPool) -> Result<Decimal, sqlx::Error> {
        sqlx::query_scalar::<_, Decimal>(
            "SELECT COALESCE(SUM(total_pendiente), 0) FROM vista_pagos_estudiantes",
        )
        .fetch_one(pool)
        .await
    }

    /// Tuition plus course income in an inclusive payment-date range.
    pub async fn ingresos_rango(
        pool: &PgPool,
        inicio: NaiveDate,
        fin: NaiveDate,
    ) -> Result<Decimal, sqlx::Error> {
        let colegiaturas = sqlx::query_scalar::<_, Decimal>(
            "SELECT COALESCE(SUM(total_pagado), 0) FROM pago_colegiaturas \
             WHERE fecha_pago >= $1 AND fecha_pago <= $2",
        )
        .bind(inicio)
        .bind(fin)
        .fetch_one(pool)
        .await?;

        let cursos = sqlx::query_scalar::<_, Decimal>(
            "SELECT COALESCE(SUM(amount), 0) FROM course_payments \
             WHERE created_at::date >= $1 AND created_at::date <= $2",
        )
        .bind(inicio)
        .bind(fin)
        .fetch_one(pool)
        .await?;

        Ok(colegiaturas + cursos)
    }

    /// Tuition income registered for one named school month.
    pub async fn ingresos_mes_colegiaturas(
        pool: &PgPool,
        mes: &str,
        anio: i32,
    ) -> Result<Decimal, sqlx::Error> {
        sqlx::query_scalar::<_, Decimal>(
            "SELECT COALESCE(SUM(total_pagado), 0) FROM pago_colegiaturas \
             WHERE mes = $1 AND anio = $2",
        )
        .bind(mes)
        .bind(anio)
        .fetch_one(pool)
        .await
    }

    /// Student counts grouped by `tipo_estudiante`.
    pub async fn estudiantes_por_tipo(
        pool: &PgPool,
    ) -> Result<Vec<(String, i64)>, sqlx::Error> {
        sqlx::query_as::<_, (String, i64)>(
            "SELECT tipo_estudiante, COUNT(*) FROM students \
             WHERE tipo_estudiante IS NOT NULL \
             GROUP BY tipo_estudiante \
             ORDER BY tipo_estudiante ASC",
        )
        .fetch_all(pool)
        .await
    }
}
