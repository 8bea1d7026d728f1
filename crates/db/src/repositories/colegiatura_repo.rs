//! Repository for the `pago_colegiaturas` table.

use colegio_core::types::DbId;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::colegiatura::Colegiatura;

const COLUMNS: &str = "id, student_id, mes, anio, monto_colegiatura, mora, total_pagado, \
                       fecha_pago, payment_method_id, created_at";

pub struct ColegiaturaRepo;

impl ColegiaturaRepo {
    /// Tuition history of a student for one year, oldest payment first.
    pub async fn list_by_student_year(
        pool: &PgPool,
        student_id: DbId,
        anio: i32,
    ) -> Result<Vec<Colegiatura>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pago_colegiaturas \
             WHERE student_id = $1 AND anio = $2 \
             ORDER BY fecha_pago ASC"
        );
        sqlx::query_as::<_, Colegiatura>(&query)
            .bind(student_id)
            .bind(anio)
            .fetch_all(pool)
            .await
    }

    /// Payment for one (student, month, year) tuple, if registered.
    pub async fn find_by_mes(
        pool: &PgPool,
        student_id: DbId,
        mes: &str,
        anio: i32,
    ) -> Result<Option<Colegiatura>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pago_colegiaturas \
             WHERE student_id = $1 AND mes = $2 AND anio = $3"
        );
        sqlx::query_as::<_, Colegiatura>(&query)
            .bind(student_id)
            .bind(mes)
            .bind(anio)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Colegiatura>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pago_colegiaturas WHERE id = $1");
        sqlx::query_as::<_, Colegiatura>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Register a tuition payment. The `uq_colegiatura_mes` constraint
    /// rejects a concurrent duplicate that slipped past the caller's
    /// existence check.
    #[allow(clippy::too_many_arguments)]
    pub async fn insert(
        pool: &PgPool,
        student_id: DbId,
        mes: &str,
        anio: i32,
        monto_colegiatura: Decimal,
        mora: Decimal,
        payment_method_id: Option<DbId>,
    ) -> Result<Colegiatura, sqlx::Error> {
        let query = format!(
            "INSERT INTO pago_colegiaturas \
                 (student_id, mes, anio, monto_colegiatura, mora, payment_method_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Colegiatura>(&query)
            .bind(student_id)
            .bind(mes)
            .bind(anio)
            .bind(monto_colegiatura)
            .bind(mora)
            .bind(payment_method_id)
            .fetch_one(pool)
            .await
    }
}
