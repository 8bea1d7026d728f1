//! Parameterized repository for the seven single-shot category tables.
//!
//! All category tables share one shape; the table is chosen from a
//! [`TipoPago`], whose `tabla()` is a `&'static str` baked into the enum,
//! so no caller-supplied string ever reaches the SQL text.

use colegio_core::pagos::TipoPago;
use colegio_core::types::DbId;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::pago_categoria::PagoCategoria;

const COLUMNS: &str = "id, student_id, monto_total, monto_adelanto, monto_pendiente, mora, \
                       payment_method_id, created_at, fecha_actualizacion";

pub struct PagoCategoriaRepo;

impl PagoCategoriaRepo {
    /// Fetch the payment of one category for a student, if any.
    pub async fn find(
        pool: &PgPool,
        tipo: TipoPago,
        student_id: DbId,
    ) -> Result<Option<PagoCategoria>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {} WHERE student_id = $1",
            tipo.tabla()
        );
        sqlx::query_as::<_, PagoCategoria>(&query)
            .bind(student_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new category payment for a student.
    pub async fn insert(
        pool: &PgPool,
        tipo: TipoPago,
        student_id: DbId,
        monto_total: Decimal,
        monto_adelanto: Decimal,
        payment_method_id: Option<DbId>,
    ) -> Result<PagoCategoria, sqlx::Error> {
        let query = format!(
            "INSERT INTO {} (student_id, monto_total, monto_adelanto, payment_method_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}",
            tipo.tabla()
        );
        sqlx::query_as::<_, PagoCategoria>(&query)
            .bind(student_id)
            .bind(monto_total)
            .bind(monto_adelanto)
            .bind(payment_method_id)
            .fetch_one(pool)
            .await
    }

    /// Replace the total and advance of an existing payment.
    pub async fn update_montos(
        pool: &PgPool,
        tipo: TipoPago,
        student_id: DbId,
        monto_total: Decimal,
        monto_adelanto: Decimal,
        payment_method_id: Option<DbId>,
    ) -> Result<PagoCategoria, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET \
                monto_total = $2, \
                monto_adelanto = $3, \
                payment_method_id = COALESCE($4, payment_method_id), \
                fecha_actualizacion = now() \
             WHERE student_id = $1 \
             RETURNING {COLUMNS}",
            tipo.tabla()
        );
        sqlx::query_as::<_, PagoCategoria>(&query)
            .bind(student_id)
            .bind(monto_total)
            .bind(monto_adelanto)
            .bind(payment_method_id)
            .fetch_one(pool)
            .await
    }

    /// Add an abono against the outstanding balance.
    pub async fn agregar_abono(
        pool: &PgPool,
        tipo: TipoPago,
        student_id: DbId,
        abono: Decimal,
        payment_method_id: Option<DbId>,
    ) -> Result<PagoCategoria, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET \
                monto_adelanto = monto_adelanto + $2, \
                payment_method_id = COALESCE($3, payment_method_id), \
                fecha_actualizacion = now() \
             WHERE student_id = $1 \
             RETURNING {COLUMNS}",
            tipo.tabla()
        );
        sqlx::query_as::<_, PagoCategoria>(&query)
            .bind(student_id)
            .bind(abono)
            .bind(payment_method_id)
            .fetch_one(pool)
            .await
    }
}
