//! Repository for the `graduation_payments` table.

use colegio_core::types::DbId;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::graduacion::PagoGraduacion;

const COLUMNS: &str = "id, student_id, total_amount, paid_amount, pending_amount, \
                       payment_method_id, created_at";

pub struct GraduacionRepo;

impl GraduacionRepo {
    pub async fn find_by_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Option<PagoGraduacion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM graduation_payments WHERE student_id = $1");
        sqlx::query_as::<_, PagoGraduacion>(&query)
            .bind(student_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn insert(
        pool: &PgPool,
        student_id: DbId,
        total_amount: Decimal,
        paid_amount: Decimal,
        payment_method_id: Option<DbId>,
    ) -> Result<PagoGraduacion, sqlx::Error> {
        let query = format!(
            "INSERT INTO graduation_payments \
                 (student_id, total_amount, paid_amount, payment_method_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PagoGraduacion>(&query)
            .bind(student_id)
            .bind(total_amount)
            .bind(paid_amount)
            .bind(payment_method_id)
            .fetch_one(pool)
            .await
    }

    /// Add an abono to the cumulative paid amount.
    pub async fn agregar_abono(
        pool: &PgPool,
        student_id: DbId,
        abono: Decimal,
        payment_method_id: Option<DbId>,
    ) -> Result<PagoGraduacion, sqlx::Error> {
        let query = format!(
            "UPDATE graduation_payments SET \
                paid_amount = paid_amount + $2, \
                payment_method_id = COALESCE($3, payment_method_id) \
             WHERE student_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PagoGraduacion>(&query)
            .bind(student_id)
            .bind(abono)
            .bind(payment_method_id)
            .fetch_one(pool)
            .await
    }
}
