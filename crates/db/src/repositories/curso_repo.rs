//! Repository for extra courses and their monthly payments.

use colegio_core::types::DbId;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::curso::{CursoExtra, PagoCurso};

const PAGO_COLUMNS: &str = "id, student_id, course_id, month_id, month, amount, status, \
                            payment_method_id, created_at";

pub struct CursoRepo;

impl CursoRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<CursoExtra>, sqlx::Error> {
        sqlx::query_as::<_, CursoExtra>(
            "SELECT id, nombre, descripcion FROM extra_courses ORDER BY nombre ASC",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CursoExtra>, sqlx::Error> {
        sqlx::query_as::<_, CursoExtra>(
            "SELECT id, nombre, descripcion FROM extra_courses WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Course payments of a student, ordered by school month.
    pub async fn list_pagos(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<PagoCurso>, sqlx::Error> {
        let query = format!(
            "SELECT {PAGO_COLUMNS} FROM course_payments \
             WHERE student_id = $1 \
             ORDER BY month_id ASC"
        );
        sqlx::query_as::<_, PagoCurso>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    /// Payment for one (student, month), if registered.
    pub async fn find_pago_mes(
        pool: &PgPool,
        student_id: DbId,
        month_id: DbId,
    ) -> Result<Option<PagoCurso>, sqlx::Error> {
        let query = format!(
            "SELECT {PAGO_COLUMNS} FROM course_payments \
             WHERE student_id = $1 AND month_id = $2"
        );
        sqlx::query_as::<_, PagoCurso>(&query)
            .bind(student_id)
            .bind(month_id)
            .fetch_optional(pool)
            .await
    }

    /// Register a course payment. `uq_pago_curso_mes` rejects a concurrent
    /// duplicate that slipped past the caller's existence check.
    pub async fn insert_pago(
        pool: &PgPool,
        student_id: DbId,
        course_id: DbId,
        month_id: DbId,
        month: &str,
        amount: Decimal,
        payment_method_id: Option<DbId>,
    ) -> Result<PagoCurso, sqlx::Error> {
        let query = format!(
            "INSERT INTO course_payments \
                 (student_id, course_id, month_id, month, amount, status, payment_method_id) \
             VALUES ($1, $2, $3, $4, $5, 'Pagado', $6) \
             RETURNING {PAGO_COLUMNS}"
        );
        sqlx::query_as::<_, PagoCurso>(&query)
            .bind(student_id)
            .bind(course_id)
            .bind(month_id)
            .bind(month)
            .bind(amount)
            .bind(payment_method_id)
            .fetch_one(pool)
            .await
    }

    /// Amounts of every payment of a student, for the summary endpoint.
    pub async fn list_montos(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<Decimal>, sqlx::Error> {
        sqlx::query_scalar::<_, Decimal>(
            "SELECT amount FROM course_payments WHERE student_id = $1",
        )
        .bind(student_id)
        .fetch_all(pool)
        .await
    }

    /// Enrollment count per course, most enrolled first.
    pub async fn list_inscritos(pool: &PgPool) -> Result<Vec<(CursoExtra, i64)>, sqlx::Error> {
        let rows = sqlx::query_as::<_, CursoInscritosRow>(
            "SELECT c.id, c.nombre, c.descripcion, \
                    COUNT(s.id) FILTER (WHERE s.tipo_estudiante = 'CURSO') AS inscritos \
             FROM extra_courses c \
             LEFT JOIN students s ON s.curso_extra_id = c.id \
             GROUP BY c.id, c.nombre, c.descripcion \
             ORDER BY inscritos DESC, c.nombre ASC",
        )
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| {
                (
                    CursoExtra {
                        id: r.id,
                        nombre: r.nombre,
                        descripcion: r.descripcion,
                    },
                    r.inscritos,
                )
            })
            .collect())
    }
}

#[derive(sqlx::FromRow)]
struct CursoInscritosRow {
    id: DbId,
    nombre: String,
    descripcion: Option<String>,
    inscritos: i64,
}
