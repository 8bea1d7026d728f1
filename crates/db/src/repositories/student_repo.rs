//! Repository for the `students` table.

use colegio_core::types::DbId;
use sqlx::PgPool;

use crate::models::student::{
    CreateStudent, Student, StudentClasificacion, StudentConCurso, UpdateStudent,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nombre, apellidos, grado, jornada, modalidad, tipo_estudiante, \
                       estado, curso_extra_id, created_at, updated_at";

/// Columns for search results joined with the extra course.
const SEARCH_COLUMNS: &str = "s.id, s.nombre, s.apellidos, s.grado, s.jornada, s.modalidad, \
                              s.tipo_estudiante, s.curso_extra_id, c.nombre AS curso_nombre";

/// Provides CRUD and search operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// List all students, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students ORDER BY created_at DESC");
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students \
                 (nombre, apellidos, grado, jornada, modalidad, tipo_estudiante, estado, curso_extra_id) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'REGULAR'), $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.nombre)
            .bind(&input.apellidos)
            .bind(&input.grado)
            .bind(&input.jornada)
            .bind(&input.modalidad)
            .bind(&input.tipo_estudiante)
            .bind(&input.estado)
            .bind(input.curso_extra_id)
            .fetch_one(pool)
            .await
    }

    /// Update a student. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStudent,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET \
                nombre = COALESCE($2, nombre), \
                apellidos = COALESCE($3, apellidos), \
                grado = COALESCE($4, grado), \
                jornada = COALESCE($5, jornada), \
                modalidad = COALESCE($6, modalidad), \
                tipo_estudiante = COALESCE($7, tipo_estudiante), \
                estado = COALESCE($8, estado), \
                curso_extra_id = COALESCE($9, curso_extra_id), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(&input.nombre)
            .bind(&input.apellidos)
            .bind(&input.grado)
            .bind(&input.jornada)
            .bind(&input.modalidad)
            .bind(&input.tipo_estudiante)
            .bind(&input.estado)
            .bind(input.curso_extra_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a student. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Case-insensitive substring search on nombre/apellidos, capped at 10.
    pub async fn search(pool: &PgPool, nombre: &str) -> Result<Vec<StudentConCurso>, sqlx::Error> {
        let query = format!(
            "SELECT {SEARCH_COLUMNS} \
             FROM students s \
             LEFT JOIN extra_courses c ON c.id = s.curso_extra_id \
             WHERE s.nombre ILIKE $1 OR s.apellidos ILIKE $1 \
             ORDER BY s.apellidos ASC \
             LIMIT 10"
        );
        sqlx::query_as::<_, StudentConCurso>(&query)
            .bind(format!("%{nombre}%"))
            .fetch_all(pool)
            .await
    }

    /// Same search restricted to course students (`tipo_estudiante = CURSO`).
    pub async fn search_cursos(
        pool: &PgPool,
        nombre: &str,
    ) -> Result<Vec<StudentConCurso>, sqlx::Error> {
        let query = format!(
            "SELECT {SEARCH_COLUMNS} \
             FROM students s \
             LEFT JOIN extra_courses c ON c.id = s.curso_extra_id \
             WHERE s.tipo_estudiante = 'CURSO' \
               AND (s.nombre ILIKE $1 OR s.apellidos ILIKE $1) \
             ORDER BY s.apellidos ASC \
             LIMIT 10"
        );
        sqlx::query_as::<_, StudentConCurso>(&query)
            .bind(format!("%{nombre}%"))
            .fetch_all(pool)
            .await
    }

    /// All course students joined with their course, ordered by name.
    pub async fn list_cursos(pool: &PgPool) -> Result<Vec<StudentConCurso>, sqlx::Error> {
        let query = format!(
            "SELECT {SEARCH_COLUMNS} \
             FROM students s \
             LEFT JOIN extra_courses c ON c.id = s.curso_extra_id \
             WHERE s.tipo_estudiante = 'CURSO' \
             ORDER BY s.nombre ASC"
        );
        sqlx::query_as::<_, StudentConCurso>(&query)
            .fetch_all(pool)
            .await
    }

    /// Classification columns for the statistics endpoints.
    pub async fn list_clasificacion(
        pool: &PgPool,
    ) -> Result<Vec<StudentClasificacion>, sqlx::Error> {
        sqlx::query_as::<_, StudentClasificacion>(
            "SELECT estado, tipo_estudiante, jornada, modalidad, curso_extra_id FROM students",
        )
        .fetch_all(pool)
        .await
    }
}
