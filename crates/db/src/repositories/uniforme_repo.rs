//! Repository for the uniform catalog and per-student size registrations.

use chrono::NaiveDate;
use colegio_core::types::DbId;
use sqlx::PgPool;

use crate::models::uniforme::{
    CategoriaConItems, CategoriaUniformeRow, FilaInventario, ItemUniforme, ReporteUniforme,
    TallaEntrada, TallaRegistrada,
};

pub struct UniformeRepo;

impl UniformeRepo {
    /// All categories with their items.
    pub async fn list_categorias(pool: &PgPool) -> Result<Vec<CategoriaConItems>, sqlx::Error> {
        let categorias = sqlx::query_as::<_, CategoriaUniformeRow>(
            "SELECT id, nombre, descripcion FROM uniform_categories ORDER BY id ASC",
        )
        .fetch_all(pool)
        .await?;

        let items = sqlx::query_as::<_, ItemUniforme>(
            "SELECT id, category_id, nombre FROM uniform_items ORDER BY id ASC",
        )
        .fetch_all(pool)
        .await?;

        Ok(agrupar_items(categorias, items))
    }

    /// One category (with items) looked up by display name.
    pub async fn find_categoria_por_nombre(
        pool: &PgPool,
        nombre: &str,
    ) -> Result<Option<CategoriaConItems>, sqlx::Error> {
        let categoria = sqlx::query_as::<_, CategoriaUniformeRow>(
            "SELECT id, nombre, descripcion FROM uniform_categories WHERE nombre = $1",
        )
        .bind(nombre)
        .fetch_optional(pool)
        .await?;

        let Some(categoria) = categoria else {
            return Ok(None);
        };

        let items = sqlx::query_as::<_, ItemUniforme>(
            "SELECT id, category_id, nombre FROM uniform_items WHERE category_id = $1 ORDER BY id ASC",
        )
        .bind(categoria.id)
        .fetch_all(pool)
        .await?;

        Ok(agrupar_items(vec![categoria], items).into_iter().next())
    }

    /// Sizes registered for a student, joined with item and category names.
    pub async fn list_tallas(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<TallaRegistrada>, sqlx::Error> {
        sqlx::query_as::<_, TallaRegistrada>(
            "SELECT t.id, t.talla, t.cantidad, t.fecha_registro, \
                    i.id AS item_id, i.nombre AS item_nombre, \
                    c.id AS categoria_id, c.nombre AS categoria_nombre \
             FROM student_uniform_sizes t \
             JOIN uniform_items i ON i.id = t.item_id \
             JOIN uniform_categories c ON c.id = i.category_id \
             WHERE t.student_id = $1 \
             ORDER BY t.id ASC",
        )
        .bind(student_id)
        .fetch_all(pool)
        .await
    }

    /// Upsert size registrations on (student_id, item_id).
    pub async fn upsert_tallas(
        pool: &PgPool,
        student_id: DbId,
        tallas: &[TallaEntrada],
    ) -> Result<Vec<TallaRegistrada>, sqlx::Error> {
        for entrada in tallas {
            sqlx::query(
                "INSERT INTO student_uniform_sizes (student_id, item_id, talla, cantidad) \
                 VALUES ($1, $2, $3, $4) \
                 ON CONFLICT ON CONSTRAINT uq_talla_estudiante_item \
                 DO UPDATE SET talla = EXCLUDED.talla, cantidad = EXCLUDED.cantidad, \
                               fecha_registro = now()",
            )
            .bind(student_id)
            .bind(entrada.item_id)
            .bind(&entrada.talla)
            .bind(entrada.cantidad.unwrap_or(1))
            .execute(pool)
            .await?;
        }

        Self::list_tallas(pool, student_id).await
    }

    /// Delete one size row. Returns `true` if a row was removed.
    pub async fn delete_talla(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM student_uniform_sizes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Uniform payment rows for the reports endpoint, newest first.
    ///
    /// `status` filters on the derived paid/pending state; `None` means all.
    pub async fn report(
        pool: &PgPool,
        status: Option<&str>,
        desde: Option<NaiveDate>,
        hasta: Option<NaiveDate>,
    ) -> Result<Vec<ReporteUniforme>, sqlx::Error> {
        sqlx::query_as::<_, ReporteUniforme>(
            "SELECT p.id, \
                    s.nombre || ' ' || s.apellidos AS student_name, \
                    p.monto_total AS total_amount, \
                    p.monto_adelanto AS paid_amount, \
                    p.monto_pendiente AS pending_amount, \
                    CASE WHEN p.monto_pendiente <= 0 THEN 'paid' ELSE 'pending' END \
                        AS payment_status, \
                    p.fecha_actualizacion AS payment_date \
             FROM pago_uniforme p \
             JOIN students s ON s.id = p.student_id \
             WHERE ($1::text IS NULL OR \
                    (CASE WHEN p.monto_pendiente <= 0 THEN 'paid' ELSE 'pending' END) = $1) \
               AND ($2::date IS NULL OR p.fecha_actualizacion::date >= $2) \
               AND ($3::date IS NULL OR p.fecha_actualizacion::date <= $3) \
             ORDER BY p.fecha_actualizacion DESC",
        )
        .bind(status)
        .bind(desde)
        .bind(hasta)
        .fetch_all(pool)
        .await
    }

    /// Registration counts per (category, item, size) for the inventory
    /// report, ready to be grouped by the handler.
    pub async fn inventario_tallas(pool: &PgPool) -> Result<Vec<FilaInventario>, sqlx::Error> {
        sqlx::query_as::<_, FilaInventario>(
            "SELECT c.id AS categoria_id, \
                    c.nombre AS categoria_nombre, \
                    c.descripcion AS categoria_descripcion, \
                    i.id AS item_id, \
                    i.nombre AS item_nombre, \
                    t.talla, \
                    COUNT(*) AS cantidad \
             FROM student_uniform_sizes t \
             JOIN uniform_items i ON i.id = t.item_id \
             JOIN uniform_categories c ON c.id = i.category_id \
             GROUP BY c.id, c.nombre, c.descripcion, i.id, i.nombre, t.talla \
             ORDER BY c.id ASC, i.id ASC",
        )
        .fetch_all(pool)
        .await
    }
}

fn agrupar_items(
    categorias: Vec<CategoriaUniformeRow>,
    items: Vec<ItemUniforme>,
) -> Vec<CategoriaConItems> {
    categorias
        .into_iter()
        .map(|categoria| {
            let uniform_items = items
                .iter()
                .filter(|item| item.category_id == categoria.id)
                .cloned()
                .collect();
            CategoriaConItems {
                id: categoria.id,
                nombre: categoria.nombre,
                descripcion: categoria.descripcion,
                uniform_items,
            }
        })
        .collect()
}
