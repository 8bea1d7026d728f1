//! Repository for the `payment_methods` lookup table.

use colegio_core::types::DbId;
use sqlx::PgPool;

use crate::models::metodo_pago::MetodoPago;

pub struct MetodoPagoRepo;

impl MetodoPagoRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<MetodoPago>, sqlx::Error> {
        sqlx::query_as::<_, MetodoPago>(
            "SELECT id, name FROM payment_methods ORDER BY id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Display name for a method id; `None` when the id is unknown.
    pub async fn find_name(pool: &PgPool, id: DbId) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT name FROM payment_methods WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
