//! Repository for the `months` lookup table.

use colegio_core::types::DbId;
use sqlx::PgPool;

use crate::models::mes::Mes;

pub struct MesRepo;

impl MesRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Mes>, sqlx::Error> {
        sqlx::query_as::<_, Mes>("SELECT id, name FROM months ORDER BY id ASC")
            .fetch_all(pool)
            .await
    }

    pub async fn find_name(pool: &PgPool, id: DbId) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT name FROM months WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
