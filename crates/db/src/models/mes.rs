//! Month lookup row (1-12, Spanish display name).

use colegio_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Mes {
    pub id: DbId,
    pub name: String,
}
