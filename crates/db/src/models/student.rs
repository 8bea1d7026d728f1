//! Student entity model and DTOs.

use colegio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full student row from the `students` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub nombre: String,
    pub apellidos: String,
    pub grado: Option<String>,
    pub jornada: Option<String>,
    pub modalidad: Option<String>,
    /// `REGULAR` or `CURSO`.
    pub tipo_estudiante: String,
    /// `ACTIVO` or `INACTIVO`; `None` is treated as active.
    pub estado: Option<String>,
    pub curso_extra_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Student {
    pub fn nombre_completo(&self) -> String {
        format!("{} {}", self.nombre, self.apellidos)
    }
}

/// DTO for creating a new student.
#[derive(Debug, Deserialize)]
pub struct CreateStudent {
    pub nombre: String,
    pub apellidos: String,
    pub grado: Option<String>,
    pub jornada: Option<String>,
    pub modalidad: Option<String>,
    pub tipo_estudiante: Option<String>,
    pub estado: Option<String>,
    pub curso_extra_id: Option<DbId>,
}

/// DTO for updating an existing student. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateStudent {
    pub nombre: Option<String>,
    pub apellidos: Option<String>,
    pub grado: Option<String>,
    pub jornada: Option<String>,
    pub modalidad: Option<String>,
    pub tipo_estudiante: Option<String>,
    pub estado: Option<String>,
    pub curso_extra_id: Option<DbId>,
}

/// Student row joined with its extra course, for the search endpoints.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentConCurso {
    pub id: DbId,
    pub nombre: String,
    pub apellidos: String,
    pub grado: Option<String>,
    pub jornada: Option<String>,
    pub modalidad: Option<String>,
    pub tipo_estudiante: String,
    pub curso_extra_id: Option<DbId>,
    pub curso_nombre: Option<String>,
}

/// Minimal classification columns for the statistics endpoints.
#[derive(Debug, Clone, FromRow)]
pub struct StudentClasificacion {
    pub estado: Option<String>,
    pub tipo_estudiante: String,
    pub jornada: Option<String>,
    pub modalidad: Option<String>,
    pub curso_extra_id: Option<DbId>,
}
