//! HTTP handler functions, one module per resource.

pub mod auth;
pub mod colegiaturas;
pub mod cursos;
pub mod dashboard;
pub mod estudiantes;
pub mod graduacion;
pub mod pagos;
pub mod uniformes;
