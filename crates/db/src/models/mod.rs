//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod colegiatura;
pub mod curso;
pub mod graduacion;
pub mod mes;
pub mod metodo_pago;
pub mod pago_categoria;
pub mod resumen;
pub mod student;
pub mod uniforme;
pub mod user;
