//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod colegiatura_repo;
pub mod curso_repo;
pub mod dashboard_repo;
pub mod graduacion_repo;
pub mod mes_repo;
pub mod metodo_pago_repo;
pub mod pago_categoria_repo;
pub mod student_repo;
pub mod uniforme_repo;
pub mod user_repo;

pub use colegiatura_repo::ColegiaturaRepo;
pub use curso_repo::CursoRepo;
pub use dashboard_repo::DashboardRepo;
pub use graduacion_repo::GraduacionRepo;
pub use mes_repo::MesRepo;
pub use metodo_pago_repo::MetodoPagoRepo;
pub use pago_categoria_repo::PagoCategoriaRepo;
pub use student_repo::StudentRepo;
pub use uniforme_repo::UniformeRepo;
pub use user_repo::UserRepo;
