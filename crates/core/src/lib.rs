//! Domain rules for the school administration backend.
//!
//! Pure logic only: late-fee policy, graduation eligibility, uniform
//! category resolution, receipt numbering, and the in-memory reductions
//! used by the reporting endpoints. No I/O lives here.

pub mod error;
pub mod graduacion;
pub mod mora;
pub mod pagos;
pub mod recibo;
pub mod reportes;
pub mod types;
pub mod uniformes;
