//! Payment category catalog.
//!
//! The school charges single-shot fees across seven category tables that
//! share one row shape, plus tuition, graduation, and extra-course
//! payments with shapes of their own. [`TipoPago`] is the typed mapping
//! from category to its table, replacing the stringly-typed table lookup
//! the reporting layer would otherwise need. [`FUENTES_INGRESO`] is the
//! declarative source list every cross-category aggregate iterates.

use serde::Serialize;

/// Single-shot fee categories (one table per category, identical shape).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TipoPago {
    Inscripcion,
    Uniforme,
    LibrosLectura,
    CopiasAnuales,
    LibroIngles,
    Excursion,
    Especialidad,
}

impl TipoPago {
    pub const TODOS: [TipoPago; 7] = [
        TipoPago::Inscripcion,
        TipoPago::Uniforme,
        TipoPago::LibrosLectura,
        TipoPago::CopiasAnuales,
        TipoPago::LibroIngles,
        TipoPago::Excursion,
        TipoPago::Especialidad,
    ];

    /// URL slug used in `/api/pagos/estudiante/{id}/{tipoPago}`.
    pub fn from_slug(slug: &str) -> Option<TipoPago> {
        match slug {
            "inscripcion" => Some(TipoPago::Inscripcion),
            "uniforme" => Some(TipoPago::Uniforme),
            "libros_lectura" => Some(TipoPago::LibrosLectura),
            "copias_anuales" => Some(TipoPago::CopiasAnuales),
            "libro_ingles" => Some(TipoPago::LibroIngles),
            "excursion" => Some(TipoPago::Excursion),
            "especialidad" => Some(TipoPago::Especialidad),
            _ => None,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            TipoPago::Inscripcion => "inscripcion",
            TipoPago::Uniforme => "uniforme",
            TipoPago::LibrosLectura => "libros_lectura",
            TipoPago::CopiasAnuales => "copias_anuales",
            TipoPago::LibroIngles => "libro_ingles",
            TipoPago::Excursion => "excursion",
            TipoPago::Especialidad => "especialidad",
        }
    }

    /// Backing table name.
    pub fn tabla(&self) -> &'static str {
        match self {
            TipoPago::Inscripcion => "pago_inscripcion",
            TipoPago::Uniforme => "pago_uniforme",
            TipoPago::LibrosLectura => "pago_libros_lectura",
            TipoPago::CopiasAnuales => "pago_copias_anuales",
            TipoPago::LibroIngles => "pago_libro_ingles",
            TipoPago::Excursion => "pago_excursion",
            TipoPago::Especialidad => "pago_especialidad",
        }
    }

    /// Human-readable name for receipts and reports.
    pub fn nombre(&self) -> &'static str {
        match self {
            TipoPago::Inscripcion => "Inscripción",
            TipoPago::Uniforme => "Uniforme",
            TipoPago::LibrosLectura => "Libros de Lectura",
            TipoPago::CopiasAnuales => "Copias Anuales",
            TipoPago::LibroIngles => "Libro de Inglés",
            TipoPago::Excursion => "Excursión",
            TipoPago::Especialidad => "Especialidad",
        }
    }

    /// Uppercase label used by the dashboard grouping endpoints.
    pub fn etiqueta(&self) -> &'static str {
        match self {
            TipoPago::Inscripcion => "INSCRIPCIÓN",
            TipoPago::Uniforme => "UNIFORMES",
            TipoPago::LibrosLectura => "LIBROS LECTURA",
            TipoPago::CopiasAnuales => "COPIAS ANUALES",
            TipoPago::LibroIngles => "LIBRO INGLÉS",
            TipoPago::Excursion => "EXCURSIÓN",
            TipoPago::Especialidad => "ESPECIALIDAD",
        }
    }
}

/// One income source for the cross-category dashboard aggregates.
#[derive(Debug, Clone, Copy)]
pub struct FuenteIngreso {
    /// Table to query.
    pub tabla: &'static str,
    /// Column holding the amount actually received.
    pub campo: &'static str,
    /// Display label for by-type groupings.
    pub etiqueta: &'static str,
}

/// Every payment table that contributes income, with the column that
/// counts as received money in each.
pub static FUENTES_INGRESO: [FuenteIngreso; 10] = [
    FuenteIngreso {
        tabla: "pago_colegiaturas",
        campo: "total_pagado",
        etiqueta: "COLEGIATURAS",
    },
    FuenteIngreso {
        tabla: "pago_inscripcion",
        campo: "monto_adelanto",
        etiqueta: "INSCRIPCIÓN",
    },
    FuenteIngreso {
        tabla: "pago_uniforme",
        campo: "monto_adelanto",
        etiqueta: "UNIFORMES",
    },
    FuenteIngreso {
        tabla: "pago_libros_lectura",
        campo: "monto_adelanto",
        etiqueta: "LIBROS LECTURA",
    },
    FuenteIngreso {
        tabla: "pago_copias_anuales",
        campo: "monto_adelanto",
        etiqueta: "COPIAS ANUALES",
    },
    FuenteIngreso {
        tabla: "pago_libro_ingles",
        campo: "monto_adelanto",
        etiqueta: "LIBRO INGLÉS",
    },
    FuenteIngreso {
        tabla: "pago_excursion",
        campo: "monto_adelanto",
        etiqueta: "EXCURSIÓN",
    },
    FuenteIngreso {
        tabla: "pago_especialidad",
        campo: "monto_adelanto",
        etiqueta: "ESPECIALIDAD",
    },
    FuenteIngreso {
        tabla: "graduation_payments",
        campo: "paid_amount",
        etiqueta: "GRADUACIÓN",
    },
    FuenteIngreso {
        tabla: "course_payments",
        campo: "amount",
        etiqueta: "CURSOS EXTRA",
    },
];

/// Tables carrying a `mora` column, for the late-fee total.
pub static TABLAS_CON_MORA: [&str; 8] = [
    "pago_colegiaturas",
    "pago_inscripcion",
    "pago_uniforme",
    "pago_libros_lectura",
    "pago_copias_anuales",
    "pago_libro_ingles",
    "pago_excursion",
    "pago_especialidad",
];
