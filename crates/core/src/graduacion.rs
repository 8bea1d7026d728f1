//! Graduation-fee eligibility.
//!
//! Eligibility is decided purely from the student's grade string against a
//! fixed allow-list of terminal grades across every program track and
//! shift. Matching is substring containment after normalization, so
//! variant phrasing ("5to. BACH en Diseño" vs "5TO BACH EN DISEÑO")
//! resolves to the same answer.

/// Grades that qualify for the graduation fee (all shifts and tracks).
const GRADOS_GRADUACION: &[&str] = &[
    "5to Baco",
    "6to PCB",
    "Prepa",
    // Diario matutina
    "9no",
    // Diario vespertina
    "5to. BACH en Diseño",
    "5to. BACH en Mecánica",
    "5to. BACH en Electricidad",
    // Fin de semana
    "3ro. Básico",
    "3ro Basico",
    "2do. Año - Basico por Madurez",
    "5to. BACO Comercial",
    "6to. PCB en Compu",
    "BACH por Madurez",
];

/// Trim, uppercase and strip periods for flexible comparison.
fn normalizar(grado: &str) -> String {
    grado.trim().to_uppercase().replace('.', "")
}

/// Whether a grade qualifies for the graduation fee.
///
/// An empty or whitespace-only grade never qualifies.
pub fn aplica_graduacion(grado: &str) -> bool {
    let normalizado = normalizar(grado);
    if normalizado.is_empty() {
        return false;
    }
    GRADOS_GRADUACION
        .iter()
        .any(|candidato| normalizado.contains(&normalizar(candidato)))
}
