//! Uniform category resolution.
//!
//! Maps a student's modalidad and grado to the single uniform category
//! whose garments apply. The rules are an ordered decision table over
//! lowercased text; order matters because grade keywords overlap across
//! tiers (a weekend-shift "9no" wears the weekend uniform, not the
//! basics-tier one).

use std::cmp::Ordering;

/// The three uniform categories the school stocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoriaUniforme {
    /// Weekend shift: same garments for every career.
    FinDeSemana,
    /// Basic grades (7mo-9no) and all diversified careers.
    BasicosYCarrera,
    /// Kinder, prepa and primary.
    KinderYPrimaria,
}

impl CategoriaUniforme {
    /// Display name matching the `uniform_categories.nombre` column.
    pub fn nombre(&self) -> &'static str {
        match self {
            CategoriaUniforme::FinDeSemana => "Fin de Semana",
            CategoriaUniforme::BasicosYCarrera => "Básicos y Carrera",
            CategoriaUniforme::KinderYPrimaria => "Kinder y Primaria",
        }
    }
}

const MODALIDADES_FIN_DE_SEMANA: &[&str] = &["fin de semana", "sabatino", "sabado"];

const GRADOS_BASICOS: &[&str] = &["7mo", "8vo", "9no"];

const CARRERAS: &[&str] = &[
    "baco",
    "pcb",
    "fcb",
    "bach",
    "perito",
    "secretariado",
    "magisterio",
    "diversificado",
    "cc y ll",
    "mecánica",
    "mecanica",
    "electricidad",
    "diseño",
    "diseno",
    "compu",
];

const GRADOS_KINDER_PRIMARIA: &[&str] = &[
    "kinder",
    "prepa",
    "prep",
    "preprimaria",
    "párvulos",
    "parvulos",
    "primaria",
];

/// Resolve the uniform category for a student.
///
/// Returns `None` when neither modalidad nor grado matches any tier; the
/// caller is expected to fall back to showing every category rather than
/// failing.
pub fn resolver_categoria(modalidad: &str, grado: &str) -> Option<CategoriaUniforme> {
    let modalidad = modalidad.trim().to_lowercase();
    let grado = grado.trim().to_lowercase();

    // 1. Fin de semana: la modalidad manda, sin importar el grado.
    if MODALIDADES_FIN_DE_SEMANA.iter().any(|m| modalidad.contains(m)) {
        return Some(CategoriaUniforme::FinDeSemana);
    }

    // 2. Básicos y carrera, en cualquier jornada diaria.
    let es_basico = GRADOS_BASICOS.iter().any(|g| grado.contains(g))
        || ((grado.contains("básico") || grado.contains("basico"))
            && !grado.contains("primaria"));
    let es_carrera = CARRERAS.iter().any(|c| grado.contains(c));
    if es_basico || es_carrera {
        return Some(CategoriaUniforme::BasicosYCarrera);
    }

    // 3. Kinder y primaria.
    if GRADOS_KINDER_PRIMARIA.iter().any(|g| grado.contains(g)) {
        return Some(CategoriaUniforme::KinderYPrimaria);
    }

    None
}

/// Order sizes for inventory reports: numeric sizes ascending first, then
/// letter sizes in XS..XXL order, unknown letters last.
pub fn comparar_tallas(a: &str, b: &str) -> Ordering {
    const ORDEN_LETRAS: &[&str] = &["XS", "S", "M", "L", "XL", "XXL"];

    let posicion = |talla: &str| {
        ORDEN_LETRAS
            .iter()
            .position(|t| *t == talla)
            .unwrap_or(ORDEN_LETRAS.len())
    };

    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => posicion(a).cmp(&posicion(b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fin_de_semana_gana_sobre_grado_basico() {
        // Regla 1 precede a la regla 2 aunque el grado sea "9no".
        assert_eq!(
            resolver_categoria("Fin de Semana", "9no"),
            Some(CategoriaUniforme::FinDeSemana)
        );
    }

    #[test]
    fn variantes_de_modalidad_sabatina() {
        assert_eq!(
            resolver_categoria("Plan Sabatino", "Prepa"),
            Some(CategoriaUniforme::FinDeSemana)
        );
        assert_eq!(
            resolver_categoria("sabado", "4to Primaria"),
            Some(CategoriaUniforme::FinDeSemana)
        );
    }

    #[test]
    fn grados_basicos() {
        for grado in ["7mo", "8vo", "9no", "2do. Básico", "1ro Basico"] {
            assert_eq!(
                resolver_categoria("Matutina", grado),
                Some(CategoriaUniforme::BasicosYCarrera),
                "grado {grado}"
            );
        }
    }

    #[test]
    fn basico_por_primaria_no_cuenta_como_basico() {
        // "básico" junto a "primaria" cae en la categoría de primaria.
        assert_eq!(
            resolver_categoria("Matutina", "Nivel básico primaria"),
            Some(CategoriaUniforme::KinderYPrimaria)
        );
    }

    #[test]
    fn carreras_diversificado() {
        for grado in [
            "5to BACO",
            "6to PCB en Compu",
            "5to. BACH en Mecánica",
            "4to Perito Contador",
            "Secretariado Bilingüe",
        ] {
            assert_eq!(
                resolver_categoria("Vespertina", grado),
                Some(CategoriaUniforme::BasicosYCarrera),
                "grado {grado}"
            );
        }
    }

    #[test]
    fn kinder_y_primaria() {
        for grado in ["Kinder", "Prepa", "Párvulos", "3ro Primaria"] {
            assert_eq!(
                resolver_categoria("Matutina", grado),
                Some(CategoriaUniforme::KinderYPrimaria),
                "grado {grado}"
            );
        }
    }

    #[test]
    fn nivel_desconocido_no_resuelve() {
        assert_eq!(resolver_categoria("Matutina", "Intercambio"), None);
        assert_eq!(resolver_categoria("", ""), None);
    }

    #[test]
    fn orden_de_tallas_numericas_primero() {
        let mut tallas = vec!["M", "10", "XS", "4", "XXL", "L"];
        tallas.sort_by(|a, b| comparar_tallas(a, b));
        assert_eq!(tallas, vec!["4", "10", "XS", "M", "L", "XXL"]);
    }
}
