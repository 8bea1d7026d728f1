//! Receipt number generation.
//!
//! Format: `{PREFIX}-{year}-{serial}` where the serial is the last six
//! digits of the epoch-milliseconds clock at emission time. Not globally
//! unique, only practically unlikely to collide within a school office.

/// Three-letter prefix for a category slug ("inscripcion" -> "INS").
pub fn prefijo_tipo(slug: &str) -> String {
    slug.chars().take(3).collect::<String>().to_uppercase()
}

/// Build a receipt number from a prefix, year, and epoch milliseconds.
pub fn numero_recibo(prefijo: &str, anio: i32, epoch_millis: i64) -> String {
    let serial = epoch_millis.rem_euclid(1_000_000);
    format!("{}-{}-{:06}", prefijo.to_uppercase(), anio, serial)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formato_de_recibo() {
        let recibo = numero_recibo("COL", 2025, 1_736_961_234_567);
        assert_eq!(recibo, "COL-2025-234567");
    }

    #[test]
    fn serial_con_ceros_a_la_izquierda() {
        let recibo = numero_recibo("GRA", 2025, 1_000_000_000_042);
        assert_eq!(recibo, "GRA-2025-000042");
    }

    #[test]
    fn coincide_con_el_patron_esperado() {
        let recibo = numero_recibo(&prefijo_tipo("inscripcion"), 2025, 1_736_961_234_567);
        // ^[A-Z]{3}-\d{4}-\d{6}$
        let partes: Vec<&str> = recibo.split('-').collect();
        assert_eq!(partes.len(), 3);
        assert_eq!(partes[0], "INS");
        assert_eq!(partes[0].len(), 3);
        assert!(partes[0].chars().all(|c| c.is_ascii_uppercase()));
        assert_eq!(partes[1].len(), 4);
        assert!(partes[1].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(partes[2].len(), 6);
        assert!(partes[2].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn prefijos_por_tipo() {
        assert_eq!(prefijo_tipo("uniforme"), "UNI");
        assert_eq!(prefijo_tipo("excursion"), "EXC");
        assert_eq!(prefijo_tipo("libros_lectura"), "LIB");
    }
}
