//! Late-fee ("mora") policy for monthly payments.
//!
//! A fixed 30.00 surcharge applies to tuition and extra-course payments
//! registered after the 5th of the month being paid, for school months
//! February through October. January, November, December and unrecognized
//! months never carry a fee.
//!
//! The fee is computed once at registration time and stored with the
//! payment row; it is never recomputed afterwards.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

/// Fixed surcharge, in currency units, for an overdue monthly payment.
pub fn tarifa_mora() -> Decimal {
    Decimal::new(3000, 2)
}

/// Map a Spanish month name (case-insensitive) or a numeric string to its
/// 1-12 index. Returns `None` for anything unrecognized.
pub fn numero_mes(mes: &str) -> Option<u32> {
    let normalizado = mes.trim().to_uppercase();
    let numero = match normalizado.as_str() {
        "ENERO" => 1,
        "FEBRERO" => 2,
        "MARZO" => 3,
        "ABRIL" => 4,
        "MAYO" => 5,
        "JUNIO" => 6,
        "JULIO" => 7,
        "AGOSTO" => 8,
        "SEPTIEMBRE" => 9,
        "OCTUBRE" => 10,
        "NOVIEMBRE" => 11,
        "DICIEMBRE" => 12,
        otro => return otro.parse().ok().filter(|n| (1..=12).contains(n)),
    };
    Some(numero)
}

/// Late fee for paying month `mes` (1-12) on the date `hoy`.
///
/// Due date is the 5th of the target month in `hoy`'s year; the fee
/// applies strictly after that day. Both the tuition and the extra-course
/// registration paths use this single rule.
pub fn calcular_mora(mes: u32, hoy: NaiveDate) -> Decimal {
    if !(2..=10).contains(&mes) {
        return Decimal::ZERO;
    }

    // Months 2-10 always have a 5th, so the unwrap_or keeps this total
    // without a panic path.
    let vencimiento =
        NaiveDate::from_ymd_opt(hoy.year(), mes, 5).unwrap_or(hoy);

    if hoy > vencimiento {
        tarifa_mora()
    } else {
        Decimal::ZERO
    }
}

/// Late fee for a month given by name. Unrecognized names never incur a fee.
pub fn calcular_mora_por_nombre(mes: &str, hoy: NaiveDate) -> Decimal {
    match numero_mes(mes) {
        Some(numero) => calcular_mora(numero, hoy),
        None => Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn fecha(anio: i32, mes: u32, dia: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(anio, mes, dia).unwrap()
    }

    #[test]
    fn meses_elegibles_despues_del_dia_cinco() {
        for mes in 2..=10 {
            assert_eq!(
                calcular_mora(mes, fecha(2024, mes, 6)),
                dec!(30.00),
                "mes {mes} debe llevar mora el dia 6"
            );
        }
    }

    #[test]
    fn meses_elegibles_en_o_antes_del_dia_cinco() {
        for mes in 2..=10 {
            assert_eq!(calcular_mora(mes, fecha(2024, mes, 5)), Decimal::ZERO);
            assert_eq!(calcular_mora(mes, fecha(2024, mes, 1)), Decimal::ZERO);
        }
    }

    #[test]
    fn meses_exentos_nunca_llevan_mora() {
        for mes in [1, 11, 12] {
            assert_eq!(calcular_mora(mes, fecha(2024, 12, 31)), Decimal::ZERO);
        }
    }

    #[test]
    fn pago_adelantado_de_mes_futuro_sin_mora() {
        // Pagando marzo el 20 de febrero: aun no pasa el 5 de marzo.
        assert_eq!(calcular_mora(3, fecha(2024, 2, 20)), Decimal::ZERO);
    }

    #[test]
    fn pago_atrasado_de_mes_anterior_con_mora() {
        // Pagando febrero en abril: muy pasado el 5 de febrero.
        assert_eq!(calcular_mora(2, fecha(2024, 4, 2)), dec!(30.00));
    }

    #[test]
    fn nombre_de_mes_reconocido() {
        assert_eq!(numero_mes("FEBRERO"), Some(2));
        assert_eq!(numero_mes("febrero"), Some(2));
        assert_eq!(numero_mes(" Octubre "), Some(10));
        assert_eq!(numero_mes("7"), Some(7));
    }

    #[test]
    fn nombre_de_mes_desconocido() {
        assert_eq!(numero_mes("FEBTEMBER"), None);
        assert_eq!(numero_mes("13"), None);
        assert_eq!(numero_mes(""), None);
    }

    #[test]
    fn nombre_desconocido_nunca_lleva_mora() {
        assert_eq!(
            calcular_mora_por_nombre("FEBTEMBER", fecha(2024, 6, 30)),
            Decimal::ZERO
        );
    }

    #[test]
    fn por_nombre_coincide_con_por_numero() {
        assert_eq!(
            calcular_mora_por_nombre("MARZO", fecha(2024, 3, 10)),
            dec!(30.00)
        );
        assert_eq!(
            calcular_mora_por_nombre("ENERO", fecha(2024, 1, 31)),
            Decimal::ZERO
        );
    }
}
