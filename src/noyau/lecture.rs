// src/noyau/lecture.rs
//
// Lecture décimale d’un rationnel (affichage RESULT).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed};

/// Garde-fou : précision d’affichage maximale.
pub const CHIFFRES_MAX: usize = 200;

/// Précision d’affichage par défaut.
pub const CHIFFRES_DEFAUT: usize = 10;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal tronqué.
fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    format!("{signe}{int_part}.{frac}")
}

/// r -> entier “scalé” = trunc(r * 10^digits) (vers zéro)
fn rational_scaled(r: &BigRational, digits: usize) -> BigInt {
    (r.numer() * pow10(digits)) / r.denom()
}

/// Texte du résultat :
/// - entier => "n"
/// - sinon  => décimal tronqué à `chiffres`, zéros finaux retirés
///
/// Un non-entier qui tronque à zéro garde son signe ("-0.0001" avec 4 chiffres, "-0" avec 3).
pub fn format_nombre(r: &BigRational, chiffres: usize) -> String {
    if r.denom().is_one() {
        return format!("{}", r.numer());
    }

    let chiffres = chiffres.min(CHIFFRES_MAX);
    let scaled = rational_scaled(r, chiffres);

    let mut txt = scaled_to_decimal(scaled, chiffres);
    if txt.contains('.') {
        while txt.ends_with('0') {
            txt.pop();
        }
        if txt.ends_with('.') {
            txt.pop();
        }
    }
    if r.is_negative() && !txt.starts_with('-') {
        txt.insert(0, '-');
    }
    txt
}
