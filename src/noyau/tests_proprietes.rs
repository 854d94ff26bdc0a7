//! Propriétés du pipeline complet (texte -> résultat).

use num_bigint::BigInt;
use num_rational::BigRational;

use super::erreur::EvalError;
use super::options::{Lecture, Options, Regroupement};
use super::{evaluate_expression, evaluate_with};

fn entier(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

fn ok(s: &str) -> BigRational {
    evaluate_expression(s).unwrap_or_else(|e| panic!("evaluate_expression({s:?}) erreur: {e}"))
}

fn ok_opts(s: &str, options: &Options) -> BigRational {
    evaluate_with(s, options)
        .unwrap_or_else(|e| panic!("evaluate_with({s:?}) erreur: {e}"))
        .valeur
}

// --- Cas de référence ---

#[test]
fn addition_simple() {
    assert_eq!(ok("1+2"), entier(3));
}

#[test]
fn precedence_multiplication() {
    assert_eq!(ok("2*3+4"), entier(10));
    assert_eq!(ok("4+2*3"), entier(10));
}

#[test]
fn soustraction_gauche_a_droite() {
    assert_eq!(ok("9-3-2"), entier(4));
    assert_eq!(ok("8/4/2"), entier(1));
    assert_eq!(ok("9-3+2"), entier(8));
    assert_eq!(ok("8/4*2"), entier(4));
}

#[test]
fn parentheses_prioritaires() {
    assert_eq!(ok("(1+2)*3"), entier(9));
    assert_eq!(ok("9-(3-2)"), entier(8));
    assert_eq!(ok("((2))"), entier(2));
}

#[test]
fn espaces_ignores() {
    assert_eq!(ok("  ( 1 + 2 ) * 3 "), entier(9));
}

// --- Échecs ---

#[test]
fn division_par_zero() {
    assert_eq!(evaluate_expression("5/0"), Err(EvalError::DivideByZero));
}

#[test]
fn caractere_inattendu() {
    assert!(matches!(
        evaluate_expression("5&3"),
        Err(EvalError::UnexpectedToken { .. })
    ));
    assert!(matches!(
        evaluate_expression("x+1"),
        Err(EvalError::UnexpectedToken { .. })
    ));
}

#[test]
fn entree_vide() {
    assert_eq!(
        evaluate_expression(""),
        Err(EvalError::MalformedExpression { restant: 0 })
    );
    assert_eq!(
        evaluate_expression("   "),
        Err(EvalError::MalformedExpression { restant: 0 })
    );
}

#[test]
fn operande_manquant() {
    assert_eq!(evaluate_expression("+"), Err(EvalError::StackUnderflow));
    assert_eq!(evaluate_expression("2*"), Err(EvalError::StackUnderflow));
}

#[test]
fn plusieurs_chiffres_en_lecture_caractere() {
    assert_eq!(
        evaluate_expression("12"),
        Err(EvalError::MalformedExpression { restant: 2 })
    );
}

// --- Parenthèses orphelines ---

#[test]
fn parentheses_orphelines_mode_tolerant() {
    assert_eq!(ok("1+2)"), entier(3));
    assert!(matches!(
        evaluate_expression("(1+2"),
        Err(EvalError::UnexpectedToken { .. })
    ));
}

#[test]
fn parentheses_orphelines_mode_strict() {
    let o = Options {
        parentheses_strictes: true,
        ..Options::default()
    };
    assert!(matches!(
        evaluate_with("1+2)", &o),
        Err(EvalError::UnbalancedParentheses { .. })
    ));
    assert!(matches!(
        evaluate_with("(1+2", &o),
        Err(EvalError::UnbalancedParentheses { .. })
    ));
    assert_eq!(ok_opts("(1+2)*3", &o), entier(9));
}

// --- Options ---

#[test]
fn lecture_nombre() {
    let o = Options {
        lecture: Lecture::Nombre,
        ..Options::default()
    };
    assert_eq!(ok_opts("12", &o), entier(12));
    assert_eq!(ok_opts("1.5*2", &o), entier(3));
    assert_eq!(ok_opts("100-25-5", &o), entier(70));
    assert_eq!(
        ok_opts("0.1+0.2", &o),
        BigRational::new(BigInt::from(3), BigInt::from(10))
    );
}

#[test]
fn regroupement_historique() {
    let o = Options {
        regroupement: Regroupement::Historique,
        ..Options::default()
    };
    assert_eq!(ok_opts("9-3-2", &o), entier(8));
    assert_eq!(ok_opts("2*3+4", &o), entier(10));
    assert_eq!(ok_opts("(1+2)*3", &o), entier(9));
}

// --- Déterminisme ---

#[test]
fn idempotence() {
    for s in ["1+2", "9-3-2", "(1+2)*3", "7/3", "5/0", "5&3", ""] {
        assert_eq!(evaluate_expression(s), evaluate_expression(s));
    }
    let a = evaluate_with("(4-1)/2", &Options::default()).unwrap();
    let b = evaluate_with("(4-1)/2", &Options::default()).unwrap();
    assert_eq!(a, b);
}
