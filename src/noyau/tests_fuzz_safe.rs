//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - référence indépendante : évaluation gauche->droite par niveau de précédence
//! - les seules erreurs acceptées sont celles du domaine (division par zéro, etc.)

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use super::erreur::EvalError;
use super::evaluate_expression;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération (sans parenthèses) ------------------------ */

const OPS: [char; 4] = ['+', '-', '*', '/'];

/// "d op d op d ..." avec des chiffres seuls.
fn gen_plat(rng: &mut Rng, n_ops: usize) -> (Vec<i64>, Vec<char>) {
    let mut nombres = vec![i64::from(rng.pick(10))];
    let mut ops = Vec::with_capacity(n_ops);
    for _ in 0..n_ops {
        ops.push(OPS[rng.pick(4) as usize]);
        nombres.push(i64::from(rng.pick(10)));
    }
    (nombres, ops)
}

fn texte(nombres: &[i64], ops: &[char]) -> String {
    let mut s = nombres[0].to_string();
    for (op, n) in ops.iter().zip(&nombres[1..]) {
        s.push(*op);
        s.push_str(&n.to_string());
    }
    s
}

/* ------------------------ Référence gauche->droite ------------------------ */

/// Deux passes : d’abord * / de gauche à droite, puis + - de gauche à droite.
fn reference(nombres: &[i64], ops: &[char]) -> Result<BigRational, EvalError> {
    let q = |n: i64| BigRational::from_integer(BigInt::from(n));

    // passe 1 : termes
    let mut termes = vec![q(nombres[0])];
    let mut additifs = Vec::new();
    for (op, n) in ops.iter().zip(&nombres[1..]) {
        let v = q(*n);
        match op {
            '*' => {
                let t = termes.pop().unwrap_or_else(BigRational::zero);
                termes.push(t * v);
            }
            '/' => {
                if v.is_zero() {
                    return Err(EvalError::DivideByZero);
                }
                let t = termes.pop().unwrap_or_else(BigRational::zero);
                termes.push(t / v);
            }
            _ => {
                additifs.push(*op);
                termes.push(v);
            }
        }
    }

    // passe 2 : somme
    let mut acc = termes[0].clone();
    for (op, t) in additifs.iter().zip(termes.into_iter().skip(1)) {
        if *op == '+' {
            acc += t;
        } else {
            acc -= t;
        }
    }
    Ok(acc)
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_accord_avec_reference() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let n_ops = rng.pick(7) as usize;
        let (nombres, ops) = gen_plat(&mut rng, n_ops);
        let expr = texte(&nombres, &ops);

        let attendu = reference(&nombres, &ops);
        let obtenu = evaluate_expression(&expr);
        assert_eq!(obtenu, attendu, "désaccord pour {expr:?}");

        if obtenu.is_ok() {
            seen_ok += 1;
        } else {
            seen_err += 1;
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 100, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune division par zéro vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_parentheses_neutres() {
    // Entourer l’expression entière de parenthèses ne change rien.
    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..100 {
        let n_ops = rng.pick(6) as usize;
        let (nombres, ops) = gen_plat(&mut rng, n_ops);
        let expr = texte(&nombres, &ops);

        assert_eq!(
            evaluate_expression(&format!("({expr})")),
            evaluate_expression(&expr),
            "parenthèses externes changent {expr:?}"
        );
    }
}

#[test]
fn fuzz_safe_longue_chaine() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // 1+1+...+1 (2000 termes) : pile RPN bornée, pas de récursion
    let expr = vec!["1"; 2000].join("+");
    let r = evaluate_expression(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    assert_eq!(r, BigRational::from_integer(BigInt::from(2000)));
}
