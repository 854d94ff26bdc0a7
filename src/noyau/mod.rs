//! Noyau postfixe
//!
//! Organisation interne :
//! - jetons.rs   : tokenisation (Token, Operateur)
//! - rpn.rs      : shunting-yard -> RPN
//! - eval.rs     : pile de valeurs + pipeline complet
//! - erreur.rs   : EvalError
//! - options.rs  : lecture des nombres, regroupement, parenthèses strictes
//! - lecture.rs  : affichage décimal tronqué

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod lecture;
pub mod options;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::EvalError;
pub use eval::{evaluate_expression, evaluate_with, Evaluation};
pub use lecture::format_nombre;
pub use options::{Lecture, Options, Regroupement};
