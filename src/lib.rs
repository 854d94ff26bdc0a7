//! Calculatrice postfixe
//!
//! Noyau : texte -> jetons -> RPN (shunting-yard) -> pile de valeurs -> résultat exact.
//! Les coquilles (console, fenêtre egui) vivent dans le binaire.

pub mod noyau;

pub use noyau::{evaluate_expression, EvalError};
