// src/noyau/erreur.rs
//
// Taxonomie des échecs du noyau.
// Chaque étape (jetons, RPN, évaluation) retourne un Result<_, EvalError> :
// pas de panique, pas de résultat partiel.

use thiserror::Error;

/// Échec d’une évaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Caractère non classable (jetons) ou parenthèse arrivée jusqu’à l’évaluation.
    /// `position` = index du caractère dans l’entrée, `None` hors tokenisation.
    #[error("jeton inattendu : '{jeton}'{}", fmt_position(.position))]
    UnexpectedToken {
        jeton: String,
        position: Option<usize>,
    },

    #[error("division par zéro")]
    DivideByZero,

    /// Un opérateur n’a pas trouvé ses deux opérandes.
    #[error("pile de valeurs vide : opérande manquant")]
    StackUnderflow,

    /// Il ne reste pas exactement une valeur à la fin.
    #[error("expression mal formée ({restant} valeur(s) restante(s) au lieu de 1)")]
    MalformedExpression { restant: usize },

    /// Mode parenthèses strictes seulement. `position` = index du jeton ')' orphelin.
    #[error("parenthèses non équilibrées{}", fmt_position(.position))]
    UnbalancedParentheses { position: Option<usize> },
}

fn fmt_position(position: &Option<usize>) -> String {
    match position {
        Some(p) => format!(" (position {p})"),
        None => String::new(),
    }
}

pub type Result<T, E = EvalError> = std::result::Result<T, E>;
