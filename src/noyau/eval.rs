//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN (shunting-yard) -> pile de valeurs -> résultat exact
//!
//! Chaque appel repart de zéro : aucune pile ni jeton ne survit à l’évaluation.

use log::debug;
use num_rational::BigRational;
use num_traits::Zero;

use super::erreur::{EvalError, Result};
use super::jetons::{format_tokens, tokenize_with, Operateur, Token};
use super::options::Options;
use super::rpn::to_postfix_with;

/// Résultat complet : valeur + étapes intermédiaires (pour la “démarche”).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub valeur: BigRational,
    pub jetons: Vec<Token>,
    pub postfix: Vec<Token>,
}

/// API publique : évalue une expression avec les options par défaut.
pub fn evaluate_expression(expr_str: &str) -> Result<BigRational> {
    evaluate_with(expr_str, &Options::default()).map(|ev| ev.valeur)
}

/// Pipeline complet avec options, garde les jetons et la RPN.
pub fn evaluate_with(expr_str: &str, options: &Options) -> Result<Evaluation> {
    // 1) Jetons
    let jetons = tokenize_with(expr_str, options.lecture)?;
    debug!("jetons: {}", format_tokens(&jetons));

    // 2) RPN
    let postfix = to_postfix_with(&jetons, options)?;

    // 3) Pile de valeurs
    let valeur = evaluate(&postfix)?;

    Ok(Evaluation {
        valeur,
        jetons,
        postfix,
    })
}

/// Évalue une suite postfixe.
///
/// Le premier dépilé est l’opérande de DROITE : `a b -` vaut `a - b`.
pub fn evaluate(postfix: &[Token]) -> Result<BigRational> {
    let mut pile: Vec<BigRational> = Vec::with_capacity(postfix.len());

    for tok in postfix {
        match tok {
            Token::Value(r) => pile.push(r.clone()),

            Token::Operator(op) => {
                let num2 = pile.pop().ok_or(EvalError::StackUnderflow)?;
                let num1 = pile.pop().ok_or(EvalError::StackUnderflow)?;
                pile.push(applique(*op, num1, num2)?);
            }

            // La RPN ne devrait contenir aucune parenthèse ; une '(' orpheline
            // arrive ici en mode tolérant.
            Token::LeftParen | Token::RightParen => {
                return Err(EvalError::UnexpectedToken {
                    jeton: format_tokens(std::slice::from_ref(tok)),
                    position: None,
                });
            }
        }
    }

    if pile.len() != 1 {
        return Err(EvalError::MalformedExpression {
            restant: pile.len(),
        });
    }
    pile.pop().ok_or(EvalError::MalformedExpression { restant: 0 })
}

fn applique(op: Operateur, num1: BigRational, num2: BigRational) -> Result<BigRational> {
    Ok(match op {
        Operateur::Plus => num1 + num2,
        Operateur::Moins => num1 - num2,
        Operateur::Fois => num1 * num2,
        Operateur::Divise => {
            if num2.is_zero() {
                return Err(EvalError::DivideByZero);
            }
            num1 / num2
        }
    })
}
