// src/noyau/rpn.rs
//
// Shunting-yard : jetons infixes -> RPN (postfix)
//
// Règles:
// - Value        : sortie directe
// - LeftParen    : empilée
// - Operator op  : dépile tant que le sommet est un opérateur qui doit passer avant op
//                  (Gauche : précédence >=, Historique : précédence >), puis empile op
// - RightParen   : dépile jusqu’à '(' (jetée). Sans '(' : arrêt silencieux (mode tolérant)
// - fin          : vide la pile, '(' orphelines comprises (mode tolérant)
//
// En mode parenthèses strictes, toute parenthèse orpheline échoue ici.

use log::{debug, warn};

use super::erreur::{EvalError, Result};
use super::jetons::{format_tokens, Operateur, Token};
use super::options::{Options, Regroupement};

fn doit_sortir(sommet: Operateur, courant: Operateur, regroupement: Regroupement) -> bool {
    match regroupement {
        Regroupement::Gauche => sommet.precedence() >= courant.precedence(),
        Regroupement::Historique => sommet.precedence() > courant.precedence(),
    }
}

/// Conversion RPN avec les options par défaut (tolérante : ne peut pas échouer).
pub fn to_postfix(tokens: &[Token]) -> Vec<Token> {
    // le mode tolérant n’a aucun chemin d’erreur
    to_postfix_with(tokens, &Options::default()).unwrap_or_default()
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [LeftParen, 1, +, 2, RightParen, *, 3]
///   rpn:    [1, 2, +, 3, *]
pub fn to_postfix_with(tokens: &[Token], options: &Options) -> Result<Vec<Token>> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Token> = Vec::new();

    for (position, tok) in tokens.iter().enumerate() {
        pousse(tok, &mut out, &mut ops, options, Some(position))?;
    }

    if options.parentheses_strictes && ops.iter().any(|t| matches!(t, Token::LeftParen)) {
        return Err(EvalError::UnbalancedParentheses { position: None });
    }
    vide_pile(&mut out, &mut ops);

    debug!("rpn: {}", format_tokens(&out));
    Ok(out)
}

/// Traite un jeton. `position` = index du jeton (pour l’erreur stricte).
fn pousse(
    tok: &Token,
    out: &mut Vec<Token>,
    ops: &mut Vec<Token>,
    options: &Options,
    position: Option<usize>,
) -> Result<()> {
    match tok {
        Token::Value(_) => out.push(tok.clone()),

        Token::LeftParen => ops.push(Token::LeftParen),

        Token::Operator(courant) => {
            while let Some(Token::Operator(sommet)) = ops.last() {
                if !doit_sortir(*sommet, *courant, options.regroupement) {
                    break;
                }
                if let Some(top) = ops.pop() {
                    out.push(top);
                }
            }
            ops.push(Token::Operator(*courant));
        }

        Token::RightParen => {
            // dépile jusqu’à '('
            let mut trouvee = false;
            while let Some(top) = ops.pop() {
                if matches!(top, Token::LeftParen) {
                    trouvee = true;
                    break;
                }
                out.push(top);
            }

            if !trouvee {
                if options.parentheses_strictes {
                    return Err(EvalError::UnbalancedParentheses { position });
                }
                warn!("parenthèse fermante sans ouvrante ignorée");
            }
        }
    }
    Ok(())
}

/// Vide la pile dans l’ordre de dépilement.
fn vide_pile(out: &mut Vec<Token>, ops: &mut Vec<Token>) {
    while let Some(op) = ops.pop() {
        out.push(op);
    }
}
