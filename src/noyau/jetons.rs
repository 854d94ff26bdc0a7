// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

use super::erreur::{EvalError, Result};
use super::options::Lecture;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Divise),
            _ => None,
        }
    }

    /// 1 pour + -, 2 pour * /. Fixée par le symbole.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Moins => 1,
            Self::Fois | Self::Divise => 2,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Divise => '/',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Value(BigRational),
    Operator(Operateur),
    LeftParen,
    RightParen,
}

/// Tokenize en lecture par défaut (un caractère = un nombre).
pub fn tokenize(s: &str) -> Result<Vec<Token>> {
    tokenize_with(s, Lecture::default())
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - espaces (ignorés)
/// - opérateurs + - * /
/// - parenthèses ( )
/// - nombres : un seul chiffre (Lecture::Chiffre) ou entier/décimal (Lecture::Nombre)
pub fn tokenize_with(s: &str, lecture: Lecture) -> Result<Vec<Token>> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        match c {
            '(' => {
                out.push(Token::LeftParen);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Token::RightParen);
                i += 1;
                continue;
            }
            _ => {}
        }

        if let Some(op) = Operateur::depuis_char(c) {
            out.push(Token::Operator(op));
            i += 1;
            continue;
        }

        // Tout le reste est candidat nombre.
        match lecture {
            Lecture::Chiffre => {
                out.push(Token::Value(chiffre_seul(c, i)?));
                i += 1;
            }
            Lecture::Nombre => {
                let (valeur, suivant) = nombre_glouton(&chars, i)?;
                out.push(Token::Value(valeur));
                i = suivant;
            }
        }
    }

    Ok(out)
}

fn inattendu(c: char, position: usize) -> EvalError {
    EvalError::UnexpectedToken {
        jeton: c.to_string(),
        position: Some(position),
    }
}

/// Un caractère seul : '0' vaut 0, '1'..'9' leur valeur, le reste est refusé.
fn chiffre_seul(c: char, position: usize) -> Result<BigRational> {
    let d = c.to_digit(10).ok_or_else(|| inattendu(c, position))?;
    Ok(BigRational::from_integer(BigInt::from(d)))
}

/// Chiffres [ '.' chiffres ] à partir de `debut`. Retourne (valeur exacte, index suivant).
/// Un '.' non suivi d’un chiffre n’est pas consommé.
fn nombre_glouton(chars: &[char], debut: usize) -> Result<(BigRational, usize)> {
    let mut i = debut;
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    if i == debut {
        return Err(inattendu(chars[debut], debut));
    }
    let mut txt: String = chars[debut..i].iter().collect();
    let mut decimales: usize = 0;

    if i + 1 < chars.len() && chars[i] == '.' && chars[i + 1].is_ascii_digit() {
        i += 1;
        let start_f = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        decimales = i - start_f;
        txt.extend(&chars[start_f..i]);
    }

    let n = BigInt::parse_bytes(txt.as_bytes(), 10).ok_or_else(|| inattendu(chars[debut], debut))?;
    let mut d = BigInt::one();
    for _ in 0..decimales {
        d *= 10;
    }
    Ok((BigRational::new(n, d), i))
}

/// Format utilitaire (journal/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Token]) -> String {
    fn format_rat(r: &BigRational) -> String {
        let n = r.numer();
        let d = r.denom();
        if d.is_one() {
            format!("{n}")
        } else {
            format!("{n}/{d}")
        }
    }

    tokens
        .iter()
        .map(|t| match t {
            Token::Value(r) => format_rat(r),
            Token::Operator(op) => op.symbole().to_string(),
            Token::LeftParen => "(".to_string(),
            Token::RightParen => ")".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
