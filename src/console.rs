// src/console.rs
//
// Coquille console : en-tête, une ligne lue, RESULT, pied.
// Générique sur BufRead/Write pour être testée en mémoire.

use std::io::{self, BufRead, Write};

use calculatrice_postfixe::noyau::{evaluate_with, format_nombre, Options};
use log::error;

const EN_TETE: &str = "********CALCULATOR********";
const INVITE: &str = "Enter A Mathematical Expression";
const PIED: &str = "*************************";

/// Issue d’une session console (traduite en code de sortie par main).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Issue {
    Resultat,
    ErreurEvaluation,
}

impl Issue {
    pub fn code(self) -> i32 {
        match self {
            Self::Resultat => 0,
            Self::ErreurEvaluation => 1,
        }
    }
}

/// Session sur stdin/stdout. Code 2 si l’entrée/sortie échoue.
pub fn executer(expression: Option<&str>, options: &Options, chiffres: usize) -> i32 {
    let stdin = io::stdin();
    let stdout = io::stdout();
    match session(stdin.lock(), stdout.lock(), expression, options, chiffres) {
        Ok(issue) => issue.code(),
        Err(e) => {
            error!("entrée/sortie console : {e}");
            2
        }
    }
}

/// Une session : si `expression` est fournie, rien n’est lu sur `entree`.
pub fn session<R: BufRead, W: Write>(
    mut entree: R,
    mut sortie: W,
    expression: Option<&str>,
    options: &Options,
    chiffres: usize,
) -> io::Result<Issue> {
    writeln!(sortie, "{EN_TETE}")?;

    let ligne = match expression {
        Some(e) => e.to_string(),
        None => {
            writeln!(sortie, "{INVITE}")?;
            sortie.flush()?;
            let mut l = String::new();
            entree.read_line(&mut l)?;
            l.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    let issue = match evaluate_with(&ligne, options) {
        Ok(ev) => {
            writeln!(sortie, "RESULT: {}", format_nombre(&ev.valeur, chiffres))?;
            Issue::Resultat
        }
        Err(e) => {
            writeln!(sortie, "ERREUR : {e}")?;
            Issue::ErreurEvaluation
        }
    };

    writeln!(sortie, "{PIED}")?;
    sortie.flush()?;
    Ok(issue)
}
