// src/noyau/options.rs
//
// Réglages d’une évaluation. Aucun état global : chaque appel reçoit ses Options.

/// Lecture des littéraux numériques.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lecture {
    /// Un caractère = un nombre (comportement historique) : "12" donne 1 puis 2.
    #[default]
    Chiffre,
    /// Suite maximale de chiffres, au plus un point décimal : "12.5" donne 25/2.
    Nombre,
}

/// Traitement de deux opérateurs de même précédence dans le shunting-yard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Regroupement {
    /// Gauche à droite : 9-3-2 = (9-3)-2 = 4.
    #[default]
    Gauche,
    /// Règle historique "strictement supérieur" : 9-3-2 = 9-(3-2) = 8.
    Historique,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub lecture: Lecture,
    pub regroupement: Regroupement,
    /// false : parenthèses orphelines tolérées (l’erreur éventuelle sort à l’évaluation).
    /// true  : échec immédiat dans la conversion RPN.
    pub parentheses_strictes: bool,
}
