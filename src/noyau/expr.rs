// src/noyau/expr.rs
//
// Expression — valeur immuable autour d'une chaîne de saisie.
//
// Contrats :
// - creer() valide l'équilibre des parenthèses (construction validée).
// - ajouter()/retour_arriere() ne valident PAS : le déséquilibre transitoire
//   est normal pendant la frappe ("(2+3" en cours de saisie).
// - fermer_parentheses() répare les '(' manquantes juste avant l'évaluation.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expression {
    valeur: String,
}

impl Expression {
    /// Expression vide (état initial).
    pub fn vide() -> Expression {
        Expression {
            valeur: String::new(),
        }
    }

    /// Construction validée : refuse les parenthèses non équilibrées
    /// (fermante excédentaire OU ouvrante jamais fermée).
    pub fn creer(valeur: impl Into<String>) -> Result<Expression, String> {
        let valeur = valeur.into();
        if !parentheses_valides(&valeur) {
            return Err("parenthèses non équilibrées".to_string());
        }
        Ok(Expression { valeur })
    }

    /// Nouvelle expression avec le texte ajouté en fin (sans validation).
    pub fn ajouter(&self, texte: &str) -> Expression {
        Expression {
            valeur: format!("{}{}", self.valeur, texte),
        }
    }

    /// Nouvelle expression sans le dernier caractère (no-op si vide).
    pub fn retour_arriere(&self) -> Expression {
        if self.valeur.is_empty() {
            return self.clone();
        }
        let mut valeur = self.valeur.clone();
        valeur.pop();
        Expression { valeur }
    }

    pub fn est_vide(&self) -> bool {
        self.valeur.is_empty()
    }

    pub fn longueur(&self) -> usize {
        self.valeur.chars().count()
    }

    pub fn valeur(&self) -> &str {
        &self.valeur
    }

    /// Vrai si une fermante arrive sans ouvrante correspondante.
    /// (Irréparable : l'auto-fermeture n'ajoute qu'en fin de chaîne.)
    pub fn a_exces_fermantes(&self) -> bool {
        let mut profondeur: i32 = 0;
        for c in self.valeur.chars() {
            match c {
                '(' => profondeur += 1,
                ')' => {
                    profondeur -= 1;
                    if profondeur < 0 {
                        return true;
                    }
                }
                _ => {}
            }
        }
        false
    }

    /// Vrai s'il reste des ouvrantes non fermées (auto-fermeture nécessaire).
    pub fn a_parentheses_ouvertes(&self) -> bool {
        profondeur_finale(&self.valeur) > 0
    }

    /// Complète les fermantes manquantes en fin d'expression.
    /// Sans effet si rien à fermer.
    pub fn fermer_parentheses(&self) -> Expression {
        let profondeur = profondeur_finale(&self.valeur);
        if profondeur <= 0 {
            return self.clone();
        }
        let mut valeur = self.valeur.clone();
        for _ in 0..profondeur {
            valeur.push(')');
        }
        Expression { valeur }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.valeur)
    }
}

/// Profondeur jamais négative ET nulle en fin de chaîne.
fn parentheses_valides(texte: &str) -> bool {
    let mut profondeur: i32 = 0;
    for c in texte.chars() {
        match c {
            '(' => profondeur += 1,
            ')' => {
                profondeur -= 1;
                if profondeur < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    profondeur == 0
}

fn profondeur_finale(texte: &str) -> i32 {
    let mut profondeur: i32 = 0;
    for c in texte.chars() {
        match c {
            '(' => profondeur += 1,
            ')' => profondeur -= 1,
            _ => {}
        }
    }
    profondeur
}
