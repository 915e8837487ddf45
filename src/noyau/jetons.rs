// src/noyau/jetons.rs

/// Fonctions unaires reconnues par le tokenizer (insensible à la casse).
pub const FONCTIONS_VALIDES: [&str; 10] = [
    "sin", "cos", "tan", "asin", "acos", "atan", "log", "ln", "sqrt", "abs",
];

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    // Littéral numérique tel que saisi (la validation f64 est reportée à l'évaluation)
    Num(String),

    Op(char), // + - * / ^

    // Fonction unaire, nom normalisé en minuscules (validé à la construction)
    Fonction(String),

    LPar,
    RPar,
}

impl Jeton {
    /// Construit un jeton fonction.
    /// Échoue si le nom n'appartient pas à `FONCTIONS_VALIDES`.
    pub fn fonction(nom: &str) -> Result<Jeton, String> {
        let n = nom.to_lowercase();
        if FONCTIONS_VALIDES.contains(&n.as_str()) {
            Ok(Jeton::Fonction(n))
        } else {
            Err(format!("fonction invalide: '{nom}'"))
        }
    }

    /// Priorité d'opérateur: + - = 1, * / = 2, ^ = 3 (0 sinon).
    pub fn priorite(&self) -> i32 {
        match self {
            Jeton::Op('+') | Jeton::Op('-') => 1,
            Jeton::Op('*') | Jeton::Op('/') => 2,
            Jeton::Op('^') => 3,
            _ => 0,
        }
    }

    /// Associativité à droite: seulement `^`.
    pub fn est_associatif_droite(&self) -> bool {
        matches!(self, Jeton::Op('^'))
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - littéraux numériques (suites de chiffres et de points, ex: 12, 3.5)
/// - opérateurs + - * / ^
/// - moins unaire : replié dans le littéral suivant ; "-(" devient -1 *
/// - parenthèses ( )
/// - fonctions sin/cos/tan/asin/acos/atan/log/ln/sqrt/abs (toute casse)
///
/// Tout autre caractère est une erreur (politique stricte, voir DESIGN.md).
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, String> {
    // Les espaces ne portent aucun sens ici : on les retire d'entrée,
    // le moins unaire voit ainsi son littéral même dans "1 - -5".
    let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    let mut out: Vec<Jeton> = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // Parenthèses
        if c == '(' {
            out.push(Jeton::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Jeton::RPar);
            i += 1;
            continue;
        }

        // Littéral numérique : chiffres et points, sans validation
        // (un "1.2.3" sera refusé à l'évaluation, pas ici)
        if c.is_ascii_digit() || c == '.' {
            let debut = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            out.push(Jeton::Num(chars[debut..i].iter().collect()));
            continue;
        }

        // Opérateurs, avec traitement du moins unaire
        if matches!(c, '+' | '-' | '*' | '/' | '^') {
            if c == '-' && attend_valeur(&out) {
                // -N : replié dans le littéral (jeton Num négatif)
                if i + 1 < chars.len() && (chars[i + 1].is_ascii_digit() || chars[i + 1] == '.') {
                    let debut = i; // inclut le '-'
                    i += 1;
                    while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                        i += 1;
                    }
                    out.push(Jeton::Num(chars[debut..i].iter().collect()));
                    continue;
                }
                // -( : négation du groupe, encodée comme multiplication par -1
                if i + 1 < chars.len() && chars[i + 1] == '(' {
                    out.push(Jeton::Num("-1".to_string()));
                    out.push(Jeton::Op('*'));
                    i += 1;
                    continue;
                }
            }
            out.push(Jeton::Op(c));
            i += 1;
            continue;
        }

        // Fonctions : suite de lettres, validée à la construction du jeton
        if c.is_ascii_alphabetic() {
            let debut = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let nom: String = chars[debut..i].iter().collect();
            out.push(Jeton::fonction(&nom)?);
            continue;
        }

        return Err(format!("caractère inattendu: '{c}'"));
    }

    Ok(out)
}

/// Vrai si la position courante attend une valeur :
/// début d'expression, après un opérateur, ou après '('.
/// Sert à détecter le moins unaire.
fn attend_valeur(out: &[Jeton]) -> bool {
    matches!(out.last(), None | Some(Jeton::Op(_)) | Some(Jeton::LPar))
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(jetons: &[Jeton]) -> String {
    let mut out = Vec::new();
    for j in jetons {
        let s = match j {
            Jeton::Num(n) => n.clone(),
            Jeton::Op(c) => c.to_string(),
            Jeton::Fonction(nom) => nom.clone(),
            Jeton::LPar => "(".to_string(),
            Jeton::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
