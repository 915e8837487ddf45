//! Noyau — évaluation (pipeline réel)
//!
//! saisie -> Expression (auto-fermeture) -> jetons -> RPN -> pile f64 -> affichage
//!
//! Toute défaillance remonte en `Err(message)` ; c'est la couche app qui la
//! convertit en affichage "Error". Jamais de panique ici.

use super::expr::Expression;
use super::format::format_nombre;
use super::jetons::{format_tokens, Jeton};
use super::rpn::preparer;
use super::scientifique::Scientifique;

/// Démarche (panneau d'explication) : jetons et RPN en clair.
#[derive(Default, Clone, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// Résultat complet d'une évaluation réussie.
#[derive(Clone, Debug)]
pub struct Evaluation {
    pub valeur: f64,
    pub affichage: String,
    pub demarche: Demarche,
}

/// Évalue une suite RPN contre une pile de f64.
///
/// - Num : poussé (littéral refusé s'il ne parse pas en f64 fini)
/// - Op : dépile b puis a, applique, repousse ; division par zéro refusée
/// - Fonction : dépile une valeur, délègue au composant scientifique
///
/// En fin de parcours, exactement une valeur doit rester sur la pile.
pub fn eval_rpn(rpn: &[Jeton], sci: &Scientifique) -> Result<f64, String> {
    let mut pile: Vec<f64> = Vec::new();

    for jeton in rpn {
        match jeton {
            Jeton::Num(litteral) => {
                let v: f64 = litteral
                    .parse()
                    .map_err(|_| format!("nombre invalide: '{litteral}'"))?;
                if v.is_nan() {
                    return Err(format!("nombre invalide: '{litteral}'"));
                }
                pile.push(v);
            }

            Jeton::Op(op) => {
                let b = pile.pop().ok_or("expression invalide")?;
                let a = pile.pop().ok_or("expression invalide")?;
                pile.push(appliquer_operateur(*op, a, b)?);
            }

            Jeton::Fonction(nom) => {
                let x = pile.pop().ok_or("expression invalide")?;
                pile.push(sci.calculer_fonction(nom, x)?);
            }

            Jeton::LPar | Jeton::RPar => {
                return Err("parenthèse inattendue en RPN".to_string());
            }
        }
    }

    if pile.len() != 1 {
        return Err("expression invalide".to_string());
    }
    Ok(pile[0])
}

fn appliquer_operateur(op: char, a: f64, b: f64) -> Result<f64, String> {
    match op {
        '+' => Ok(a + b),
        '-' => Ok(a - b),
        '*' => Ok(a * b),
        '/' => {
            if b == 0.0 {
                return Err("division par zéro".to_string());
            }
            Ok(a / b)
        }
        '^' => Ok(a.powf(b)),
        _ => Err(format!("opérateur inconnu: '{op}'")),
    }
}

/// API publique : évalue une saisie et retourne
/// - la valeur brute (f64)
/// - son affichage formaté (budget de chiffres, séparateurs)
/// - la démarche (jetons, rpn)
pub fn eval_expression(saisie: &str, sci: &Scientifique) -> Result<Evaluation, String> {
    let s = saisie.trim();
    if s.is_empty() {
        return Err("Entrée vide".into());
    }

    // 1) Expression (le déséquilibre réparable est auto-fermé dans preparer)
    let expression = Expression::vide().ajouter(s);

    // 2) Jetons + RPN
    let (jetons, rpn) = preparer(&expression)?;

    // 3) Évaluation sur pile
    let valeur = eval_rpn(&rpn, sci)?;

    // 4) Affichage
    let affichage = format_nombre(valeur);

    Ok(Evaluation {
        valeur,
        affichage,
        demarche: Demarche {
            jetons: format_tokens(&jetons),
            rpn: format_tokens(&rpn),
        },
    })
}
