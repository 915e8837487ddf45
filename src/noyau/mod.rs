//! Noyau de calcul
//!
//! Organisation interne :
//! - expr.rs         : valeur Expression (équilibre des parenthèses, auto-fermeture)
//! - jetons.rs       : tokenisation
//! - rpn.rs          : shunting-yard (infixe -> RPN)
//! - eval.rs         : évaluation sur pile + pipeline complet
//! - scientifique.rs : fonctions trig/log/racines + mode d'angle
//! - format.rs       : affichage sous budget de chiffres + inverse
//! - basique.rs      : calculatrice quatre opérations (évaluation immédiate)
//! - historique.rs   : historique borné + registre mémoire

pub mod basique;
pub mod eval;
pub mod expr;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod rpn;
pub mod scientifique;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::{eval_expression, Demarche, Evaluation};
