// src/noyau/rpn.rs
//
// Shunting-yard : infixe -> RPN (postfixe)
//
// Règles:
// - Num : sortie directe
// - Fonction : empilée, elle sort quand son groupe de parenthèses se ferme
//   ("sin(30)" donne "30 sin")
// - Opérateur : dépile tant que le sommet est un opérateur dont la priorité
//   l'exige (associativité gauche par défaut, droite seulement pour ^)
// - '(' empilée ; ')' dépile jusqu'à '(' (jetée), puis sort la fonction
//   éventuelle au sommet
//
// to_rpn n'échoue jamais : l'entrée publique `parse` a déjà refusé les
// fermantes excédentaires et auto-fermé les ouvrantes.

use super::expr::Expression;
use super::jetons::{tokenize, Jeton};

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [Fonction("sin"), LPar, Num(30), RPar]
///   rpn:    [Num(30), Fonction("sin")]
pub fn to_rpn(jetons: &[Jeton]) -> Vec<Jeton> {
    let mut out: Vec<Jeton> = Vec::new();
    let mut ops: Vec<Jeton> = Vec::new();

    for jeton in jetons.iter().cloned() {
        match jeton {
            Jeton::Num(_) => out.push(jeton),

            Jeton::Fonction(_) => ops.push(jeton),

            Jeton::Op(_) => {
                // dépile tant que le sommet est un opérateur (pas '(' ni
                // fonction : une fonction reste collée à son argument)
                while let Some(top) = ops.last() {
                    if !matches!(top, Jeton::Op(_)) {
                        break;
                    }

                    let doit_sortir = if jeton.est_associatif_droite() {
                        top.priorite() > jeton.priorite()
                    } else {
                        top.priorite() >= jeton.priorite()
                    };

                    if doit_sortir {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }
                ops.push(jeton);
            }

            Jeton::LPar => ops.push(jeton),

            Jeton::RPar => {
                // dépile jusqu'à '(' (jetée, pas de sortie)
                while let Some(top) = ops.pop() {
                    if matches!(top, Jeton::LPar) {
                        break;
                    }
                    out.push(top);
                }

                // une fonction précédait le groupe : elle sort maintenant
                if matches!(ops.last(), Some(Jeton::Fonction(_))) {
                    out.push(ops.pop().unwrap());
                }
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        out.push(op);
    }

    out
}

/// Prépare une expression pour l'évaluation :
/// auto-fermeture des parenthèses, puis tokenize, puis RPN.
/// Retourne (jetons, rpn) — les jetons infixes servent à la démarche.
///
/// Refuse une fermante excédentaire (irréparable par l'auto-fermeture).
pub fn preparer(expression: &Expression) -> Result<(Vec<Jeton>, Vec<Jeton>), String> {
    if expression.a_exces_fermantes() {
        return Err("parenthèses non équilibrées".to_string());
    }

    let complete = expression.fermer_parentheses();
    let jetons = tokenize(complete.valeur())?;
    let rpn = to_rpn(&jetons);
    Ok((jetons, rpn))
}

/// Point d'entrée public : expression -> RPN.
pub fn parse(expression: &Expression) -> Result<Vec<Jeton>, String> {
    Ok(preparer(expression)?.1)
}
