//! Tests de propriétés : invariants transverses du pipeline.
//!
//! Campagne alignée sur les contrats publics :
//! - inverse de la division dans la tolérance d'arrondi (1e-8)
//! - division par zéro : jamais de valeur numérique, par aucun des deux
//!   chemins (RPN et entité basique)
//! - auto-fermeture : "(2+3" et "(2+3)" produisent la même RPN et la même
//!   valeur
//! - idempotence du format une fois stabilisé
//! - scénarios de bout en bout (trig en degrés, notation scientifique)

use super::basique::{CalculBasique, Operateur};
use super::expr::Expression;
use super::format;
use super::rpn;
use super::scientifique::Scientifique;
use super::{eval_expression, Evaluation};

fn eval_ok(s: &str) -> Evaluation {
    let sci = Scientifique::default();
    eval_expression(s, &sci).unwrap_or_else(|e| panic!("eval_expression({s:?}) erreur: {e}"))
}

fn proche(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

/* ------------------------ Division : inverse & zéro ------------------------ */

#[test]
fn prop_division_inverse_dans_la_tolerance() {
    // (a/b)*b revient à a, dans la tolérance du budget d'arrondi
    let valeurs = [1.0, 2.0, 3.0, 7.0, 10.0, 97.0, 1234.5, -8.25, 0.125];
    for &a in &valeurs {
        for &b in &valeurs {
            let v = eval_ok(&format!("({a})/({b})")).valeur;
            assert!(
                proche(v * b, a, 1e-8),
                "a={a} b={b} => {} ({})",
                v * b,
                v
            );
        }
    }
}

#[test]
fn prop_division_par_zero_jamais_numerique() {
    // chemin RPN
    let sci = Scientifique::default();
    assert!(eval_expression("5/0", &sci).is_err());
    assert!(eval_expression("1/(3-3)", &sci).is_err());

    // chemin basique : erreur collante, pas d'Infinity
    let mut calc = CalculBasique::default();
    calc.saisir_chiffre('5');
    calc.saisir_operateur(Operateur::Division);
    calc.saisir_chiffre('0');
    calc.calculer();
    assert_eq!(calc.affichage(), "Error");
}

/* ------------------------ Auto-fermeture ------------------------ */

#[test]
fn prop_auto_fermeture_equivalente() {
    let ouverte = Expression::vide().ajouter("(2+3");
    let fermee = Expression::vide().ajouter("(2+3)");

    // même RPN par l'entrée publique
    assert_eq!(
        rpn::parse(&ouverte).unwrap(),
        rpn::parse(&fermee).unwrap()
    );

    // même valeur
    assert_eq!(eval_ok("(2+3").valeur, 5.0);
    assert_eq!(eval_ok("(2+3)").valeur, 5.0);
}

#[test]
fn prop_auto_fermeture_sur_fonctions() {
    for (ouverte, fermee) in [
        ("sin(30", "sin(30)"),
        ("sqrt(2*(3+5", "sqrt(2*(3+5))"),
        ("((1+2)*3", "((1+2)*3)"),
    ] {
        let a = eval_ok(ouverte).valeur;
        let b = eval_ok(fermee).valeur;
        assert_eq!(a, b, "{ouverte:?} vs {fermee:?}");
    }
}

/* ------------------------ Format : idempotence ------------------------ */

#[test]
fn prop_format_idempotent_apres_stabilisation() {
    // format(analyser(format(x))) == format(x) sur des valeurs représentables
    // dans le budget de 12 chiffres
    let saisies = [
        "1+1",
        "10/4",
        "7/3",
        "2^30",
        "1000000*3",
        "999999999999*2",
        "1/8000000",
        "-(5/2)",
        "sin(30)",
    ];
    for s in saisies {
        let une_fois = eval_ok(s).affichage;
        let deux_fois = format::format_nombre(format::analyser(&une_fois));
        assert_eq!(une_fois, deux_fois, "saisie={s:?}");
    }
}

/* ------------------------ Scénarios de bout en bout ------------------------ */

#[test]
fn scenario_trig_en_degres() {
    assert!(proche(eval_ok("sin(30)").valeur, 0.5, 1e-9));
    assert!(proche(eval_ok("cos(60)").valeur, 0.5, 1e-9));
    assert!(proche(eval_ok("tan(45)").valeur, 1.0, 1e-9));
}

#[test]
fn scenario_grand_resultat_scientifique() {
    let ev = eval_ok("999999999999*2");
    assert!(ev.affichage.contains("e+"), "{}", ev.affichage);
}

#[test]
fn scenario_expression_composee() {
    // (1+2)*3^2 - sqrt(16)/2 = 27 - 2 = 25
    assert!(proche(eval_ok("(1+2)*3^2-sqrt(16)/2").valeur, 25.0, 1e-9));
}

#[test]
fn scenario_demarche_exposee() {
    let ev = eval_ok("sin(30)");
    assert_eq!(ev.demarche.rpn, "30 sin");
}
