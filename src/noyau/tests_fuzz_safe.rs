//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - on accepte certaines erreurs attendues (division par zéro, domaine
//!   d'une fonction, etc.)
//! - invariant clé : un succès produit un affichage qui se reparse et se
//!   reformate à l'identique

use std::time::{Duration, Instant};

use super::basique::{CalculBasique, Operateur};
use super::format;
use super::scientifique::Scientifique;
use super::eval_expression;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn est_erreur_attendue(msg: &str) -> bool {
    // Liste blanche : erreurs *normales* pour un fuzz d'expressions valides
    // syntaxiquement (les domaines, eux, ne sont pas contrôlés).
    msg.contains("division par zéro")
        || msg.contains("hors de [-1, 1]")
        || msg.contains("non strictement positif")
        || msg.contains("argument négatif")
}

fn check_invariant_affichage(affiche: &str) {
    assert!(!affiche.is_empty(), "affichage vide");
    // l'affichage se reparse puis se reformate à l'identique
    let refait = format::format_nombre(format::analyser(affiche));
    assert_eq!(affiche, refait, "round-trip affichage");
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let n = match rng.pick(9) {
        0 => 0,
        1 => 1,
        2 => 2,
        3 => 3,
        4 => 5,
        5 => 7,
        6 => 10,
        7 => 42,
        _ => 100,
    };

    if rng.coin() {
        format!("{n}")
    } else {
        format!("{n}.5")
    }
}

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(4) {
        0 | 1 => gen_nombre(rng),
        2 => format!("sqrt({})", gen_nombre(rng)),
        _ => format!("abs(-{})", gen_nombre(rng)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    match rng.pick(10) {
        0 => gen_atom(rng),
        1 => format!("({}+{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("({}-{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("({}*{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("({}/{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        5 => format!("sin({})", gen_expr(rng, depth - 1)),
        6 => format!("cos({})", gen_expr(rng, depth - 1)),
        7 => format!("-({})", gen_expr(rng, depth - 1)),
        8 => format!("log({})", gen_expr(rng, depth - 1)),
        _ => format!("({}^2)", gen_atom(rng)),
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_round_trip() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);
    let sci = Scientifique::default();

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..150 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);

        match eval_expression(&expr, &sci) {
            Ok(ev) => {
                check_invariant_affichage(&ev.affichage);
                seen_ok += 1;
            }
            Err(e) => {
                assert!(
                    est_erreur_attendue(&e),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne "balaye" rien.
    assert!(seen_ok > 20, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop sage");
}

#[test]
fn fuzz_safe_rejouable_a_l_identique() {
    let sci = Scientifique::default();

    let passe = |seed: u64| -> Vec<String> {
        let mut rng = Rng::new(seed);
        (0..40)
            .map(|_| {
                let expr = gen_expr(&mut rng, 3);
                match eval_expression(&expr, &sci) {
                    Ok(ev) => ev.affichage,
                    Err(e) => format!("ERR:{e}"),
                }
            })
            .collect()
    };

    assert_eq!(passe(0xBADC0DE), passe(0xBADC0DE));
}

#[test]
fn fuzz_safe_longue_somme_iterative() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // pipeline entièrement itératif : ni la profondeur de parenthèses
    // ni la longueur ne doivent faire déborder la pile d'appels
    let mut expr = String::new();
    for k in 0..400 {
        if k > 0 {
            expr.push('+');
        }
        expr.push('1');
    }
    budget(t0, max);

    let sci = Scientifique::default();
    let ev = eval_expression(&expr, &sci).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(ev.valeur, 400.0);
}

#[test]
fn fuzz_safe_parentheses_profondes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let profondeur = 300;
    let mut expr = String::new();
    for _ in 0..profondeur {
        expr.push('(');
    }
    expr.push('7');
    // fermantes omises : l'auto-fermeture complète le reste
    budget(t0, max);

    let sci = Scientifique::default();
    let ev = eval_expression(&expr, &sci).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(ev.valeur, 7.0);
}

#[test]
fn fuzz_safe_entite_basique_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xFEED_u64);
    let mut calc = CalculBasique::default();

    for _ in 0..2000 {
        budget(t0, max);

        match rng.pick(8) {
            0..=3 => calc.saisir_chiffre(char::from(b'0' + rng.pick(10) as u8)),
            4 => calc.saisir_point(),
            5 => {
                let op = match rng.pick(4) {
                    0 => Operateur::Plus,
                    1 => Operateur::Moins,
                    2 => Operateur::Fois,
                    _ => Operateur::Division,
                };
                calc.saisir_operateur(op);
            }
            6 => calc.calculer(),
            _ => calc.effacer(),
        }

        assert!(!calc.affichage().is_empty());
    }

    // l'effacement ramène toujours à l'état initial
    calc.effacer();
    assert_eq!(calc.affichage(), "0");
}
