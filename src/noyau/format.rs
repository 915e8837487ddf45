// src/noyau/format.rs
//
// Affichage numérique sous budget de chiffres.
//
// Règles:
// - budget total de 12 chiffres (partie entière prioritaire)
// - notation scientifique au-delà de 1e12 ou sous 1e-6 (non nul)
// - séparateurs de milliers par virgule sur la partie entière
// - `analyser` est l'inverse : retire les virgules et reparse.

/// Budget total de chiffres affichés (entiers + décimales).
const CHIFFRES_AFFICHAGE_MAX: usize = 12;

/// Au-delà : notation scientifique.
const SEUIL_SCIENTIFIQUE: f64 = 1e12;

/// En dessous (non nul) : notation scientifique.
const SEUIL_MINUSCULE: f64 = 1e-6;

/* ------------------------ Format principal ------------------------ */

/// Formate une valeur pour l'affichage.
pub fn format_nombre(valeur: f64) -> String {
    if valeur.is_nan() {
        return "Error".to_string();
    }
    if valeur.is_infinite() {
        return if valeur > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if valeur == 0.0 {
        return "0".to_string();
    }

    let abs = valeur.abs();
    if abs >= SEUIL_SCIENTIFIQUE || abs < SEUIL_MINUSCULE {
        return format_scientifique(valeur);
    }

    let chiffres_entiers = chiffres_partie_entiere(abs);
    if chiffres_entiers > CHIFFRES_AFFICHAGE_MAX {
        return format_scientifique(valeur);
    }

    // budget restant pour les décimales
    let decimales = CHIFFRES_AFFICHAGE_MAX - chiffres_entiers;
    let texte = if decimales > 0 {
        let arrondi = arrondir_decimales(valeur, decimales as u32);
        couper_zeros_finaux(&format!("{:.*}", decimales, arrondi))
    } else {
        format!("{:.0}", valeur.round())
    };

    separateurs_milliers(&texte)
}

/// Notation scientifique : 10 décimales de mantisse, zéros finaux coupés,
/// exposant signé ("2e+12", "1e-7").
fn format_scientifique(valeur: f64) -> String {
    let brut = format!("{valeur:.10e}");
    let Some((mantisse, exposant)) = brut.split_once('e') else {
        return brut;
    };
    let mantisse = mantisse.trim_end_matches('0').trim_end_matches('.');
    if exposant.starts_with('-') {
        format!("{mantisse}e{exposant}")
    } else {
        format!("{mantisse}e+{exposant}")
    }
}

/* ------------------------ Saisie & inverse ------------------------ */

/// Regroupe une saisie entière en cours de frappe ("1234" -> "1,234").
/// Passe-plat dès qu'un point ou un exposant apparaît : on ne corrompt
/// jamais une saisie en cours.
pub fn format_saisie(valeur: &str) -> String {
    if valeur.contains('.') || valeur.contains('e') || valeur.contains('E') {
        return valeur.to_string();
    }

    let nu = valeur.replace(',', "");
    if nu.parse::<f64>().is_err() {
        return valeur.to_string();
    }

    separateurs_milliers(&nu)
}

/// Inverse de l'affichage : retire les virgules et reparse en f64.
/// Une chaîne non numérique ("Error") redonne NaN.
pub fn analyser(affiche: &str) -> f64 {
    affiche.replace(',', "").trim().parse().unwrap_or(f64::NAN)
}

/* ------------------------ Outils ------------------------ */

/// Nombre de chiffres de floor(abs), minimum 1.
/// (abs < 1e12 ici : la branche scientifique est déjà passée.)
fn chiffres_partie_entiere(abs: f64) -> usize {
    let mut partie = abs.floor() as u64;
    let mut chiffres = 1;
    while partie >= 10 {
        partie /= 10;
        chiffres += 1;
    }
    chiffres
}

fn arrondir_decimales(valeur: f64, decimales: u32) -> f64 {
    let facteur = 10f64.powi(decimales as i32);
    (valeur * facteur).round() / facteur
}

/// Coupe les zéros finaux d'une forme décimale (et le point s'il ne reste rien).
fn couper_zeros_finaux(texte: &str) -> String {
    if !texte.contains('.') {
        return texte.to_string();
    }
    texte
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Virgule tous les 3 chiffres sur la partie entière, signe et décimales
/// préservés.
fn separateurs_milliers(texte: &str) -> String {
    let (entier, decimales) = match texte.split_once('.') {
        Some((e, d)) => (e, Some(d)),
        None => (texte, None),
    };

    let (signe, chiffres) = match entier.strip_prefix('-') {
        Some(reste) => ("-", reste),
        None => ("", entier),
    };

    let mut groupe = String::with_capacity(chiffres.len() + chiffres.len() / 3);
    for (pos, c) in chiffres.chars().enumerate() {
        if pos > 0 && (chiffres.len() - pos) % 3 == 0 {
            groupe.push(',');
        }
        groupe.push(c);
    }

    match decimales {
        Some(d) => format!("{signe}{groupe}.{d}"),
        None => format!("{signe}{groupe}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{analyser, format_nombre, format_saisie};

    #[test]
    fn valeurs_speciales() {
        assert_eq!(format_nombre(0.0), "0");
        assert_eq!(format_nombre(f64::NAN), "Error");
        assert_eq!(format_nombre(f64::INFINITY), "Infinity");
        assert_eq!(format_nombre(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn entiers_avec_separateurs() {
        assert_eq!(format_nombre(8.0), "8");
        assert_eq!(format_nombre(1000.0), "1,000");
        assert_eq!(format_nombre(1234567.0), "1,234,567");
        assert_eq!(format_nombre(-1234567.0), "-1,234,567");
    }

    #[test]
    fn decimales_sous_budget() {
        assert_eq!(format_nombre(1.5), "1.5");
        assert_eq!(format_nombre(0.1 + 0.2), "0.3");
        assert_eq!(format_nombre(1234567.891), "1,234,567.891");
        // 12 chiffres entiers => plus aucune décimale
        assert_eq!(format_nombre(123456789012.345), "123,456,789,012");
    }

    #[test]
    fn notation_scientifique_grands() {
        let s = format_nombre(999999999999.0 * 2.0);
        assert!(s.contains("e+"), "attendu e+ dans {s:?}");
        assert_eq!(format_nombre(2e12), "2e+12");
        assert_eq!(format_nombre(-2e12), "-2e+12");
    }

    #[test]
    fn notation_scientifique_petits() {
        assert_eq!(format_nombre(1e-7), "1e-7");
        assert_eq!(format_nombre(0.0000001234), "1.234e-7");
        // 1e-6 est encore affichable en décimal
        assert_eq!(format_nombre(1e-6), "0.000001");
    }

    #[test]
    fn saisie_en_cours() {
        assert_eq!(format_saisie("1234"), "1,234");
        assert_eq!(format_saisie("1234567"), "1,234,567");
        // point ou exposant : passe-plat strict
        assert_eq!(format_saisie("1234.5"), "1234.5");
        assert_eq!(format_saisie("1.0"), "1.0");
        assert_eq!(format_saisie("2e+12"), "2e+12");
        // non numérique : passe-plat
        assert_eq!(format_saisie("abc"), "abc");
        assert_eq!(format_saisie("-"), "-");
    }

    #[test]
    fn analyser_inverse_l_affichage() {
        assert_eq!(analyser("1,234,567"), 1234567.0);
        assert_eq!(analyser("-1,234.5"), -1234.5);
        assert_eq!(analyser("2e+12"), 2e12);
        assert!(analyser("Error").is_nan());
    }

    #[test]
    fn round_trip_stabilise() {
        // format(analyser(format(x))) == format(x) dans le budget
        for &x in &[
            0.0,
            8.0,
            -1.5,
            0.3,
            1234567.891,
            123456789012.0,
            2e12,
            1.234e-7,
            -99999.25,
        ] {
            let une_fois = format_nombre(x);
            let deux_fois = format_nombre(analyser(&une_fois));
            assert_eq!(une_fois, deux_fois, "x={x}");
        }
    }
}
