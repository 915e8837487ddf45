//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l'état de la calculatrice (saisie, résultats, erreur,
//! mode, dépôts) et offrir des opérations simples, sans logique d'affichage.
//!
//! Contrats :
//! - Aucune défaillance du noyau ne traverse : tout devient
//!   (resultat = "Error", erreur = message).
//! - Les dépôts (historique, mémoire) sont possédés ici et passés
//!   explicitement — pas de singleton global.

use crate::noyau::basique::CalculBasique;
use crate::noyau::eval::{eval_expression, Demarche, Evaluation};
use crate::noyau::expr::Expression;
use crate::noyau::historique::{Historique, Memoire};
use crate::noyau::scientifique::{ModeAngle, Scientifique};

/// Les deux calculatrices offertes par l'app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeCalc {
    Basique,
    Scientifique,
}

/// Dépôts de l'app : instances possédées, injectées là où il faut.
#[derive(Clone, Debug, Default)]
pub struct Depots {
    pub historique: Historique,
    pub memoire: Memoire,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub mode: ModeCalc,

    // --- calculatrice scientifique (pipeline RPN) ---
    pub saisie: Expression,
    pub resultat: String,
    pub derniere_valeur: Option<f64>,
    pub erreur: String,
    pub demarche: Demarche,
    pub sci: Scientifique,

    // --- calculatrice basique (évaluation immédiate) ---
    pub basique: CalculBasique,

    // --- dépôts ---
    pub depots: Depots,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à la saisie après un clic bouton.
    pub focus_saisie: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            mode: ModeCalc::Scientifique,
            saisie: Expression::vide(),
            resultat: String::new(),
            derniere_valeur: None,
            erreur: String::new(),
            demarche: Demarche::default(),
            sci: Scientifique::default(),
            basique: CalculBasique::default(),
            depots: Depots::default(),
            focus_saisie: true,
        }
    }
}

impl AppCalc {
    /* ------------------------ Saisie (mode scientifique) ------------------------ */

    /// Ajoute du texte à la saisie (boutons du pavé).
    pub fn saisir(&mut self, texte: &str) {
        self.saisie = self.saisie.ajouter(texte);
        self.focus_saisie = true;
    }

    /// DEL : retire le dernier caractère (no-op sur saisie vide).
    pub fn retour_arriere(&mut self) {
        self.saisie = self.saisie.retour_arriere();
        self.focus_saisie = true;
    }

    /// C : efface seulement la saisie.
    pub fn clear_saisie(&mut self) {
        self.saisie = Expression::vide();
        self.focus_saisie = true;
    }

    /// CLR : efface résultats + erreur + démarche (sans toucher à la saisie).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.derniere_valeur = None;
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_saisie = true;
    }

    /// AC : remise à zéro des deux calculatrices (l'historique reste).
    pub fn reset_total(&mut self) {
        self.clear_saisie();
        self.clear_resultats();
        self.basique.effacer();
        self.focus_saisie = true;
    }

    /* ------------------------ Évaluation ------------------------ */

    /// Évalue la saisie courante via le noyau.
    /// Succès : résultat + démarche déposés, entrée poussée dans l'historique.
    /// Échec : resultat = "Error" + message, rien dans l'historique.
    pub fn evaluer(&mut self) {
        let saisie = self.saisie.valeur().to_string();
        match eval_expression(&saisie, &self.sci) {
            Ok(ev) => self.set_resultat(&saisie, ev),
            Err(msg) => self.set_erreur(msg),
        }
        self.focus_saisie = true;
    }

    /// Dépose un résultat complet et alimente l'historique.
    pub fn set_resultat(&mut self, saisie: &str, ev: Evaluation) {
        self.erreur.clear();
        self.resultat = ev.affichage.clone();
        self.derniere_valeur = Some(ev.valeur);
        self.demarche = ev.demarche;

        self.depots.historique = self
            .depots
            .historique
            .ajouter(saisie, ev.valeur, ev.affichage);
    }

    /// Dépose une erreur : l'affichage passe à "Error", le message reste lisible.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.resultat = "Error".to_string();
        self.derniere_valeur = None;
        self.demarche = Demarche::default();
    }

    /* ------------------------ Historique ------------------------ */

    /// Recharge la saisie depuis une entrée d'historique.
    pub fn rejouer(&mut self, id: u64) {
        let Some(texte) = self
            .depots
            .historique
            .entree_par_id(id)
            .map(|e| e.expression().to_string())
        else {
            return;
        };

        self.saisie = Expression::vide().ajouter(&texte);
        self.clear_resultats();
    }

    pub fn vider_historique(&mut self) {
        self.depots.historique = self.depots.historique.vider();
        self.focus_saisie = true;
    }

    /* ------------------------ Mémoire ------------------------ */

    /// MS : mémorise la dernière valeur calculée (no-op sans résultat).
    pub fn memoriser(&mut self) {
        if let Some(v) = self.derniere_valeur {
            self.depots.memoire = self.depots.memoire.enregistrer(v);
        }
        self.focus_saisie = true;
    }

    /// MR : insère la valeur mémorisée dans la saisie.
    /// (Display f64 de Rust n'émet jamais d'exposant : le texte reste tokenisable.)
    pub fn rappel_memoire(&mut self) {
        if let Some(v) = self.depots.memoire.rappeler() {
            self.saisie = self.saisie.ajouter(&v.to_string());
        }
        self.focus_saisie = true;
    }

    pub fn effacer_memoire(&mut self) {
        self.depots.memoire = self.depots.memoire.effacer();
        self.focus_saisie = true;
    }

    pub fn memoire_plus(&mut self) {
        if let Some(v) = self.derniere_valeur {
            self.depots.memoire = self.depots.memoire.ajouter(v);
        }
        self.focus_saisie = true;
    }

    pub fn memoire_moins(&mut self) {
        if let Some(v) = self.derniere_valeur {
            self.depots.memoire = self.depots.memoire.soustraire(v);
        }
        self.focus_saisie = true;
    }

    /* ------------------------ Modes ------------------------ */

    pub fn bascule_mode_angle(&mut self) -> ModeAngle {
        self.focus_saisie = true;
        self.sci.bascule_mode_angle()
    }

    pub fn choisir_mode(&mut self, mode: ModeCalc) {
        self.mode = mode;
        self.focus_saisie = true;
    }

    /// Échap : efface la saisie du mode courant.
    pub fn effacer_courant(&mut self) {
        match self.mode {
            ModeCalc::Scientifique => self.clear_saisie(),
            ModeCalc::Basique => self.basique.effacer(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppCalc, ModeCalc};

    #[test]
    fn evaluer_alimente_resultat_et_historique() {
        let mut app = AppCalc::default();
        app.saisir("2+3*4");
        app.evaluer();

        assert_eq!(app.resultat, "14");
        assert_eq!(app.derniere_valeur, Some(14.0));
        assert!(app.erreur.is_empty());
        assert_eq!(app.depots.historique.nombre(), 1);
        assert_eq!(app.depots.historique.entrees()[0].expression(), "2+3*4");
    }

    #[test]
    fn erreur_recuperee_en_affichage_error() {
        let mut app = AppCalc::default();
        app.saisir("5/0");
        app.evaluer();

        assert_eq!(app.resultat, "Error");
        assert!(app.erreur.contains("division par zéro"));
        // rien d'ajouté à l'historique sur échec
        assert!(app.depots.historique.est_vide());
    }

    #[test]
    fn rejouer_recharge_la_saisie() {
        let mut app = AppCalc::default();
        app.saisir("sin(30");
        app.evaluer();
        let id = app.depots.historique.entrees()[0].id();

        app.clear_saisie();
        app.rejouer(id);
        assert_eq!(app.saisie.valeur(), "sin(30");
    }

    #[test]
    fn cycle_memoire_depuis_un_resultat() {
        let mut app = AppCalc::default();
        app.saisir("6*7");
        app.evaluer();

        app.memoriser();
        assert_eq!(app.depots.memoire.rappeler(), Some(42.0));

        app.clear_saisie();
        app.rappel_memoire();
        assert_eq!(app.saisie.valeur(), "42");

        app.memoire_plus(); // 42 + 42
        assert_eq!(app.depots.memoire.rappeler(), Some(84.0));

        app.effacer_memoire();
        assert!(!app.depots.memoire.a_valeur());
    }

    #[test]
    fn echap_efface_le_mode_courant() {
        let mut app = AppCalc::default();
        app.saisir("1+2");
        app.effacer_courant();
        assert!(app.saisie.est_vide());

        app.choisir_mode(ModeCalc::Basique);
        app.basique.saisir_chiffre('9');
        app.effacer_courant();
        assert_eq!(app.basique.affichage(), "0");
    }
}
