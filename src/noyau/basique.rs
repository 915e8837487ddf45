// src/noyau/basique.rs
//
// Calculatrice quatre opérations : machine à états immédiate, indépendante
// du pipeline RPN. (Le chaînage continu porte une "valeur précédente" d'un
// calcul à l'autre ; le chemin RPN n'a pas cette notion — on ne fusionne pas.)
//
// État : (affichage, valeur précédente, opérateur en attente, attend_nouvelle).
// Toute défaillance verrouille l'affichage sur "Error" jusqu'à effacer().

use super::format::{analyser, format_nombre};

/* ------------------------ Opérateur ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Division,
}

impl Operateur {
    /// Depuis un caractère clavier/bouton (les glyphes × ÷ sont acceptés).
    pub fn depuis_char(c: char) -> Option<Operateur> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' | '×' => Some(Operateur::Fois),
            '/' | '÷' => Some(Operateur::Division),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Division => '/',
        }
    }
}

/* ------------------------ Affichage ------------------------ */

/// Valeur affichée par la calculatrice basique.
/// "0" initial ; "Error" est un état collant (seul effacer() en sort).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Affichage {
    valeur: String,
}

impl Affichage {
    pub fn zero() -> Affichage {
        Affichage {
            valeur: "0".to_string(),
        }
    }

    pub fn erreur() -> Affichage {
        Affichage {
            valeur: "Error".to_string(),
        }
    }

    /// Résultat calculé : rendu via le budget d'affichage
    /// (notation scientifique et séparateurs compris).
    pub fn depuis_nombre(valeur: f64) -> Affichage {
        Affichage {
            valeur: format_nombre(valeur),
        }
    }

    pub fn depuis_texte(valeur: impl Into<String>) -> Affichage {
        Affichage {
            valeur: valeur.into(),
        }
    }

    pub fn texte(&self) -> &str {
        &self.valeur
    }

    pub fn nombre(&self) -> f64 {
        analyser(&self.valeur)
    }

    pub fn est_erreur(&self) -> bool {
        self.valeur == "Error"
    }

    pub fn a_point(&self) -> bool {
        self.valeur.contains('.')
    }

    /// Chiffre ajouté en fin ; un "0" seul est remplacé, pas préfixé.
    pub fn ajouter_chiffre(&self, chiffre: char) -> Affichage {
        if self.est_erreur() {
            return self.clone();
        }
        if self.valeur == "0" {
            return Affichage {
                valeur: chiffre.to_string(),
            };
        }
        Affichage {
            valeur: format!("{}{}", self.valeur, chiffre),
        }
    }

    /// Point décimal ajouté, seulement s'il est absent.
    pub fn ajouter_point(&self) -> Affichage {
        if self.est_erreur() || self.a_point() {
            return self.clone();
        }
        Affichage {
            valeur: format!("{}.", self.valeur),
        }
    }
}

/* ------------------------ Résultat ------------------------ */

/// Résultat d'une opération : succès (arrondi à 8 décimales) ou échec.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultatCalcul {
    Succes(f64),
    Echec(String),
}

impl ResultatCalcul {
    pub fn succes(valeur: f64) -> ResultatCalcul {
        ResultatCalcul::Succes(arrondir_8(valeur))
    }

    pub fn echec(message: impl Into<String>) -> ResultatCalcul {
        ResultatCalcul::Echec(message.into())
    }

    pub fn est_succes(&self) -> bool {
        matches!(self, ResultatCalcul::Succes(_))
    }

    pub fn valeur(&self) -> Option<f64> {
        match self {
            ResultatCalcul::Succes(v) => Some(*v),
            ResultatCalcul::Echec(_) => None,
        }
    }
}

/// Arrondi à 8 décimales : gomme le bruit binaire (0.1+0.2 doit lire 0.3).
pub fn arrondir_8(valeur: f64) -> f64 {
    (valeur * 1e8).round() / 1e8
}

/* ------------------------ Entité ------------------------ */

#[derive(Clone, Debug)]
pub struct CalculBasique {
    affichage: Affichage,
    valeur_prec: f64,
    operateur: Option<Operateur>,
    attend_nouvelle: bool,
}

impl Default for CalculBasique {
    fn default() -> Self {
        CalculBasique {
            affichage: Affichage::zero(),
            valeur_prec: 0.0,
            operateur: None,
            attend_nouvelle: true,
        }
    }
}

impl CalculBasique {
    pub fn affichage(&self) -> &str {
        self.affichage.texte()
    }

    pub fn est_erreur(&self) -> bool {
        self.affichage.est_erreur()
    }

    /// Opérateur en attente (pour l'UI).
    pub fn operateur(&self) -> Option<Operateur> {
        self.operateur
    }

    pub fn saisir_chiffre(&mut self, chiffre: char) {
        if self.est_erreur() {
            return;
        }

        if self.attend_nouvelle {
            self.affichage = Affichage::depuis_texte(chiffre.to_string());
            self.attend_nouvelle = false;
        } else {
            self.affichage = self.affichage.ajouter_chiffre(chiffre);
        }
    }

    pub fn saisir_point(&mut self) {
        if self.est_erreur() {
            return;
        }

        if self.attend_nouvelle {
            self.affichage = Affichage::depuis_texte("0.");
            self.attend_nouvelle = false;
        } else {
            self.affichage = self.affichage.ajouter_point();
        }
    }

    /// Saisie d'un opérateur.
    /// Si un opérateur est déjà en attente et qu'un second opérande a été
    /// tapé, le calcul en attente s'exécute d'abord (chaînage continu).
    pub fn saisir_operateur(&mut self, operateur: Operateur) {
        if self.est_erreur() {
            return;
        }

        let courante = self.affichage.nombre();

        if self.operateur.is_some() && !self.attend_nouvelle {
            match self.executer_operation(courante) {
                ResultatCalcul::Succes(v) => {
                    self.affichage = Affichage::depuis_nombre(v);
                    self.valeur_prec = v;
                }
                ResultatCalcul::Echec(_) => {
                    self.affichage = Affichage::erreur();
                    return;
                }
            }
        } else {
            self.valeur_prec = courante;
        }

        self.operateur = Some(operateur);
        self.attend_nouvelle = true;
    }

    /// "=" : exécute l'opérateur en attente. No-op sans opérateur ou en erreur.
    pub fn calculer(&mut self) {
        if self.est_erreur() || self.operateur.is_none() {
            return;
        }

        let courante = self.affichage.nombre();
        match self.executer_operation(courante) {
            ResultatCalcul::Succes(v) => {
                self.affichage = Affichage::depuis_nombre(v);
                self.valeur_prec = v;
            }
            ResultatCalcul::Echec(_) => {
                self.affichage = Affichage::erreur();
            }
        }

        self.operateur = None;
        self.attend_nouvelle = true;
    }

    /// Remise à zéro totale (seule sortie de l'état "Error").
    pub fn effacer(&mut self) {
        *self = CalculBasique::default();
    }

    fn executer_operation(&self, courante: f64) -> ResultatCalcul {
        let Some(operateur) = self.operateur else {
            return ResultatCalcul::echec("aucun opérateur en attente");
        };

        let resultat = match operateur {
            Operateur::Plus => self.valeur_prec + courante,
            Operateur::Moins => self.valeur_prec - courante,
            Operateur::Fois => self.valeur_prec * courante,
            Operateur::Division => {
                if courante == 0.0 {
                    return ResultatCalcul::echec("division par zéro");
                }
                self.valeur_prec / courante
            }
        };

        ResultatCalcul::succes(resultat)
    }
}
