// src/noyau/historique.rs
//
// Historique borné + registre mémoire.
// Valeurs immuables : chaque mutation retourne une nouvelle instance
// (structures petites, copie structurelle suffisante).

use chrono::{DateTime, Local};

/// Nombre maximal d'entrées conservées (les plus anciennes sortent).
const ENTREES_MAX: usize = 20;

/* ------------------------ Entrée ------------------------ */

/// Une évaluation enregistrée : saisie, valeur brute, affichage formaté.
#[derive(Clone, Debug)]
pub struct EntreeHistorique {
    id: u64,
    expression: String,
    resultat: f64,
    affichage: String,
    horodatage: DateTime<Local>,
}

impl EntreeHistorique {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn resultat(&self) -> f64 {
        self.resultat
    }

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn horodatage(&self) -> DateTime<Local> {
        self.horodatage
    }
}

/* ------------------------ Historique ------------------------ */

/// Historique des calculs, du plus récent au plus ancien.
/// Les ids sont séquentiels et croissants, attribués par l'historique.
#[derive(Clone, Debug, Default)]
pub struct Historique {
    entrees: Vec<EntreeHistorique>,
    prochain_id: u64,
}

impl Historique {
    pub fn nouveau() -> Historique {
        Historique::default()
    }

    /// Nouvelle instance avec l'entrée ajoutée en tête.
    /// Au-delà de `ENTREES_MAX`, la plus ancienne est retirée.
    pub fn ajouter(
        &self,
        expression: impl Into<String>,
        resultat: f64,
        affichage: impl Into<String>,
    ) -> Historique {
        let entree = EntreeHistorique {
            id: self.prochain_id,
            expression: expression.into(),
            resultat,
            affichage: affichage.into(),
            horodatage: Local::now(),
        };

        let mut entrees = Vec::with_capacity(self.entrees.len() + 1);
        entrees.push(entree);
        entrees.extend(self.entrees.iter().cloned());
        entrees.truncate(ENTREES_MAX);

        Historique {
            entrees,
            prochain_id: self.prochain_id + 1,
        }
    }

    /// Entrées, de la plus récente à la plus ancienne.
    pub fn entrees(&self) -> &[EntreeHistorique] {
        &self.entrees
    }

    pub fn nombre(&self) -> usize {
        self.entrees.len()
    }

    pub fn est_vide(&self) -> bool {
        self.entrees.is_empty()
    }

    /// Recherche par id (rejeu d'une entrée).
    pub fn entree_par_id(&self, id: u64) -> Option<&EntreeHistorique> {
        self.entrees.iter().find(|e| e.id == id)
    }

    /// Nouvelle instance vide (les ids continuent de croître).
    pub fn vider(&self) -> Historique {
        Historique {
            entrees: Vec::new(),
            prochain_id: self.prochain_id,
        }
    }
}

/* ------------------------ Mémoire ------------------------ */

/// Registre mémoire (MS/MR/MC/M+/M-).
/// M+/M- sur mémoire vide partent de 0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Memoire {
    valeur: Option<f64>,
}

impl Memoire {
    pub fn nouvelle() -> Memoire {
        Memoire::default()
    }

    pub fn enregistrer(&self, valeur: f64) -> Memoire {
        Memoire {
            valeur: Some(valeur),
        }
    }

    pub fn rappeler(&self) -> Option<f64> {
        self.valeur
    }

    pub fn a_valeur(&self) -> bool {
        self.valeur.is_some()
    }

    pub fn effacer(&self) -> Memoire {
        Memoire { valeur: None }
    }

    pub fn ajouter(&self, valeur: f64) -> Memoire {
        Memoire {
            valeur: Some(self.valeur.unwrap_or(0.0) + valeur),
        }
    }

    pub fn soustraire(&self, valeur: f64) -> Memoire {
        Memoire {
            valeur: Some(self.valeur.unwrap_or(0.0) - valeur),
        }
    }
}
