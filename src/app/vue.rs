// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ de saisie a le focus)
// - Tactile : gros boutons, focus redonné après clic (focus_saisie)
// - Deux pavés : basique (évaluation immédiate) et scientifique (RPN)

use eframe::egui;

use super::etat::{AppCalc, ModeCalc};
use crate::noyau::basique::Operateur;
use crate::noyau::expr::Expression;
use crate::noyau::format::{format_nombre, format_saisie};

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearSaisie,
    ClearResultats,
    ResetTotal,
    RetourArriere,
    BasculeAngle,
    Memoriser,
    RappelMemoire,
    EffacerMemoire,
    MemoirePlus,
    MemoireMoins,
    Evaluer,
}

#[derive(Clone, Copy, Debug)]
enum ToucheBasique {
    Chiffre(char),
    Point,
    Op(Operateur),
    Egal,
    Effacer,
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité "calc"
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice scientifique");
                ui.add_space(6.0);

                self.ui_choix_mode(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                match self.mode {
                    ModeCalc::Scientifique => self.ui_scientifique(ui),
                    ModeCalc::Basique => self.ui_basique(ui),
                }
            });
    }

    fn ui_choix_mode(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for (libelle, mode) in [
                ("Basique", ModeCalc::Basique),
                ("Scientifique", ModeCalc::Scientifique),
            ] {
                if ui.selectable_label(self.mode == mode, libelle).clicked() {
                    self.choisir_mode(mode);
                }
            }
        });
    }

    /* ------------------------ Mode scientifique ------------------------ */

    fn ui_scientifique(&mut self, ui: &mut egui::Ui) {
        self.ui_saisie(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_resultats(ui);

        ui.add_space(8.0);

        self.ui_demarche(ui);
        self.ui_historique(ui);
    }

    fn ui_saisie(&mut self, ui: &mut egui::Ui) {
        ui.label("Saisie :");

        // La saisie vit dans une Expression immuable ; le TextEdit passe
        // par un tampon et réinjecte à chaque frappe.
        let mut tampon = self.saisie.valeur().to_string();
        let resp = ui.add(
            egui::TextEdit::singleline(&mut tampon)
                .desired_width(ui.available_width())
                .hint_text("Ex: (2+3)*4, sin(30), 2^10")
                .id_source("saisie_edit")
                .code_editor(),
        );
        if resp.changed() {
            self.saisie = Expression::vide().ajouter(&tampon);
        }

        // Si on a cliqué un bouton (pavé / fonctions / DEL / C / etc.), on redonne le focus
        if self.focus_saisie {
            resp.request_focus();
            self.focus_saisie = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.evaluer();
        }

        ui.add_space(6.0);

        // Actions + mode d'angle
        ui.horizontal(|ui| {
            // Contrat: C = saisie seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement la saisie", Action::ClearSaisie);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultats + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            let etiquette = self.sci.mode_angle().etiquette();
            self.bouton_action(ui, etiquette, "Bascule degrés / radians", Action::BasculeAngle);
        });

        ui.add_space(6.0);

        // Mémoire
        ui.horizontal(|ui| {
            self.bouton_action(ui, "MS", "Mémorise le dernier résultat", Action::Memoriser);
            self.bouton_action(ui, "MR", "Insère la mémoire dans la saisie", Action::RappelMemoire);
            self.bouton_action(ui, "MC", "Efface la mémoire", Action::EffacerMemoire);
            self.bouton_action(ui, "M+", "Ajoute le dernier résultat", Action::MemoirePlus);
            self.bouton_action(ui, "M-", "Soustrait le dernier résultat", Action::MemoireMoins);

            if let Some(v) = self.depots.memoire.rappeler() {
                ui.separator();
                ui.monospace(format!("M = {}", format_nombre(v)));
            }
        });

        ui.add_space(8.0);

        // Fonctions scientifiques
        ui.horizontal_wrapped(|ui| {
            for nom in ["sin", "cos", "tan", "asin", "acos", "atan"] {
                self.bouton_insert(ui, nom, &format!("{nom}("));
            }

            ui.separator();

            for nom in ["log", "ln", "sqrt", "abs"] {
                self.bouton_insert(ui, nom, &format!("{nom}("));
            }
        });

        ui.add_space(8.0);

        // Pavé numérique + opérateurs
        self.ui_pave_scientifique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_scientifique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_scientifique")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", "7");
                self.bouton_insert(ui, "8", "8");
                self.bouton_insert(ui, "9", "9");
                self.bouton_insert(ui, "(", "(");
                self.bouton_insert(ui, ")", ")");
                ui.end_row();

                self.bouton_insert(ui, "4", "4");
                self.bouton_insert(ui, "5", "5");
                self.bouton_insert(ui, "6", "6");
                self.bouton_insert(ui, "*", "*");
                self.bouton_insert(ui, "/", "/");
                ui.end_row();

                self.bouton_insert(ui, "1", "1");
                self.bouton_insert(ui, "2", "2");
                self.bouton_insert(ui, "3", "3");
                self.bouton_insert(ui, "+", "+");
                self.bouton_insert(ui, "-", "-");
                ui.end_row();

                self.bouton_insert(ui, "0", "0");
                self.bouton_insert(ui, ".", ".");
                self.bouton_insert(ui, "^", "^");
                self.bouton_action(ui, "DEL", "Efface le dernier caractère", Action::RetourArriere);
                self.bouton_action(ui, "=", "Évalue la saisie", Action::Evaluer);
                ui.end_row();
            });
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 2);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Historique")
            .default_open(false)
            .show(ui, |ui| {
                if self.depots.historique.est_vide() {
                    ui.monospace("aucun calcul");
                    return;
                }

                // clic = rejeu ; on collecte l'id pour muter après la boucle
                let mut rejouer_id = None;
                for entree in self.depots.historique.entrees() {
                    let libelle = format!("{} = {}", entree.expression(), entree.affichage());
                    let resp = ui
                        .button(libelle)
                        .on_hover_text(entree.horodatage().format("%H:%M:%S").to_string());
                    if resp.clicked() {
                        rejouer_id = Some(entree.id());
                    }
                }
                if let Some(id) = rejouer_id {
                    self.rejouer(id);
                }

                ui.add_space(4.0);
                if ui.button("Vider l'historique").clicked() {
                    self.vider_historique();
                }
            });
    }

    /* ------------------------ Mode basique ------------------------ */

    fn ui_basique(&mut self, ui: &mut egui::Ui) {
        self.clavier_basique(ui);

        ui.label("Affichage :");
        // regroupement de frappe ("1234" -> "1,234") ; passe-plat sinon
        let affiche = format_saisie(self.basique.affichage());
        Self::champ_monospace(ui, "basique_out", &affiche, 2);

        if let Some(op) = self.basique.operateur() {
            ui.monospace(format!("opérateur en attente : {}", op.symbole()));
        }

        ui.add_space(8.0);

        egui::Grid::new("pave_basique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_basique(ui, "7", ToucheBasique::Chiffre('7'));
                self.bouton_basique(ui, "8", ToucheBasique::Chiffre('8'));
                self.bouton_basique(ui, "9", ToucheBasique::Chiffre('9'));
                self.bouton_basique(ui, "÷", ToucheBasique::Op(Operateur::Division));
                ui.end_row();

                self.bouton_basique(ui, "4", ToucheBasique::Chiffre('4'));
                self.bouton_basique(ui, "5", ToucheBasique::Chiffre('5'));
                self.bouton_basique(ui, "6", ToucheBasique::Chiffre('6'));
                self.bouton_basique(ui, "×", ToucheBasique::Op(Operateur::Fois));
                ui.end_row();

                self.bouton_basique(ui, "1", ToucheBasique::Chiffre('1'));
                self.bouton_basique(ui, "2", ToucheBasique::Chiffre('2'));
                self.bouton_basique(ui, "3", ToucheBasique::Chiffre('3'));
                self.bouton_basique(ui, "-", ToucheBasique::Op(Operateur::Moins));
                ui.end_row();

                self.bouton_basique(ui, "0", ToucheBasique::Chiffre('0'));
                self.bouton_basique(ui, ".", ToucheBasique::Point);
                self.bouton_basique(ui, "=", ToucheBasique::Egal);
                self.bouton_basique(ui, "+", ToucheBasique::Op(Operateur::Plus));
                ui.end_row();

                self.bouton_basique(ui, "C", ToucheBasique::Effacer);
                ui.end_row();
            });
    }

    /// Clavier physique du mode basique : chiffres, point, opérateurs,
    /// '=' ou Enter pour calculer.
    fn clavier_basique(&mut self, ui: &mut egui::Ui) {
        let evenements = ui.input(|i| i.events.clone());
        for ev in evenements {
            let egui::Event::Text(texte) = ev else {
                continue;
            };
            for c in texte.chars() {
                if c.is_ascii_digit() {
                    self.basique.saisir_chiffre(c);
                } else if c == '.' {
                    self.basique.saisir_point();
                } else if c == '=' {
                    self.basique.calculer();
                } else if let Some(op) = Operateur::depuis_char(c) {
                    self.basique.saisir_operateur(op);
                }
            }
        }

        if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.basique.calculer();
        }
    }

    fn bouton_basique(&mut self, ui: &mut egui::Ui, libelle: &str, touche: ToucheBasique) {
        let resp = ui.add_sized([56.0, 36.0], egui::Button::new(libelle));
        if !resp.clicked() {
            return;
        }

        match touche {
            ToucheBasique::Chiffre(c) => self.basique.saisir_chiffre(c),
            ToucheBasique::Point => self.basique.saisir_point(),
            ToucheBasique::Op(op) => self.basique.saisir_operateur(op),
            ToucheBasique::Egal => self.basique.calculer(),
            ToucheBasique::Effacer => self.basique.effacer(),
        }
    }

    /* ------------------------ Briques communes ------------------------ */

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule "stable", sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, libelle: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(libelle))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearSaisie => self.clear_saisie(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::RetourArriere => self.retour_arriere(),
                Action::BasculeAngle => {
                    self.bascule_mode_angle();
                }
                Action::Memoriser => self.memoriser(),
                Action::RappelMemoire => self.rappel_memoire(),
                Action::EffacerMemoire => self.effacer_memoire(),
                Action::MemoirePlus => self.memoire_plus(),
                Action::MemoireMoins => self.memoire_moins(),
                Action::Evaluer => self.evaluer(),
            }
            self.focus_saisie = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, libelle: &str, insertion: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(libelle));
        if resp.clicked() {
            self.saisir(insertion);
        }
    }
}
