// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Clavier : Enter évalue (quand le champ est focus), ESC efface l’entrée (app.rs)
// - Tactile : pavé numérique, focus redonné après clic (focus_entree)
// - Réglages : lecture des nombres, regroupement, parenthèses strictes, chiffres

use eframe::egui;

use calculatrice_postfixe::noyau::jetons::format_tokens;
use calculatrice_postfixe::noyau::lecture::CHIFFRES_MAX;
use calculatrice_postfixe::noyau::{evaluate_with, format_nombre, Lecture, Regroupement};

use super::etat::{AppCalc, Demarche};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice postfixe");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_reglages(ui);
                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let indice = match self.options.lecture {
            Lecture::Chiffre => "Ex: (1+2)*3, 9-3-2, 8/4/2",
            Lecture::Nombre => "Ex: (12+3.5)*2, 100/8",
        };

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text(indice)
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.evaluer();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(ui, "CLR", "Efface résultat + erreur + démarche", Action::ClearResultats);
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "(", InsertKind::Paren);
            self.bouton_insert(ui, ")", InsertKind::Paren);

            ui.separator();

            self.bouton_insert(ui, "+", InsertKind::Op);
            self.bouton_insert(ui, "-", InsertKind::Op);
            self.bouton_insert(ui, "*", InsertKind::Op);
            self.bouton_insert(ui, "/", InsertKind::Op);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.evaluer();
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", InsertKind::Digit);
                self.bouton_insert(ui, "8", InsertKind::Digit);
                self.bouton_insert(ui, "9", InsertKind::Digit);
                self.bouton_action(ui, "DEL", "Efface le dernier caractère", Action::Backspace);
                ui.end_row();

                self.bouton_insert(ui, "4", InsertKind::Digit);
                self.bouton_insert(ui, "5", InsertKind::Digit);
                self.bouton_insert(ui, "6", InsertKind::Digit);
                ui.label("");
                ui.end_row();

                self.bouton_insert(ui, "1", InsertKind::Digit);
                self.bouton_insert(ui, "2", InsertKind::Digit);
                self.bouton_insert(ui, "3", InsertKind::Digit);
                // le point n’a de sens qu’en lecture “nombre”
                if self.options.lecture == Lecture::Nombre {
                    self.bouton_insert(ui, ".", InsertKind::Digit);
                } else {
                    ui.label("");
                }
                ui.end_row();

                self.bouton_insert(ui, "0", InsertKind::Digit);
                ui.end_row();
            });
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("RESULT :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);
    }

    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Réglages")
            .default_open(false)
            .show(ui, |ui| {
                let mut nombres = self.options.lecture == Lecture::Nombre;
                if ui
                    .checkbox(&mut nombres, "Nombres sur plusieurs caractères")
                    .on_hover_text("Par défaut, chaque chiffre est un nombre : \"12\" = 1 puis 2")
                    .changed()
                {
                    self.options.lecture = if nombres { Lecture::Nombre } else { Lecture::Chiffre };
                    self.focus_entree = true;
                }

                let mut historique = self.options.regroupement == Regroupement::Historique;
                if ui
                    .checkbox(&mut historique, "Regroupement historique (9-3-2 = 8)")
                    .changed()
                {
                    self.options.regroupement = if historique {
                        Regroupement::Historique
                    } else {
                        Regroupement::Gauche
                    };
                    self.focus_entree = true;
                }

                if ui
                    .checkbox(&mut self.options.parentheses_strictes, "Parenthèses strictes")
                    .changed()
                {
                    self.focus_entree = true;
                }

                ui.horizontal(|ui| {
                    ui.label("Précision :");
                    let mut d = self.chiffres as u32;
                    let resp = ui.add(
                        egui::DragValue::new(&mut d)
                            .speed(1)
                            .range(0..=CHIFFRES_MAX as u32)
                            .suffix(" chiffres"),
                    );
                    if resp.changed() {
                        self.set_chiffres(d as usize);
                    }
                });
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
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

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, symbole: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(symbole));
        if resp.clicked() {
            self.insere(symbole, kind);
        }
    }

    fn insere(&mut self, symbole: &str, kind: InsertKind) {
        match kind {
            InsertKind::Op => {
                // " + " : lisible, les espaces sont ignorés par les jetons
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
                self.entree.push_str(symbole);
                self.entree.push(' ');
            }
            InsertKind::Digit | InsertKind::Paren => self.entree.push_str(symbole),
        }
        self.focus_entree = true;
    }

    fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.entree.pop();
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
    }

    /// Évalue l’entrée via le noyau, puis dépose RESULT/Démarche dans l’état UI.
    pub fn evaluer(&mut self) {
        match evaluate_with(&self.entree, &self.options) {
            Ok(ev) => {
                let d = Demarche {
                    jetons: format_tokens(&ev.jetons),
                    rpn: format_tokens(&ev.postfix),
                };
                self.set_resultat(format_nombre(&ev.valeur, self.chiffres), d);
            }
            Err(e) => self.set_erreur(e.to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Digit,
    Op,
    Paren,
}
