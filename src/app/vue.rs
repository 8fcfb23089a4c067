// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Pavé du pupitre :
//   7 8 9 | + -
//   4 5 6 | * /
//   1 2 3 | =
//   0 (large)
//
// La vue est le SEUL point d'appel vers le noyau :
// - touche chiffre/opérateur => tampon.ajoute + ré-affichage du tampon
// - touche "="               => evalue_en_texte (remise à zéro incluse)

use eframe::egui;

use crate::noyau::{evalue_en_texte, Jeton, Operateur};

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice de pupitre");
        ui.add_space(6.0);

        self.ui_ecran(ui);
        ui.add_space(8.0);
        self.ui_pave(ui);
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        // Écran lecture seule "stable" : cadre + label monospace,
        // pas de TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(ui.text_style_height(&egui::TextStyle::Monospace) * 2.0);
                ui.monospace(&self.ecran);
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_pupitre")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_chiffre(ui, 7);
                self.bouton_chiffre(ui, 8);
                self.bouton_chiffre(ui, 9);
                self.bouton_operateur(ui, Operateur::Plus);
                self.bouton_operateur(ui, Operateur::Moins);
                ui.end_row();

                self.bouton_chiffre(ui, 4);
                self.bouton_chiffre(ui, 5);
                self.bouton_chiffre(ui, 6);
                self.bouton_operateur(ui, Operateur::Fois);
                self.bouton_operateur(ui, Operateur::DivEntiere);
                ui.end_row();

                self.bouton_chiffre(ui, 1);
                self.bouton_chiffre(ui, 2);
                self.bouton_chiffre(ui, 3);
                self.bouton_egal(ui);
                ui.end_row();

                self.bouton_zero_large(ui);
                ui.end_row();
            });
    }

    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, c: u8) {
        let resp = ui.add_sized([46.0, 32.0], egui::Button::new(c.to_string()));
        if resp.clicked() {
            self.appuie_jeton(Jeton::chiffre(c));
        }
    }

    fn bouton_operateur(&mut self, ui: &mut egui::Ui, op: Operateur) {
        let resp = ui.add_sized([46.0, 32.0], egui::Button::new(op.to_string()));
        if resp.clicked() {
            self.appuie_jeton(Jeton::Operateur(op));
        }
    }

    fn bouton_zero_large(&mut self, ui: &mut egui::Ui) {
        // "0" large, comme sur le pupitre d'origine
        let resp = ui.add_sized([150.0, 32.0], egui::Button::new("0"));
        if resp.clicked() {
            self.appuie_jeton(Jeton::chiffre(0));
        }
    }

    fn bouton_egal(&mut self, ui: &mut egui::Ui) {
        let resp = ui.add_sized([98.0, 32.0], egui::Button::new("="));
        if resp.clicked() {
            self.appuie_egal();
        }
    }

    /// Touche chiffre/opérateur : ajout au tampon puis ré-affichage.
    fn appuie_jeton(&mut self, jeton: Jeton) {
        self.tampon.ajoute(jeton);
        self.montre_tampon();
    }

    /// Touche "=" : évaluation puis affichage du texte. Le tampon est remis
    /// à zéro par la frontière d'évaluation, succès ou erreur.
    fn appuie_egal(&mut self) {
        let texte = evalue_en_texte(&mut self.tampon);
        self.montre_resultat(texte);
    }
}
