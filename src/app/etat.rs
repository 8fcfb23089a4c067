//! src/app/etat.rs
//!
//! État UI (sans vue, sans évaluation).
//!
//! Rôle : posséder le tampon d'expression en cours de saisie et la ligne
//! d'écran, et offrir des opérations simples (remise à zéro, dépôt de
//! texte) sans logique d'affichage ni de réduction.
//!
//! Contrats :
//! - Aucune évaluation ici (pas d'appel à noyau::eval).
//! - Actions déterministes, sans effet de bord caché.

use crate::noyau::Tampon;

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    /// Tampon d'expression, propriété exclusive de l'instance d'application.
    pub tampon: Tampon,

    /// Ligne d'écran : rendu du tampon pendant la saisie,
    /// résultat / sentinelle / erreur après un "=".
    pub ecran: String,
}

impl AppCalc {
    /// Remise à zéro totale (tampon + écran). Touche Échap.
    pub fn reset_total(&mut self) {
        self.tampon.reinitialise();
        self.ecran.clear();
    }

    /// Reflète le tampon sur l'écran (après chaque touche du pavé).
    pub fn montre_tampon(&mut self) {
        self.ecran = self.tampon.affiche();
    }

    /// Dépose un texte final (valeur, sentinelle ou erreur).
    pub fn montre_resultat(&mut self, texte: impl Into<String>) {
        self.ecran = texte.into();
    }
}
