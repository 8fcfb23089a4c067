//! Noyau du pupitre
//!
//! Organisation interne :
//! - jetons.rs : modèle de jeton (entier / opérateur + table des priorités)
//! - tampon.rs : tampon d'expression (arène doublement chaînée, recollage)
//! - eval.rs   : réduction prioritaire + frontière d'évaluation

pub mod eval;
pub mod jetons;
pub mod tampon;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use eval::{evalue, evalue_en_texte, Bilan, ErreurEval};
pub use jetons::{Jeton, Operateur};
pub use tampon::Tampon;
