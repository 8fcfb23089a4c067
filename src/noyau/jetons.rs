// src/noyau/jetons.rs
//
// Modèle de jeton : une valeur typée du pupitre.
// - Entier     : littéral entier non négatif à la saisie (BigInt => pas de borne)
// - Operateur  : un des quatre opérateurs binaires câblés sur le pavé
//
// Contrats:
// - Un Entier ne grandit que par ajout de chiffre décimal (v = v*10 + c).
// - Un Operateur est immuable après création.
// - La table symbole/priorité est statique (lecture seule).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use std::fmt;

use super::eval::ErreurEval;

/// Les quatre opérateurs du pavé. Rien d'autre n'existe dans ce pupitre.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    DivEntiere,
}

/// Métadonnées statiques d'un opérateur (symbole affiché + priorité).
#[derive(Clone, Copy, Debug)]
pub struct InfoOp {
    pub symbole: &'static str,
    pub priorite: u8,
}

impl Operateur {
    /// Table statique : + et - en priorité 1, * et / en priorité 2.
    pub const fn info(self) -> &'static InfoOp {
        match self {
            Operateur::Plus => &InfoOp {
                symbole: "+",
                priorite: 1,
            },
            Operateur::Moins => &InfoOp {
                symbole: "-",
                priorite: 1,
            },
            Operateur::Fois => &InfoOp {
                symbole: "*",
                priorite: 2,
            },
            Operateur::DivEntiere => &InfoOp {
                symbole: "/",
                priorite: 2,
            },
        }
    }

    /// Applique la fonction binaire à deux opérandes entiers.
    ///
    /// DivEntiere = division "plancher" (vers -∞), pas une troncature :
    /// la soustraction peut produire des négatifs en cours de réduction,
    /// et plancher(-7/2) = -4, pas -3. On passe par BigRational::floor
    /// pour rester exact.
    pub fn applique(self, a: &BigInt, b: &BigInt) -> Result<BigInt, ErreurEval> {
        match self {
            Operateur::Plus => Ok(a + b),
            Operateur::Moins => Ok(a - b),
            Operateur::Fois => Ok(a * b),
            Operateur::DivEntiere => {
                if b.is_zero() {
                    return Err(ErreurEval::DivisionParZero);
                }
                Ok(BigRational::new(a.clone(), b.clone()).floor().to_integer())
            }
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().symbole)
    }
}

/// Un jeton du tampon d'expression : entier ou opérateur, rien d'autre.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Jeton {
    Entier(BigInt),
    Operateur(Operateur),
}

impl Jeton {
    /// Jeton entier pour une touche chiffre (0..=9).
    pub fn chiffre(c: u8) -> Jeton {
        Jeton::Entier(BigInt::from(c))
    }

    /// Fusionne `autre` comme chiffre décimal de poids faible.
    ///
    /// Réussit (et mute self) seulement si les DEUX côtés sont des entiers :
    /// v = v*10 + c, accumulation gauche→droite telle que tapée.
    /// Retourne false sans mutation dans tous les autres cas.
    pub fn ajoute_chiffre(&mut self, autre: &Jeton) -> bool {
        match (self, autre) {
            (Jeton::Entier(v), Jeton::Entier(c)) => {
                *v = &*v * 10 + c;
                true
            }
            _ => false,
        }
    }

    /// 0 pour un entier, priorité de la table pour un opérateur.
    pub fn priorite(&self) -> u8 {
        match self {
            Jeton::Entier(_) => 0,
            Jeton::Operateur(op) => op.info().priorite,
        }
    }

    pub fn est_entier(&self) -> bool {
        matches!(self, Jeton::Entier(_))
    }

    pub fn est_operateur(&self) -> bool {
        !self.est_entier()
    }
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Entier(v) => write!(f, "{v}"),
            Jeton::Operateur(op) => write!(f, "{op}"),
        }
    }
}
