//! Noyau — réduction prioritaire du tampon.
//!
//! Algorithme : les éléments du tampon, triés par priorité décroissante
//! (tri stable => gauche→droite à priorité égale), sont réduits un par un.
//! Chaque pas remplace un opérateur et ses deux voisins numériques par un
//! seul élément entier recollé à la même position (tampon.reduit_operateur).
//!
//! Terminaison : chaque tour de boucle retourne, ou retire définitivement
//! deux éléments de la chaîne.
//!
//! Frontière d'erreur : tout ce qui sort d'ici est un texte d'affichage
//! (Display sur Bilan / ErreurEval). Rien ne remonte en panique vers la
//! boucle d'événements.

use num_bigint::BigInt;

use std::fmt;

use super::jetons::Operateur;
use super::tampon::Tampon;

/// Issue non fautive d'une évaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Bilan {
    /// Valeur réduite de l'expression complète.
    Valeur(BigInt),
    /// Tampon vide au moment du "=" (sentinelle, pas une erreur).
    AucuneEntree,
    /// Un seul jeton dans le tampon, et c'est un nombre.
    NombreSeul(BigInt),
}

impl fmt::Display for Bilan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bilan::Valeur(v) => write!(f, "{v}"),
            Bilan::AucuneEntree => f.write_str("Aucune entrée."),
            Bilan::NombreSeul(v) => write!(f, "Nombre seul : {v}"),
        }
    }
}

/// Erreurs d'évaluation. Toutes locales à la session : converties en texte
/// à la frontière "=", jamais fatales au processus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErreurEval {
    /// Opérateur sans voisin gauche et/ou droit dans la chaîne vivante
    /// (opérateur en tête/queue, ou deux opérateurs adjacents).
    OperateurSansVoisins(Operateur),
    /// Opérande attendu numérique, mais c'est un opérateur.
    OperandeNonNombre(Operateur),
    /// Division entière avec diviseur nul.
    DivisionParZero,
}

impl fmt::Display for ErreurEval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErreurEval::OperateurSansVoisins(op) => {
                write!(f, "L'opérateur {op} n'a pas ses deux voisins.")
            }
            ErreurEval::OperandeNonNombre(op) => {
                write!(f, "L'opérateur {op} n'est pas un nombre.")
            }
            ErreurEval::DivisionParZero => f.write_str("Division par zéro."),
        }
    }
}

/// Évalue le tampon par réductions successives dans l'ordre de priorité.
///
/// Le tampon n'est PAS remis à zéro ici : la frontière d'affichage
/// (evalue_en_texte) s'en charge inconditionnellement.
pub fn evalue(tampon: &mut Tampon) -> Result<Bilan, ErreurEval> {
    let ordre = tampon.indices_par_priorite();

    if ordre.is_empty() {
        return Ok(Bilan::AucuneEntree);
    }
    if ordre.len() == 1 {
        // un opérateur seul échoue ici (OperandeNonNombre)
        return Ok(Bilan::NombreSeul(tampon.exige_entier(ordre[0])?));
    }

    // "Élément résultat courant" : démarre en tête de l'ordre de priorité,
    // puis suit l'élément recollé à chaque réduction. Les indices d'arène
    // sont stables : continuer le balayage après un recollage est sûr même
    // si l'élément balayé a été retiré de la chaîne entre-temps.
    let mut resultat = ordre[0];

    for &idx in &ordre {
        // Dès qu'un entier surgit dans l'ordre de priorité, tous les
        // opérateurs ont déjà été balayés (ils trient avant les entiers) :
        // le résultat courant est la réponse.
        if tampon.jeton(idx).est_entier() {
            return Ok(Bilan::Valeur(tampon.exige_entier(resultat)?));
        }
        resultat = tampon.reduit_operateur(idx)?;
    }

    // Atteint seulement si l'ordre ne contient aucun entier ; la première
    // réduction aurait alors échoué sur un voisin non numérique.
    Ok(Bilan::Valeur(tampon.exige_entier(resultat)?))
}

/// Frontière d'affichage : un "=" rend toujours un texte, jamais une
/// panique, et le tampon est remis à zéro quoi qu'il arrive.
pub fn evalue_en_texte(tampon: &mut Tampon) -> String {
    let texte = match evalue(tampon) {
        Ok(bilan) => bilan.to_string(),
        Err(erreur) => erreur.to_string(),
    };
    tampon.reinitialise();
    texte
}
