// src/noyau/tampon.rs
//
// Tampon d'expression : séquence doublement chaînée de jetons, construite
// touche par touche, réduite pas à pas par eval.rs.
//
// Représentation : arène indexée (Vec<Element>) + liens prec/suiv en
// Option<usize>. Pas de références croisées, pas de cycle de propriété.
// Un élément retiré par une réduction garde sa case dans l'arène mais ses
// liens sont coupés ; il n'est plus jamais re-chaîné.
//
// Invariants:
// - chaîne simple acyclique : premier sans prec, dernier sans suiv
// - `dernier` permet l'ajout en O(1)
// - la priorité d'un élément est dérivée du jeton à la création
//   (un entier reste entier en fusionnant : priorité 0 inchangée)

use num_bigint::BigInt;

use super::eval::ErreurEval;
use super::jetons::Jeton;

/// Un nœud du tampon : jeton possédé + liens de position + priorité dérivée.
#[derive(Clone, Debug)]
struct Element {
    jeton: Jeton,
    prec: Option<usize>,
    suiv: Option<usize>,
    priorite: u8,
}

/// Le tampon d'expression du pupitre. Vide → en saisie → vide (reinitialise).
#[derive(Clone, Debug, Default)]
pub struct Tampon {
    elements: Vec<Element>,
    premier: Option<usize>,
    dernier: Option<usize>,
}

impl Tampon {
    /* ------------------------ Saisie ------------------------ */

    /// Ajoute un jeton tapé au pupitre. Seul mutateur public en saisie.
    ///
    /// - tampon vide : le jeton devient premier et dernier élément
    /// - sinon : tentative de fusion chiffre dans le dernier élément ;
    ///   si la fusion échoue (un des deux côtés est un opérateur), on
    ///   chaîne un nouvel élément en queue et on avance `dernier`.
    pub fn ajoute(&mut self, jeton: Jeton) {
        let Some(dernier) = self.dernier else {
            let idx = self.alloue(jeton);
            self.premier = Some(idx);
            self.dernier = Some(idx);
            return;
        };

        if self.elements[dernier].jeton.ajoute_chiffre(&jeton) {
            return;
        }

        let idx = self.alloue(jeton);
        self.elements[idx].prec = Some(dernier);
        self.elements[dernier].suiv = Some(idx);
        self.dernier = Some(idx);
    }

    /// Vide le tampon. Toujours appelé après une évaluation, succès ou erreur.
    pub fn reinitialise(&mut self) {
        self.elements.clear();
        self.premier = None;
        self.dernier = None;
    }

    pub fn est_vide(&self) -> bool {
        self.premier.is_none()
    }

    /* ------------------------ Parcours ------------------------ */

    /// Parcours paresseux premier→dernier, dans l'ordre de saisie.
    /// Redémarrable : chaque appel repart du premier élément.
    pub fn indices(&self) -> Parcours<'_> {
        Parcours {
            tampon: self,
            courant: self.premier,
        }
    }

    /// Les jetons vivants, dans l'ordre de saisie.
    pub fn jetons(&self) -> impl Iterator<Item = &Jeton> + '_ {
        self.indices().map(move |idx| &self.elements[idx].jeton)
    }

    /// Rendu d'affichage : jetons joints par des espaces ("1 + 23").
    pub fn affiche(&self) -> String {
        self.jetons()
            .map(|j| j.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Indices vivants triés par priorité décroissante.
    ///
    /// Tri stable : à priorité égale, l'ordre gauche→droite de saisie est
    /// conservé, ce qui donne la résolution gauche→droite des opérateurs
    /// de même priorité.
    pub fn indices_par_priorite(&self) -> Vec<usize> {
        let mut ordre: Vec<usize> = self.indices().collect();
        ordre.sort_by(|&a, &b| self.elements[b].priorite.cmp(&self.elements[a].priorite));
        ordre
    }

    /* ------------------------ Accès ------------------------ */

    pub fn jeton(&self, idx: usize) -> &Jeton {
        &self.elements[idx].jeton
    }

    /// Valeur entière de l'élément, ou erreur si c'est un opérateur
    /// (opérande attendu numérique).
    pub fn exige_entier(&self, idx: usize) -> Result<BigInt, ErreurEval> {
        match &self.elements[idx].jeton {
            Jeton::Entier(v) => Ok(v.clone()),
            Jeton::Operateur(op) => Err(ErreurEval::OperandeNonNombre(*op)),
        }
    }

    /* ------------------------ Réduction (recollage) ------------------------ */

    /// Un pas de réduction : l'opérateur en `idx` et ses deux voisins
    /// numériques sont remplacés par UN nouvel élément entier à la même
    /// position. Retourne l'indice du nouvel élément.
    ///
    /// Échecs:
    /// - voisin manquant d'un côté (opérateur en tête/queue, ou deux
    ///   opérateurs adjacents) => OperateurSansVoisins
    /// - voisin opérateur => OperandeNonNombre
    /// - division par zéro => DivisionParZero
    pub fn reduit_operateur(&mut self, idx: usize) -> Result<usize, ErreurEval> {
        let op = match self.elements[idx].jeton {
            Jeton::Operateur(op) => op,
            // un entier est déjà réduit
            Jeton::Entier(_) => return Ok(idx),
        };

        let prec = self.elements[idx]
            .prec
            .ok_or(ErreurEval::OperateurSansVoisins(op))?;
        let suiv = self.elements[idx]
            .suiv
            .ok_or(ErreurEval::OperateurSansVoisins(op))?;

        let a = self.exige_entier(prec)?;
        let b = self.exige_entier(suiv)?;
        let valeur = op.applique(&a, &b)?;

        // Le nouvel élément occupe la position des trois anciens.
        let avant = self.elements[prec].prec;
        let apres = self.elements[suiv].suiv;

        let neuf = self.alloue(Jeton::Entier(valeur));
        self.elements[neuf].prec = avant;
        self.elements[neuf].suiv = apres;

        match avant {
            Some(i) => self.elements[i].suiv = Some(neuf),
            None => self.premier = Some(neuf),
        }
        match apres {
            Some(i) => self.elements[i].prec = Some(neuf),
            None => self.dernier = Some(neuf),
        }

        // Les trois éléments retirés perdent leurs liens : leur case reste
        // adressable (indices stables) mais hors chaîne.
        for retire in [prec, idx, suiv] {
            self.elements[retire].prec = None;
            self.elements[retire].suiv = None;
        }

        Ok(neuf)
    }

    /* ------------------------ Interne ------------------------ */

    fn alloue(&mut self, jeton: Jeton) -> usize {
        let priorite = jeton.priorite();
        self.elements.push(Element {
            jeton,
            prec: None,
            suiv: None,
            priorite,
        });
        self.elements.len() - 1
    }
}

/// Itérateur d'indices vivants, premier→dernier.
pub struct Parcours<'a> {
    tampon: &'a Tampon,
    courant: Option<usize>,
}

impl Iterator for Parcours<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let idx = self.courant?;
        self.courant = self.tampon.elements[idx].suiv;
        Some(idx)
    }
}
