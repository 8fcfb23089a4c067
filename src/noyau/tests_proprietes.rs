//! Tests de propriétés (campagne) : invariants de saisie + réduction,
//! robustesse sur séquences de touches aléatoires.
//!
//! But : marteler le noyau sans faire chauffer la machine.
//! - RNG déterministe (seed fixe)
//! - longueurs bornées
//! - budget temps global
//!
//! Invariants clés :
//! - saisie chiffres seuls => l'écran vaut la concaténation décimale tapée
//! - l'ordre de priorité est un tri stable décroissant
//! - toute évaluation rend un texte (jamais de panique) et laisse le
//!   tampon vide : la session suivante repart de zéro

use std::time::{Duration, Instant};

use num_bigint::BigInt;

use super::eval::{evalue, evalue_en_texte, Bilan};
use super::jetons::{Jeton, Operateur};
use super::tampon::Tampon;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers ------------------------ */

const TOUCHES: [char; 14] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '+', '-', '*', '/',
];

fn jeton_de_touche(c: char) -> Jeton {
    match c {
        '0'..='9' => Jeton::chiffre(c as u8 - b'0'),
        '+' => Jeton::Operateur(Operateur::Plus),
        '-' => Jeton::Operateur(Operateur::Moins),
        '*' => Jeton::Operateur(Operateur::Fois),
        '/' => Jeton::Operateur(Operateur::DivEntiere),
        _ => panic!("touche inconnue: {c}"),
    }
}

fn tape(touches: &str) -> Tampon {
    let mut t = Tampon::default();
    for c in touches.chars() {
        t.ajoute(jeton_de_touche(c));
    }
    t
}

fn sequence_aleatoire(rng: &mut Rng, longueur: usize) -> String {
    (0..longueur)
        .map(|_| TOUCHES[rng.pick(TOUCHES.len() as u32) as usize])
        .collect()
}

/* ------------------------ Saisie : concaténation décimale ------------------------ */

#[test]
fn prop_chiffres_seuls_concatenation_decimale() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);
    let mut rng = Rng::new(0xCA1C);

    for _ in 0..200 {
        let longueur = 1 + rng.pick(30) as usize;
        let presses: String = (0..longueur)
            .map(|_| char::from(b'0' + rng.pick(10) as u8))
            .collect();

        let t = tape(&presses);

        // un seul élément, et sa valeur est le nombre tapé
        // (les zéros de tête s'effacent : l'accumulation est numérique)
        assert_eq!(t.jetons().count(), 1);
        let attendu = BigInt::parse_bytes(presses.as_bytes(), 10).unwrap();
        assert_eq!(t.affiche(), attendu.to_string(), "presses={presses:?}");

        budget(t0, max);
    }
}

#[test]
fn prop_chiffre_apres_operateur_ne_fusionne_jamais() {
    for op in ['+', '-', '*', '/'] {
        for c in ['0', '5', '9'] {
            let t = tape(&format!("1{op}{c}"));
            assert_eq!(t.jetons().count(), 3, "op={op} chiffre={c}");
        }
    }
}

#[test]
fn prop_grand_nombre_sans_borne() {
    // 40 chiffres pressés : aucune troncature machine
    let presses = "9".repeat(40);
    let t = tape(&presses);
    assert_eq!(t.affiche(), presses);

    let mut t = t;
    match evalue(&mut t) {
        Ok(Bilan::NombreSeul(v)) => assert_eq!(v.to_string(), presses),
        autre => panic!("attendu NombreSeul, obtenu {autre:?}"),
    }
}

/* ------------------------ Ordre de priorité : tri stable ------------------------ */

#[test]
fn prop_ordre_de_priorite_stable() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);
    let mut rng = Rng::new(0x0DE5);

    for _ in 0..200 {
        let longueur = 1 + rng.pick(24) as usize;
        let presses = sequence_aleatoire(&mut rng, longueur);
        let t = tape(&presses);

        let saisie: Vec<usize> = t.indices().collect();
        let position = |idx: usize| saisie.iter().position(|&i| i == idx).unwrap();

        let ordre = t.indices_par_priorite();
        assert_eq!(ordre.len(), saisie.len());

        for paire in ordre.windows(2) {
            let (pa, pb) = (t.jeton(paire[0]).priorite(), t.jeton(paire[1]).priorite());
            // décroissant...
            assert!(pa >= pb, "presses={presses:?}");
            // ...et stable : à priorité égale, l'ordre de saisie est conservé
            if pa == pb {
                assert!(
                    position(paire[0]) < position(paire[1]),
                    "presses={presses:?}"
                );
            }
        }

        budget(t0, max);
    }
}

/* ------------------------ Évaluation : déterminisme + remise à zéro ------------------------ */

#[test]
fn prop_evaluation_deterministe_et_tampon_vide() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2_000);
    let mut rng = Rng::new(0xF12A);

    for _ in 0..500 {
        let longueur = rng.pick(16) as usize;
        let presses = sequence_aleatoire(&mut rng, longueur);

        // jamais de panique : toute issue est un texte
        let mut a = tape(&presses);
        let mut b = tape(&presses);
        let texte_a = evalue_en_texte(&mut a);
        let texte_b = evalue_en_texte(&mut b);

        assert_eq!(texte_a, texte_b, "presses={presses:?}");
        assert!(!texte_a.is_empty(), "presses={presses:?}");
        assert!(a.est_vide() && b.est_vide(), "presses={presses:?}");

        budget(t0, max);
    }
}

#[test]
fn prop_session_fraiche_apres_evaluation() {
    // succès puis erreur : dans les deux cas, la touche suivante repart à zéro
    for presses in ["2+3*4", "6/0", "", "42", "+3"] {
        let mut t = tape(presses);
        let _ = evalue_en_texte(&mut t);
        assert!(t.est_vide(), "presses={presses:?}");

        t.ajoute(Jeton::chiffre(8));
        assert_eq!(t.affiche(), "8", "presses={presses:?}");
        t.reinitialise();
    }
}

/* ------------------------ Exemples de bout en bout ------------------------ */

#[test]
fn exemples_du_pupitre() {
    let cas = [
        ("2+3*4", "14"),
        ("10-2-3", "5"),
        ("2*3+4*5", "26"),
        ("100/7", "14"),
        ("6/0", "Division par zéro."),
        ("", "Aucune entrée."),
        ("42", "Nombre seul : 42"),
        ("+3", "L'opérateur + n'a pas ses deux voisins."),
    ];

    for (presses, attendu) in cas {
        let mut t = tape(presses);
        assert_eq!(evalue_en_texte(&mut t), attendu, "presses={presses:?}");
    }
}
