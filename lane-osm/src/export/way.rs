//! Construction de chemins fermés (closed ways)
//!
//! Un circuit de relevé est une boucle parfaite: le chemin OSM produit
//! référence son premier nœud une seconde fois en dernière position.
//! Les identifiants sont fournis par un allocateur injecté, jamais par un
//! compteur global: deux constructions partageant le même allocateur ne
//! peuvent pas produire de plages d'identifiants qui se recouvrent.

use thiserror::Error;

use survey::Geodetic;

/// Erreurs de construction d'un chemin fermé
#[derive(Debug, Error)]
pub enum WayError {
    /// Aucun point: rien à fermer
    #[error("Empty way: no points to close")]
    EmptyWay,

    /// 1 ou 2 points: une boucle fermée demande au moins un triangle
    #[error("Degenerate way: {points} point(s), a closed loop needs at least 3")]
    Degenerate { points: usize },

    /// Le nombre de jeux de tags ne correspond pas au nombre de points
    #[error("Tag count mismatch: {points} points but {tags} tag sets")]
    TagCount { points: usize, tags: usize },
}

/// Tags OSM (paires clé/valeur, ordre d'émission préservé)
pub type Tags = Vec<(String, String)>;

/// Allocateur d'identifiants OSM
///
/// Monotone strictement croissant, démarre à 1, jamais réutilisé. Un seul
/// allocateur doit servir pour tout un fichier de sortie.
#[derive(Debug)]
pub struct IdAllocator {
    next: i64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Retourne l'identifiant suivant et avance le compteur
    pub fn next(&mut self) -> i64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Nœud OSM prêt à sérialiser
#[derive(Debug, Clone)]
pub struct Node {
    pub id: i64,
    pub position: Geodetic,
    pub tags: Tags,
}

/// Chemin fermé avec ses nœuds
///
/// Invariant: `node_refs` contient `nodes.len() + 1` références et
/// `node_refs[0] == node_refs[last]`.
#[derive(Debug, Clone)]
pub struct ClosedWay {
    pub id: i64,
    pub nodes: Vec<Node>,
    pub node_refs: Vec<i64>,
    pub tags: Tags,
}

/// Construit un chemin fermé depuis une série de points ordonnés
///
/// Chaque point reçoit l'identifiant suivant de l'allocateur, dans
/// l'ordre; la référence du premier nœud est ajoutée en fin de liste pour
/// fermer la boucle, puis un identifiant de plus est pris pour le chemin.
///
/// # Errors
///
/// `EmptyWay` pour zéro point, `Degenerate` pour 1 ou 2 points,
/// `TagCount` si `tags` est fourni avec une longueur différente du nombre
/// de points.
pub fn build_closed_way(
    points: &[Geodetic],
    tags: Option<&[Tags]>,
    ids: &mut IdAllocator,
) -> Result<ClosedWay, WayError> {
    if points.is_empty() {
        return Err(WayError::EmptyWay);
    }
    if points.len() < 3 {
        return Err(WayError::Degenerate {
            points: points.len(),
        });
    }
    if let Some(tags) = tags {
        if tags.len() != points.len() {
            return Err(WayError::TagCount {
                points: points.len(),
                tags: tags.len(),
            });
        }
    }

    let mut nodes = Vec::with_capacity(points.len());
    let mut node_refs = Vec::with_capacity(points.len() + 1);

    for (k, &position) in points.iter().enumerate() {
        let id = ids.next();
        let tags = tags.map(|t| t[k].clone()).unwrap_or_default();
        nodes.push(Node { id, position, tags });
        node_refs.push(id);
    }

    // Boucle parfaite: le premier nœud referme le chemin
    node_refs.push(node_refs[0]);

    Ok(ClosedWay {
        id: ids.next(),
        nodes,
        node_refs,
        tags: Tags::new(),
    })
}
