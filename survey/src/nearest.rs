//! Index de plus proche segment sur une polyligne plane
//!
//! Répond à la question: quel est le point le plus proche d'un point Q sur
//! la polyligne de référence, et à quelle distance? Balayage exhaustif des
//! segments — O(n) par requête, suffisant pour un outil batch hors ligne.
//! L'interface permet de substituer une structure spatiale (grille,
//! R-tree) sans changer les appelants si le besoin apparaît.

use geo::{Coord, Line};

use crate::SurveyError;

/// Résultat d'une requête de plus proche segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestLink {
    /// Indice du segment (0 = entre les points 0 et 1)
    pub segment: usize,
    /// Point le plus proche sur la polyligne
    pub point: Coord,
    /// Distance euclidienne de la requête à ce point, toujours ≥ 0
    pub distance: f64,
}

/// Polyligne de référence en coordonnées planes, immuable après construction
#[derive(Debug, Clone)]
pub struct NearestLinkIndex {
    points: Vec<Coord>,
}

impl NearestLinkIndex {
    /// Construit l'index depuis une série de points plans ordonnés
    ///
    /// # Errors
    ///
    /// Retourne `SurveyError::EmptyIndex` pour moins de 2 points: aucun
    /// segment n'existe et aucune requête n'aurait de sens.
    pub fn new(points: Vec<Coord>) -> Result<Self, SurveyError> {
        if points.len() < 2 {
            return Err(SurveyError::EmptyIndex {
                points: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// Nombre de segments de la polyligne
    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Cherche le point de la polyligne le plus proche de `query`
    ///
    /// Projection perpendiculaire sur chaque segment, paramètre borné à
    /// [0, 1] pour rester sur le segment (et non la droite infinie), donc
    /// comportement bien défini au-delà des extrémités. En cas d'égalité,
    /// le premier segment atteignant le minimum gagne (déterministe).
    pub fn closest_link(&self, query: Coord) -> ClosestLink {
        let mut best = ClosestLink {
            segment: 0,
            point: self.points[0],
            distance: f64::INFINITY,
        };

        for (segment, pair) in self.points.windows(2).enumerate() {
            let line = Line::new(pair[0], pair[1]);
            let point = clamped_projection(&line, query);
            let distance = euclidean(query, point);

            // Strictement inférieur: le premier minimum est conservé
            if distance < best.distance {
                best = ClosestLink {
                    segment,
                    point,
                    distance,
                };
            }
        }

        best
    }
}

/// Projette `q` sur le segment `line`, borné aux extrémités
fn clamped_projection(line: &Line, q: Coord) -> Coord {
    let d = line.delta();
    let len2 = d.x * d.x + d.y * d.y;

    // Segment de longueur nulle (points dupliqués dans le relevé)
    if len2 == 0.0 {
        return line.start;
    }

    let t = ((q.x - line.start.x) * d.x + (q.y - line.start.y) * d.y) / len2;
    let t = t.clamp(0.0, 1.0);

    Coord {
        x: line.start.x + t * d.x,
        y: line.start.y + t * d.y,
    }
}

fn euclidean(a: Coord, b: Coord) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}
