//! Estimation de largeur de voie
//!
//! Pour chaque point d'une ligne centrale: projection dans le plan UTM,
//! requête de plus proche segment sur les deux lignes de marquage qui
//! bordent la voie, somme des deux distances. Strictement point à point:
//! aucun lissage, aucune interpolation, aucun rejet d'aberrants — chaque
//! largeur est indépendante de ses voisines.

use geo::Coord;

use crate::nearest::NearestLinkIndex;
use crate::project::UtmProjector;
use crate::types::Geodetic;
use crate::SurveyError;

/// Largeur de la voie en un point plan: somme des distances aux deux bords
pub fn width_at(point: Coord, left: &NearestLinkIndex, right: &NearestLinkIndex) -> f64 {
    left.closest_link(point).distance + right.closest_link(point).distance
}

/// Estime la largeur de voie à chaque point de la ligne centrale
///
/// # Arguments
///
/// * `centerline` - Points géodésiques de la ligne centrale, dans l'ordre
/// * `left`, `right` - Index des deux lignes de marquage bordant la voie
/// * `projector` - Projecteur partagé par toute l'exécution
///
/// # Returns
///
/// Une largeur (en mètres, plan UTM) par point, dans le même ordre.
pub fn estimate_widths(
    centerline: &[Geodetic],
    left: &NearestLinkIndex,
    right: &NearestLinkIndex,
    projector: &UtmProjector,
) -> Result<Vec<f64>, SurveyError> {
    centerline
        .iter()
        .map(|&p| Ok(width_at(projector.project(p)?, left, right)))
        .collect()
}

/// Construit l'index d'une ligne de marquage depuis ses points géodésiques
pub fn edge_index(
    edge: &[Geodetic],
    projector: &UtmProjector,
) -> Result<NearestLinkIndex, SurveyError> {
    NearestLinkIndex::new(projector.project_series(edge)?)
}
