//! Conversion géodésique → plan en Rust pur (sans dépendances externes)
//!
//! Projette les points WGS84 des relevés vers le plan UTM pour que les
//! distances euclidiennes soient directement comparables. La zone est
//! dérivée du premier point projeté puis figée: tous les points d'une
//! même exécution partagent le même plan.

mod ellipsoid;
mod utm;

pub use ellipsoid::WGS84;
pub use utm::geodetic_to_utm;

use geo::Coord;

use crate::types::Geodetic;
use crate::SurveyError;

/// Limites de validité UTM en latitude (degrés)
const LAT_MIN: f64 = -80.0;
const LAT_MAX: f64 = 84.0;

/// Zone UTM (numéro + hémisphère)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtmZone {
    /// Numéro de zone (1 à 60)
    pub number: u8,
    /// Hémisphère sud
    pub south: bool,
}

impl UtmZone {
    pub fn new(number: u8, south: bool) -> Self {
        Self { number, south }
    }

    /// Dérive la zone depuis un point géodésique
    ///
    /// Applique les exceptions de découpage UTM (sud-ouest de la Norvège,
    /// Svalbard), comme le découpage standard des cartes.
    pub fn for_geodetic(point: Geodetic) -> Result<Self, SurveyError> {
        validate(point)?;
        let Geodetic { lat, lon } = point;

        // Exception Norvège (32V)
        if (56.0..64.0).contains(&lat) && (3.0..12.0).contains(&lon) {
            return Ok(Self::new(32, false));
        }

        // Exceptions Svalbard
        if (72.0..=LAT_MAX).contains(&lat) && (0.0..42.0).contains(&lon) {
            let number = match lon {
                l if l < 9.0 => 31,
                l if l < 21.0 => 33,
                l if l < 33.0 => 35,
                _ => 37,
            };
            return Ok(Self::new(number, false));
        }

        let number = (((lon + 180.0) / 6.0).floor() as i32 + 1).clamp(1, 60) as u8;
        Ok(Self::new(number, lat < 0.0))
    }

    /// Méridien central de la zone (degrés)
    pub fn central_meridian(&self) -> f64 {
        (self.number as f64 - 1.0) * 6.0 - 180.0 + 3.0
    }
}

/// Vérifie qu'un point géodésique est dans le domaine de validité UTM
fn validate(point: Geodetic) -> Result<(), SurveyError> {
    let Geodetic { lat, lon } = point;

    if !lat.is_finite() || !(LAT_MIN..=LAT_MAX).contains(&lat) {
        return Err(SurveyError::out_of_range(
            lat,
            lon,
            format!("latitude outside [{}, {}]", LAT_MIN, LAT_MAX),
        ));
    }
    if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
        return Err(SurveyError::out_of_range(
            lat,
            lon,
            "longitude outside [-180, 180]",
        ));
    }

    Ok(())
}

/// Projecteur géodésique → plan UTM à zone figée
///
/// La zone est choisie à la construction et ne change plus, même si un
/// point projeté ensuite tombe nominalement dans une zone voisine: un
/// circuit de relevé tient dans une zone et les largeurs doivent être
/// calculées dans un plan unique.
#[derive(Debug, Clone, Copy)]
pub struct UtmProjector {
    zone: UtmZone,
}

impl UtmProjector {
    /// Crée un projecteur pour une zone donnée
    pub fn new(zone: UtmZone) -> Self {
        Self { zone }
    }

    /// Crée un projecteur dont la zone est dérivée du point fourni
    pub fn from_geodetic(point: Geodetic) -> Result<Self, SurveyError> {
        Ok(Self::new(UtmZone::for_geodetic(point)?))
    }

    /// Zone utilisée par ce projecteur
    pub fn zone(&self) -> UtmZone {
        self.zone
    }

    /// Projette un point géodésique vers le plan (easting, northing)
    pub fn project(&self, point: Geodetic) -> Result<Coord, SurveyError> {
        validate(point)?;
        let (x, y) = utm::geodetic_to_utm(point, self.zone);
        Ok(Coord { x, y })
    }

    /// Projette une série de points dans l'ordre
    pub fn project_series(&self, points: &[Geodetic]) -> Result<Vec<Coord>, SurveyError> {
        points.iter().map(|&p| self.project(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_from_point() {
        // Alabama → zone 16N
        let zone = UtmZone::for_geodetic(Geodetic::new(32.6, -85.3)).unwrap();
        assert_eq!(zone, UtmZone::new(16, false));
        assert_eq!(zone.central_meridian(), -87.0);

        // La Réunion → zone 40S
        let zone = UtmZone::for_geodetic(Geodetic::new(-20.88, 55.45)).unwrap();
        assert_eq!(zone, UtmZone::new(40, true));
    }

    #[test]
    fn test_zone_exceptions() {
        // Sud-ouest de la Norvège → 32V
        let zone = UtmZone::for_geodetic(Geodetic::new(60.0, 5.0)).unwrap();
        assert_eq!(zone.number, 32);

        // Svalbard
        let zone = UtmZone::for_geodetic(Geodetic::new(78.0, 20.0)).unwrap();
        assert_eq!(zone.number, 33);
    }

    #[test]
    fn test_out_of_range() {
        assert!(UtmZone::for_geodetic(Geodetic::new(85.0, 0.0)).is_err());
        assert!(UtmZone::for_geodetic(Geodetic::new(-81.0, 0.0)).is_err());
        assert!(UtmZone::for_geodetic(Geodetic::new(0.0, 181.0)).is_err());
        assert!(UtmZone::for_geodetic(Geodetic::new(f64::NAN, 0.0)).is_err());
    }

    #[test]
    fn test_projector_fixed_zone() {
        let proj = UtmProjector::from_geodetic(Geodetic::new(32.6, -85.3)).unwrap();
        assert_eq!(proj.zone(), UtmZone::new(16, false));

        // Un point nominalement en zone 17 reste projeté dans le plan de la zone 16
        let west = proj.project(Geodetic::new(32.6, -85.3)).unwrap();
        let east = proj.project(Geodetic::new(32.6, -80.9)).unwrap();
        assert!(east.x > west.x);
    }

    #[test]
    fn test_project_validates() {
        let proj = UtmProjector::new(UtmZone::new(16, false));
        assert!(matches!(
            proj.project(Geodetic::new(91.0, 0.0)),
            Err(SurveyError::OutOfRange { .. })
        ));
    }
}
