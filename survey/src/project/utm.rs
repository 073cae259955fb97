//! Projection UTM (Universal Transverse Mercator)
//!
//! Transverse Mercator en séries (Snyder), sur l'ellipsoïde WGS84,
//! sens géodésique → plan uniquement: l'outil ne revient jamais du plan
//! vers les coordonnées géodésiques.

use super::ellipsoid::WGS84;
use super::UtmZone;
use crate::types::Geodetic;

/// Facteur d'échelle au méridien central
const K0: f64 = 0.9996;

/// False easting
const X0: f64 = 500_000.0;

/// False northing (hémisphère sud)
const Y0_SOUTH: f64 = 10_000_000.0;

/// Convertit des coordonnées géodésiques WGS84 vers UTM (easting, northing)
///
/// La latitude et la longitude sont supposées déjà validées (voir
/// [`super::UtmProjector`]); la zone fournit le méridien central.
pub fn geodetic_to_utm(point: Geodetic, zone: UtmZone) -> (f64, f64) {
    let a = WGS84::A;
    let e2 = WGS84::E2;
    let ep2 = WGS84::EP2;

    let (lat, lon) = point.to_radians();
    let lon0 = zone.central_meridian().to_radians();

    let sin_lat = lat.sin();
    let cos_lat = lat.cos();
    let tan_lat = lat.tan();

    let n = a / (1.0 - e2 * sin_lat.powi(2)).sqrt();
    let t = tan_lat.powi(2);
    let c = ep2 * cos_lat.powi(2);
    let big_a = (lon - lon0) * cos_lat;

    // Arc méridien depuis l'équateur
    let m = a
        * ((1.0 - e2 / 4.0 - 3.0 * e2.powi(2) / 64.0 - 5.0 * e2.powi(3) / 256.0) * lat
            - (3.0 * e2 / 8.0 + 3.0 * e2.powi(2) / 32.0 + 45.0 * e2.powi(3) / 1024.0)
                * (2.0 * lat).sin()
            + (15.0 * e2.powi(2) / 256.0 + 45.0 * e2.powi(3) / 1024.0) * (4.0 * lat).sin()
            - (35.0 * e2.powi(3) / 3072.0) * (6.0 * lat).sin());

    let easting = X0
        + K0 * n
            * (big_a
                + (1.0 - t + c) * big_a.powi(3) / 6.0
                + (5.0 - 18.0 * t + t.powi(2) + 72.0 * c - 58.0 * ep2) * big_a.powi(5) / 120.0);

    let mut northing = K0
        * (m + n
            * tan_lat
            * (big_a.powi(2) / 2.0
                + (5.0 - t + 9.0 * c + 4.0 * c.powi(2)) * big_a.powi(4) / 24.0
                + (61.0 - 58.0 * t + t.powi(2) + 600.0 * c - 330.0 * ep2) * big_a.powi(6)
                    / 720.0));

    if zone.south {
        northing += Y0_SOUTH;
    }

    (easting, northing)
}
