//! Types de données pour le crate survey

/// Point en coordonnées géodésiques WGS84 (degrés)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geodetic {
    /// Latitude en degrés
    pub lat: f64,
    /// Longitude en degrés
    pub lon: f64,
}

impl Geodetic {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Convertit en radians (lat, lon)
    pub fn to_radians(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lon.to_radians())
    }
}

/// Ordre des champs dans un fichier de points
///
/// L'ordre varie selon la provenance des relevés et n'est jamais déduit
/// des données: l'appelant doit le fournir explicitement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisOrder {
    /// Latitude puis longitude (convention des fichiers de relevé)
    #[default]
    LatLon,
    /// Longitude puis latitude
    LonLat,
}

impl AxisOrder {
    /// Interprète une paire de champs dans cet ordre
    pub fn to_geodetic(self, first: f64, second: f64) -> Geodetic {
        match self {
            AxisOrder::LatLon => Geodetic::new(first, second),
            AxisOrder::LonLat => Geodetic::new(second, first),
        }
    }
}

/// Séquence ordonnée de points d'un relevé
///
/// L'ordre est significatif: deux points adjacents définissent un segment
/// de la polyligne. Aucune déduplication n'est effectuée.
pub type PointSeries = Vec<Geodetic>;
