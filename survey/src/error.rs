//! Types d'erreurs pour le crate survey

use thiserror::Error;

/// Erreurs pouvant survenir lors du traitement des relevés
#[derive(Debug, Error)]
pub enum SurveyError {
    /// Erreur d'I/O lors de la lecture d'un fichier de points
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ligne malformée dans un fichier de points
    #[error("Parse error in {file} at line {line}: {reason}")]
    Parse {
        file: String,
        line: usize,
        reason: String,
    },

    /// Coordonnée géodésique hors limites
    #[error("Coordinate out of range: lat={lat}, lon={lon} ({reason})")]
    OutOfRange { lat: f64, lon: f64, reason: String },

    /// Polyligne dégénérée: moins de 2 points, aucun segment
    #[error("Empty index: polyline has {points} point(s), need at least 2")]
    EmptyIndex { points: usize },
}

impl SurveyError {
    /// Crée une erreur de parsing avec contexte
    pub fn parse_error(file: impl Into<String>, line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            file: file.into(),
            line,
            reason: reason.into(),
        }
    }

    /// Crée une erreur de coordonnée hors limites
    pub fn out_of_range(lat: f64, lon: f64, reason: impl Into<String>) -> Self {
        Self::OutOfRange {
            lat,
            lon,
            reason: reason.into(),
        }
    }
}
