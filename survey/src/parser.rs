//! Parser pour les fichiers de points de relevé
//!
//! Format: un point par ligne non vide, deux champs flottants séparés par
//! des espaces, pas d'en-tête, pas de commentaires.

use std::path::Path;

use tracing::debug;

use crate::types::{AxisOrder, PointSeries};
use crate::SurveyError;

/// Lit un fichier de points et retourne la série ordonnée
///
/// # Arguments
///
/// * `path` - Chemin vers le fichier texte
/// * `axis_order` - Ordre des deux champs (lat,lon ou lon,lat)
///
/// # Errors
///
/// Retourne `SurveyError::Parse` avec le numéro de ligne (base 1) si une
/// ligne non vide ne contient pas exactement deux champs numériques.
pub fn read_series(path: &Path, axis_order: AxisOrder) -> Result<PointSeries, SurveyError> {
    let content = std::fs::read_to_string(path)?;
    let series = parse_series(&content, &path.display().to_string(), axis_order)?;
    debug!(file = %path.display(), points = series.len(), "Loaded point series");
    Ok(series)
}

/// Parse le contenu d'un fichier de points déjà lu
pub fn parse_series(
    content: &str,
    file: &str,
    axis_order: AxisOrder,
) -> Result<PointSeries, SurveyError> {
    let mut points = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        let first = parse_field(fields.next(), file, line_no + 1)?;
        let second = parse_field(fields.next(), file, line_no + 1)?;

        if fields.next().is_some() {
            return Err(SurveyError::parse_error(
                file,
                line_no + 1,
                format!("expected 2 fields, got more: {:?}", line),
            ));
        }

        points.push(axis_order.to_geodetic(first, second));
    }

    Ok(points)
}

/// Parse un champ flottant, avec contexte fichier/ligne en cas d'échec
fn parse_field(field: Option<&str>, file: &str, line: usize) -> Result<f64, SurveyError> {
    let field = field
        .ok_or_else(|| SurveyError::parse_error(file, line, "expected 2 fields, got fewer"))?;

    fast_float::parse::<f64, _>(field)
        .map_err(|_| SurveyError::parse_error(file, line, format!("invalid float: {:?}", field)))
}
