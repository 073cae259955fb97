//! Rapport de conversion
//!
//! Collecte les compteurs d'une exécution (voies, nœuds, chemins) et les
//! statistiques de largeur par voie, puis les affiche en fin de run.

use std::time::Duration;

use serde::Serialize;

/// Statistiques d'une voie convertie
#[derive(Debug, Clone, Serialize)]
pub struct LaneStats {
    /// Nom de la voie
    pub name: String,
    /// Nombre de points de la ligne centrale
    pub points: usize,
    /// Largeur minimale (mètres), absente en mode centres seuls
    pub width_min: Option<f64>,
    /// Largeur moyenne (mètres)
    pub width_mean: Option<f64>,
    /// Largeur maximale (mètres)
    pub width_max: Option<f64>,
}

impl LaneStats {
    /// Statistiques d'une voie sans calcul de largeur
    pub fn centers_only(name: &str, points: usize) -> Self {
        Self {
            name: name.to_string(),
            points,
            width_min: None,
            width_mean: None,
            width_max: None,
        }
    }

    /// Statistiques d'une voie avec ses largeurs calculées
    pub fn with_widths(name: &str, widths: &[f64]) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &w in widths {
            min = min.min(w);
            max = max.max(w);
            sum += w;
        }

        if widths.is_empty() {
            Self::centers_only(name, 0)
        } else {
            Self {
                name: name.to_string(),
                points: widths.len(),
                width_min: Some(min),
                width_mean: Some(sum / widths.len() as f64),
                width_max: Some(max),
            }
        }
    }
}

/// Rapport complet d'une conversion
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConvertReport {
    /// Fichier de destination
    pub destination: String,
    /// Durée de la conversion
    pub duration_secs: f64,
    /// Nombre de nœuds écrits
    pub nodes_written: usize,
    /// Nombre de chemins écrits
    pub ways_written: usize,
    /// Statistiques par voie
    pub lanes: Vec<LaneStats>,
}

impl ConvertReport {
    pub fn new(destination: &str) -> Self {
        Self {
            destination: destination.to_string(),
            ..Default::default()
        }
    }

    /// Enregistre une voie écrite
    pub fn record_lane(&mut self, stats: LaneStats) {
        self.nodes_written += stats.points;
        self.ways_written += 1;
        self.lanes.push(stats);
    }

    /// Définit la durée de la conversion
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration_secs = duration.as_secs_f64();
    }

    /// Affiche le rapport sur la console
    pub fn display(&self) {
        println!("\n{}", "=".repeat(60));
        println!("CONVERT REPORT - {}", self.destination);
        println!("{}", "=".repeat(60));

        println!("\nDuration: {:.2}s", self.duration_secs);
        println!(
            "Written: {} nodes, {} ways",
            self.nodes_written, self.ways_written
        );

        if !self.lanes.is_empty() {
            println!("\n--- BY LANE ---");
            for lane in &self.lanes {
                match (lane.width_min, lane.width_mean, lane.width_max) {
                    (Some(min), Some(mean), Some(max)) => println!(
                        "  {}: {} points, width min {:.2} m / mean {:.2} m / max {:.2} m",
                        lane.name, lane.points, min, mean, max
                    ),
                    _ => println!("  {}: {} points, no widths", lane.name, lane.points),
                }
            }
        }

        println!("\n{}", "=".repeat(60));
    }
}
