//! Définition et implémentation des commandes CLI
//!
//! Deux commandes:
//! - défaut: centres + marquages → chemins fermés avec tags de largeur
//! - `centers`: centres seuls, sans largeur

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use tracing::info;

use survey::{width, AxisOrder, UtmProjector};

use crate::config::{series_path, LaneConfig};
use crate::export::{build_closed_way, IdAllocator, OsmWriter, Tags, WayError};
use crate::report::{ConvertReport, LaneStats};

/// Ordre des champs des fichiers de relevé, côté CLI
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AxisOrderArg {
    /// Latitude puis longitude
    LatLon,
    /// Longitude puis latitude
    LonLat,
}

impl From<AxisOrderArg> for AxisOrder {
    fn from(arg: AxisOrderArg) -> Self {
        match arg {
            AxisOrderArg::LatLon => AxisOrder::LatLon,
            AxisOrderArg::LonLat => AxisOrder::LonLat,
        }
    }
}

/// Arguments de la conversion complète (commande par défaut)
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Fichier OSM de destination (supprimé au préalable s'il existe)
    pub destination: PathBuf,

    /// Répertoire des lignes centrales
    #[arg(long, default_value = "survey/centers")]
    pub centers: PathBuf,

    /// Répertoire des marquages au sol
    #[arg(long, default_value = "survey/stripes")]
    pub stripes: PathBuf,

    /// Nom de preset (track) ou chemin d'un fichier JSON de correspondances
    #[arg(long, default_value = "track")]
    pub config: String,

    /// Ordre des champs dans les fichiers de points
    #[arg(long, value_enum, default_value = "lat-lon")]
    pub axis_order: AxisOrderArg,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Écrire les lignes centrales seules, sans tags de largeur
    Centers {
        /// Fichier OSM de destination (supprimé au préalable s'il existe)
        destination: PathBuf,

        /// Répertoire des lignes centrales
        #[arg(long, default_value = "survey/centers")]
        centers: PathBuf,

        /// Nom de preset (track) ou chemin d'un fichier JSON de correspondances
        #[arg(long, default_value = "track")]
        config: String,

        /// Ordre des champs dans les fichiers de points
        #[arg(long, value_enum, default_value = "lat-lon")]
        axis_order: AxisOrderArg,
    },
}

/// Exécute la conversion complète: centres + marquages → OSM avec largeurs
pub fn cmd_convert(
    destination: &Path,
    centers_dir: &Path,
    stripes_dir: &Path,
    config_spec: &str,
    axis_order: AxisOrder,
) -> Result<()> {
    let started = Instant::now();

    let config = LaneConfig::resolve(config_spec)?;
    let lanes = config.lanes_sorted();
    if lanes.is_empty() {
        anyhow::bail!("Config {:?} defines no lanes", config_spec);
    }

    remove_existing(destination);

    let mut report = ConvertReport::new(&destination.display().to_string());
    let mut ids = IdAllocator::new();
    let mut writer = OsmWriter::create(destination)?;
    let mut projector: Option<UtmProjector> = None;

    for (name, edges) in lanes {
        let center = survey::read_series(&series_path(centers_dir, name), axis_order)
            .with_context(|| format!("Lane '{}': centerline", name))?;
        let left = survey::read_series(&series_path(stripes_dir, &edges.left), axis_order)
            .with_context(|| format!("Lane '{}': left edge '{}'", name, edges.left))?;
        let right = survey::read_series(&series_path(stripes_dir, &edges.right), axis_order)
            .with_context(|| format!("Lane '{}': right edge '{}'", name, edges.right))?;

        // Zone UTM figée sur le premier point du premier centre: toutes
        // les voies du fichier partagent le même plan
        let first = center
            .first()
            .copied()
            .ok_or(WayError::EmptyWay)
            .with_context(|| format!("Lane '{}': empty centerline", name))?;
        let proj = match projector {
            Some(p) => p,
            None => {
                let p = UtmProjector::from_geodetic(first)?;
                info!(zone = ?p.zone(), "UTM zone fixed for this run");
                projector = Some(p);
                p
            }
        };

        let left_index = width::edge_index(&left, &proj)
            .with_context(|| format!("Lane '{}': left edge '{}'", name, edges.left))?;
        let right_index = width::edge_index(&right, &proj)
            .with_context(|| format!("Lane '{}': right edge '{}'", name, edges.right))?;

        let widths = width::estimate_widths(&center, &left_index, &right_index, &proj)?;
        let tags: Vec<Tags> = widths
            .iter()
            .map(|w| vec![("width".to_string(), format!("{}", w))])
            .collect();

        let way = build_closed_way(&center, Some(&tags), &mut ids)
            .with_context(|| format!("Lane '{}'", name))?;
        writer.write_way(&way)?;

        info!(lane = name, points = center.len(), "Lane converted");
        report.record_lane(LaneStats::with_widths(name, &widths));
    }

    writer.finish()?;

    report.set_duration(started.elapsed());
    report.display();

    Ok(())
}

/// Exécute la conversion des centres seuls, sans calcul de largeur
pub fn cmd_centers(
    destination: &Path,
    centers_dir: &Path,
    config_spec: &str,
    axis_order: AxisOrder,
) -> Result<()> {
    let started = Instant::now();

    let config = LaneConfig::resolve(config_spec)?;
    let lanes = config.lanes_sorted();
    if lanes.is_empty() {
        anyhow::bail!("Config {:?} defines no lanes", config_spec);
    }

    remove_existing(destination);

    let mut report = ConvertReport::new(&destination.display().to_string());
    let mut ids = IdAllocator::new();
    let mut writer = OsmWriter::create(destination)?;

    for (name, _) in lanes {
        let center = survey::read_series(&series_path(centers_dir, name), axis_order)
            .with_context(|| format!("Lane '{}': centerline", name))?;

        let way = build_closed_way(&center, None, &mut ids)
            .with_context(|| format!("Lane '{}'", name))?;
        writer.write_way(&way)?;

        info!(lane = name, points = center.len(), "Lane written");
        report.record_lane(LaneStats::centers_only(name, center.len()));
    }

    writer.finish()?;

    report.set_duration(started.elapsed());
    report.display();

    Ok(())
}

/// Supprime la destination si elle existe déjà (sans erreur si absente)
fn remove_existing(path: &Path) {
    if std::fs::remove_file(path).is_ok() {
        info!(path = %path.display(), "Removed existing destination");
    }
}
