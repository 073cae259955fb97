//! Configuration des correspondances voie → marquages
//!
//! Chaque voie (ligne centrale) est bordée par deux marquages au sol,
//! désignés par le nom de leur fichier de relevé (sans extension). Les
//! voies adjacentes partagent un marquage: la correspondance est donc
//! déclarée explicitement plutôt que déduite.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Configuration principale: nom de voie → marquages gauche/droit
#[derive(Debug, Deserialize, Serialize)]
pub struct LaneConfig {
    #[serde(flatten)]
    pub lanes: HashMap<String, LaneEdges>,
}

/// Les deux marquages bordant une voie
#[derive(Debug, Deserialize, Serialize)]
pub struct LaneEdges {
    /// Nom du fichier de marquage gauche (sans extension)
    pub left: String,

    /// Nom du fichier de marquage droit (sans extension)
    pub right: String,
}

impl LaneConfig {
    /// Charge une configuration depuis un fichier
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content).context("Failed to parse config JSON")
    }

    /// Charge une configuration depuis un preset embarqué
    pub fn from_preset(preset: &str) -> Result<Self> {
        match preset {
            "track" => Self::load_embedded(include_str!("presets/track.json")),
            _ => anyhow::bail!("Unknown preset: {}. Use: track", preset),
        }
    }

    /// Résout un nom de preset ou un chemin de fichier JSON
    ///
    /// Un spec n'est traité comme chemin que s'il en a la forme
    /// (séparateur ou extension `.json`): un fichier parasite nommé
    /// `track` dans le répertoire courant ne masque pas le preset.
    pub fn resolve(spec: &str) -> Result<Self> {
        if is_path_spec(spec) {
            Self::load(Path::new(spec))
        } else {
            Self::from_preset(spec)
        }
    }

    fn load_embedded(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse embedded config")
    }

    /// Voies triées par nom, pour un ordre de sortie déterministe
    pub fn lanes_sorted(&self) -> Vec<(&str, &LaneEdges)> {
        let mut lanes: Vec<_> = self.lanes.iter().map(|(k, v)| (k.as_str(), v)).collect();
        lanes.sort_by_key(|(name, _)| *name);
        lanes
    }
}

/// Vrai si le spec ressemble à un chemin plutôt qu'à un nom de preset
fn is_path_spec(spec: &str) -> bool {
    spec.ends_with(".json")
        || spec.contains('/')
        || spec.contains(std::path::MAIN_SEPARATOR)
}

/// Chemin du fichier de relevé d'une voie ou d'un marquage
pub fn series_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.txt", name))
}
