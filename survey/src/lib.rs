//! # survey
//!
//! Parser et noyau géométrique pour les fichiers de points de relevé
//! routier (lignes centrales de voies et marquages au sol).
//!
//! ## Features
//!
//! - Lecture des fichiers de points (paires lat/lon en texte brut)
//! - Projection géodésique → plan UTM en Rust pur
//! - Requête de plus proche segment sur une polyligne de référence
//! - Estimation de largeur de voie par projection sur les deux marquages
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::path::Path;
//! use survey::{AxisOrder, UtmProjector};
//!
//! let center = survey::read_series(Path::new("centers/inner.txt"), AxisOrder::LatLon)?;
//! let left = survey::read_series(Path::new("stripes/inner.txt"), AxisOrder::LatLon)?;
//! let right = survey::read_series(Path::new("stripes/middle.txt"), AxisOrder::LatLon)?;
//!
//! let projector = UtmProjector::from_geodetic(center[0])?;
//! let left = survey::width::edge_index(&left, &projector)?;
//! let right = survey::width::edge_index(&right, &projector)?;
//!
//! let widths = survey::width::estimate_widths(&center, &left, &right, &projector)?;
//! ```

pub mod error;
pub mod nearest;
pub mod parser;
pub mod project;
pub mod types;
pub mod width;

pub use error::SurveyError;
pub use nearest::{ClosestLink, NearestLinkIndex};
pub use parser::{parse_series, read_series};
pub use project::{UtmProjector, UtmZone};
pub use types::{AxisOrder, Geodetic, PointSeries};
