//! # lane-osm
//!
//! Conversion de relevés de voies (lignes centrales et marquages au sol)
//! en fichiers OSM de chemins fermés, avec un tag `width` par nœud.
//!
//! ## Features
//!
//! - Chemins fermés (premier nœud = dernier nœud) par voie relevée
//! - Largeur de voie par point, calculée dans le plan UTM
//! - Correspondances voie → marquages configurables (preset ou JSON)
//! - CLI simple
//!
//! ## Usage CLI
//!
//! ```bash
//! # Conversion complète avec largeurs
//! lane-osm ./out/track.osm --centers ./survey/centers --stripes ./survey/stripes
//!
//! # Centres seuls, sans largeur
//! lane-osm centers ./out/centers.osm --centers ./survey/centers
//! ```

pub mod cli;
pub mod config;
pub mod export;
pub mod report;

pub use config::LaneConfig;
pub use export::{build_closed_way, ClosedWay, IdAllocator, OsmWriter, WayError};
pub use report::{ConvertReport, LaneStats};
