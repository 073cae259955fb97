//! Construction et sérialisation des chemins OSM

pub mod osm;
pub mod way;

pub use osm::OsmWriter;
pub use way::{build_closed_way, ClosedWay, IdAllocator, Node, Tags, WayError};
