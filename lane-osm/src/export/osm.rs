//! Sérialisation OSM XML (streaming)
//!
//! Écrit les nœuds puis le chemin de chaque voie, dans l'ordre de
//! construction. Contrat de sortie: chaque nœud porte un identifiant
//! positif unique, une latitude, une longitude, une version et des tags
//! optionnels; chaque chemin porte un identifiant, une version, des tags
//! et une liste ordonnée de références de nœuds dont la première et la
//! dernière sont égales. Aucune relation n'est produite.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use super::way::ClosedWay;

/// Version OSM portée par chaque élément émis
const OSM_VERSION: u32 = 1;

/// Écrivain OSM XML en streaming
pub struct OsmWriter<W: Write> {
    inner: W,
}

impl OsmWriter<BufWriter<File>> {
    /// Crée le fichier de destination et écrit l'en-tête
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .context(format!("Failed to create file: {}", path.display()))?;
        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> OsmWriter<W> {
    /// Démarre un document OSM sur un writer quelconque
    pub fn new(mut inner: W) -> Result<Self> {
        writeln!(inner, r#"<?xml version='1.0' encoding='UTF-8'?>"#)?;
        writeln!(inner, r#"<osm version="0.6" generator="lane-osm">"#)?;
        Ok(Self { inner })
    }

    /// Écrit les nœuds d'un chemin puis le chemin lui-même
    pub fn write_way(&mut self, way: &ClosedWay) -> Result<()> {
        for node in &way.nodes {
            if node.tags.is_empty() {
                writeln!(
                    self.inner,
                    r#"  <node id="{}" lat="{}" lon="{}" version="{}"/>"#,
                    node.id, node.position.lat, node.position.lon, OSM_VERSION
                )?;
            } else {
                writeln!(
                    self.inner,
                    r#"  <node id="{}" lat="{}" lon="{}" version="{}">"#,
                    node.id, node.position.lat, node.position.lon, OSM_VERSION
                )?;
                for (key, value) in &node.tags {
                    self.write_tag(key, value)?;
                }
                writeln!(self.inner, "  </node>")?;
            }
        }

        writeln!(
            self.inner,
            r#"  <way id="{}" version="{}">"#,
            way.id, OSM_VERSION
        )?;
        for node_ref in &way.node_refs {
            writeln!(self.inner, r#"    <nd ref="{}"/>"#, node_ref)?;
        }
        for (key, value) in &way.tags {
            self.write_tag(key, value)?;
        }
        writeln!(self.inner, "  </way>")?;

        Ok(())
    }

    fn write_tag(&mut self, key: &str, value: &str) -> Result<()> {
        writeln!(
            self.inner,
            r#"    <tag k="{}" v="{}"/>"#,
            escape_xml(key),
            escape_xml(value)
        )?;
        Ok(())
    }

    /// Termine le document et vide les tampons
    pub fn finish(mut self) -> Result<()> {
        writeln!(self.inner, "</osm>")?;
        self.inner.flush()?;
        Ok(())
    }
}

/// Échappe une chaîne pour un attribut XML
fn escape_xml(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            c => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::way::{build_closed_way, IdAllocator, Tags};
    use survey::Geodetic;

    fn sample_way(tags: Option<Vec<Tags>>) -> ClosedWay {
        let points = vec![
            Geodetic::new(32.6000, -85.3000),
            Geodetic::new(32.6001, -85.3000),
            Geodetic::new(32.6001, -85.3001),
        ];
        let mut ids = IdAllocator::new();
        build_closed_way(&points, tags.as_deref(), &mut ids).unwrap()
    }

    #[test]
    fn test_write_way() {
        let mut buffer = Vec::new();
        let mut writer = OsmWriter::new(&mut buffer).unwrap();
        writer.write_way(&sample_way(None)).unwrap();
        writer.finish().unwrap();

        let xml = String::from_utf8(buffer).unwrap();
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains(r#"<osm version="0.6""#));
        assert!(xml.contains(r#"<node id="1" lat="32.6" lon="-85.3" version="1"/>"#));
        assert!(xml.contains(r#"<way id="4" version="1">"#));
        assert!(xml.ends_with("</osm>\n"));

        // Fermeture de boucle: la référence 1 apparaît en premier et en dernier
        let refs: Vec<&str> = xml.matches(r#"<nd ref="1"/>"#).collect();
        assert_eq!(refs.len(), 2);
    }

    #[test]
    fn test_width_tags() {
        let tags: Vec<Tags> = vec![
            vec![("width".to_string(), "11.25".to_string())],
            vec![("width".to_string(), "11.5".to_string())],
            vec![("width".to_string(), "11.75".to_string())],
        ];

        let mut buffer = Vec::new();
        let mut writer = OsmWriter::new(&mut buffer).unwrap();
        writer.write_way(&sample_way(Some(tags))).unwrap();
        writer.finish().unwrap();

        let xml = String::from_utf8(buffer).unwrap();
        assert_eq!(xml.matches(r#"<tag k="width""#).count(), 3);
        assert!(xml.contains(r#"<tag k="width" v="11.5"/>"#));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("width"), "width");
        assert_eq!(escape_xml(r#"a"b"#), "a&quot;b");
        assert_eq!(escape_xml("a<b&c"), "a&lt;b&amp;c");
    }
}
