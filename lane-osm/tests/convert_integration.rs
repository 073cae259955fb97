//! Tests d'intégration: relevé complet → fichier OSM
//!
//! Génère un circuit circulaire synthétique (deux voies, trois marquages)
//! dans un répertoire temporaire, lance la conversion et vérifie les
//! propriétés du fichier OSM produit.

use std::fs;
use std::path::{Path, PathBuf};

use survey::AxisOrder;

/// Centre du circuit synthétique (site du relevé d'origine, Alabama)
const LAT0: f64 = 32.6;
const LON0: f64 = -85.3;

/// Points par anneau
const RING_POINTS: usize = 24;

/// Génère un anneau de rayon donné (mètres) autour du centre du circuit
fn ring(radius_m: f64) -> Vec<(f64, f64)> {
    let m_per_deg_lat = 111_320.0;
    let m_per_deg_lon = 111_320.0 * LAT0.to_radians().cos();

    (0..RING_POINTS)
        .map(|k| {
            let theta = 2.0 * std::f64::consts::PI * k as f64 / RING_POINTS as f64;
            let lat = LAT0 + radius_m * theta.sin() / m_per_deg_lat;
            let lon = LON0 + radius_m * theta.cos() / m_per_deg_lon;
            (lat, lon)
        })
        .collect()
}

fn write_series(path: &Path, points: &[(f64, f64)]) {
    let content: String = points
        .iter()
        .map(|(lat, lon)| format!("{:.9} {:.9}\n", lat, lon))
        .collect();
    fs::write(path, content).unwrap();
}

/// Prépare un répertoire de relevé complet et retourne (centers, stripes)
fn setup_survey(root: &Path) -> (PathBuf, PathBuf) {
    let centers = root.join("centers");
    let stripes = root.join("stripes");
    fs::create_dir_all(&centers).unwrap();
    fs::create_dir_all(&stripes).unwrap();

    // Marquages à 80 / 100 / 120 m, centres de voies à 90 et 110 m
    write_series(&stripes.join("inner.txt"), &ring(80.0));
    write_series(&stripes.join("middle.txt"), &ring(100.0));
    write_series(&stripes.join("outer.txt"), &ring(120.0));
    write_series(&centers.join("inner.txt"), &ring(90.0));
    write_series(&centers.join("outer.txt"), &ring(110.0));

    (centers, stripes)
}

fn temp_root(test: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("lane_osm_{}_{}", test, std::process::id()));
    let _ = fs::remove_dir_all(&root);
    fs::create_dir_all(&root).unwrap();
    root
}

/// Extrait la valeur d'un attribut XML sur une ligne
fn attr<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!("{}=\"", name);
    let start = line.find(&needle)? + needle.len();
    let end = line[start..].find('"')? + start;
    Some(&line[start..end])
}

#[test]
fn test_convert_full_pipeline() {
    let root = temp_root("convert");
    let (centers, stripes) = setup_survey(&root);
    let destination = root.join("track.osm");

    lane_osm::cli::cmd_convert(&destination, &centers, &stripes, "track", AxisOrder::LatLon)
        .unwrap();

    let xml = fs::read_to_string(&destination).unwrap();

    // Deux voies, un chemin fermé chacune, un nœud par point de centre
    assert_eq!(xml.matches("<way ").count(), 2);
    assert_eq!(xml.matches("<node ").count(), 2 * RING_POINTS);
    assert_eq!(xml.matches("<tag k=\"width\"").count(), 2 * RING_POINTS);

    // Chaque chemin est fermé: première référence == dernière, |P| + 1 références
    for way_block in xml.split("<way ").skip(1) {
        let block = way_block.split("</way>").next().unwrap();
        let refs: Vec<&str> = block
            .lines()
            .filter_map(|l| attr(l, "ref"))
            .collect();
        assert_eq!(refs.len(), RING_POINTS + 1);
        assert_eq!(refs.first(), refs.last());
    }

    // Largeur attendue ~20 m (anneaux à ±10 m, moins l'effet de corde)
    for line in xml.lines().filter(|l| l.contains("<tag k=\"width\"")) {
        let w: f64 = attr(line, "v").unwrap().parse().unwrap();
        assert!((18.0..21.0).contains(&w), "width={}", w);
    }

    // Identifiants: nœuds puis chemin, monotones, jamais réutilisés
    let node_ids: Vec<i64> = xml
        .lines()
        .filter(|l| l.trim_start().starts_with("<node "))
        .map(|l| attr(l, "id").unwrap().parse().unwrap())
        .collect();
    let expected: Vec<i64> = (1..=RING_POINTS as i64)
        .chain(RING_POINTS as i64 + 2..=2 * RING_POINTS as i64 + 1)
        .collect();
    assert_eq!(node_ids, expected);

    let way_ids: Vec<i64> = xml
        .lines()
        .filter(|l| l.trim_start().starts_with("<way "))
        .map(|l| attr(l, "id").unwrap().parse().unwrap())
        .collect();
    assert_eq!(
        way_ids,
        vec![RING_POINTS as i64 + 1, 2 * RING_POINTS as i64 + 2]
    );

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn test_roundtrip_coordinates() {
    let root = temp_root("roundtrip");
    let (centers, stripes) = setup_survey(&root);
    let destination = root.join("track.osm");

    lane_osm::cli::cmd_convert(&destination, &centers, &stripes, "track", AxisOrder::LatLon)
        .unwrap();

    let xml = fs::read_to_string(&destination).unwrap();

    // Les voies sont triées par nom: "inner" d'abord. Les 24 premiers
    // nœuds du fichier doivent reproduire la série du centre inner.
    let nodes: Vec<(f64, f64)> = xml
        .lines()
        .filter(|l| l.trim_start().starts_with("<node "))
        .take(RING_POINTS)
        .map(|l| {
            (
                attr(l, "lat").unwrap().parse().unwrap(),
                attr(l, "lon").unwrap().parse().unwrap(),
            )
        })
        .collect();

    let expected = ring(90.0);
    assert_eq!(nodes.len(), expected.len());
    for ((lat, lon), (exp_lat, exp_lon)) in nodes.iter().zip(&expected) {
        assert!((lat - exp_lat).abs() < 1e-8, "lat {} vs {}", lat, exp_lat);
        assert!((lon - exp_lon).abs() < 1e-8, "lon {} vs {}", lon, exp_lon);
    }

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn test_centers_only_has_no_width_tags() {
    let root = temp_root("centers");
    let (centers, _) = setup_survey(&root);
    let destination = root.join("centers.osm");

    lane_osm::cli::cmd_centers(&destination, &centers, "track", AxisOrder::LatLon).unwrap();

    let xml = fs::read_to_string(&destination).unwrap();
    assert_eq!(xml.matches("<way ").count(), 2);
    assert_eq!(xml.matches("<node ").count(), 2 * RING_POINTS);
    assert_eq!(xml.matches("<tag ").count(), 0);

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn test_existing_destination_is_replaced() {
    let root = temp_root("replace");
    let (centers, stripes) = setup_survey(&root);
    let destination = root.join("track.osm");

    fs::write(&destination, "stale content").unwrap();
    lane_osm::cli::cmd_convert(&destination, &centers, &stripes, "track", AxisOrder::LatLon)
        .unwrap();

    let xml = fs::read_to_string(&destination).unwrap();
    assert!(xml.starts_with("<?xml"));
    assert!(!xml.contains("stale content"));

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn test_malformed_survey_file_fails_with_location() {
    let root = temp_root("malformed");
    let (centers, stripes) = setup_survey(&root);
    fs::write(centers.join("inner.txt"), "32.6 -85.3\nabc def\n").unwrap();
    let destination = root.join("track.osm");

    let err = lane_osm::cli::cmd_convert(
        &destination,
        &centers,
        &stripes,
        "track",
        AxisOrder::LatLon,
    )
    .unwrap_err();

    let message = format!("{:#}", err);
    assert!(message.contains("inner.txt"), "message: {}", message);
    assert!(message.contains("line 2"), "message: {}", message);

    let _ = fs::remove_dir_all(&root);
}
