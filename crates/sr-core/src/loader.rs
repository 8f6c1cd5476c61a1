//! CSV map loader.
//!
//! # CSV format
//!
//! Two files.  The node file declares one location per row, longitude first:
//!
//! ```csv
//! name,lon,lat
//! A_Home,-74.0060,40.7128
//! B_Intersection,-73.9960,40.7228
//! ```
//!
//! The street file declares one undirected street per row:
//!
//! ```csv
//! from,to
//! A_Home,B_Intersection
//! ```
//!
//! Rows are loaded in file order, which fixes `NodeId` assignment.  The
//! returned map has already passed [`MapConfig::validate`].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{ConfigError, ConfigResult, GeoPoint, MapConfig, NodeCatalog};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct NodeRecord {
    name: String,
    lon:  f64,
    lat:  f64,
}

#[derive(Deserialize)]
struct StreetRecord {
    from: String,
    to:   String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate a [`MapConfig`] from a node CSV and a street CSV.
pub fn load_map_csv(nodes: &Path, streets: &Path) -> ConfigResult<MapConfig> {
    let nodes = std::fs::File::open(nodes).map_err(ConfigError::Io)?;
    let streets = std::fs::File::open(streets).map_err(ConfigError::Io)?;
    load_map_reader(nodes, streets)
}

/// Like [`load_map_csv`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor`) or for maps embedded in the
/// binary.
pub fn load_map_reader<N: Read, S: Read>(nodes: N, streets: S) -> ConfigResult<MapConfig> {
    let mut catalog = NodeCatalog::new();
    let mut node_reader = csv::Reader::from_reader(nodes);
    for result in node_reader.deserialize::<NodeRecord>() {
        let row = result.map_err(|e| ConfigError::Parse(e.to_string()))?;
        catalog.add(row.name.trim(), GeoPoint::new(row.lon, row.lat))?;
    }

    let mut map = MapConfig::new(catalog);
    let mut street_reader = csv::Reader::from_reader(streets);
    for result in street_reader.deserialize::<StreetRecord>() {
        let row = result.map_err(|e| ConfigError::Parse(e.to_string()))?;
        map.add_street(row.from.trim(), row.to.trim());
    }

    map.validate()?;
    Ok(map)
}
