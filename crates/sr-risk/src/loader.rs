//! CSV risk-zone loader.
//!
//! # CSV format
//!
//! One row per polygon vertex, in ring order.  Rows for the same zone need not
//! be contiguous, but they must agree on `name` and `severity`.
//!
//! ```csv
//! zone_id,name,severity,lon,lat
//! 0,East Village,8,-73.9925,40.7250
//! 0,East Village,8,-73.9800,40.7250
//! 0,East Village,8,-73.9800,40.7450
//! 0,East Village,8,-73.9925,40.7450
//! ```
//!
//! Zones are returned ordered by `zone_id`.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use sr_core::{GeoPoint, ZoneId};

use crate::{RiskError, RiskResult, RiskZone};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct VertexRecord {
    zone_id:  u32,
    name:     String,
    severity: u32,
    lon:      f64,
    lat:      f64,
}

struct PendingZone {
    name:     String,
    severity: u32,
    ring:     Vec<GeoPoint>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load risk zones from a CSV file.
pub fn load_zones_csv(path: &Path) -> RiskResult<Vec<RiskZone>> {
    let file = std::fs::File::open(path).map_err(RiskError::Io)?;
    load_zones_reader(file)
}

/// Like [`load_zones_csv`] but accepts any `Read` source.
pub fn load_zones_reader<R: Read>(reader: R) -> RiskResult<Vec<RiskZone>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut pending: BTreeMap<u32, PendingZone> = BTreeMap::new();

    for result in csv_reader.deserialize::<VertexRecord>() {
        let row = result.map_err(|e| RiskError::Parse(e.to_string()))?;
        let vertex = GeoPoint::new(row.lon, row.lat);

        let zone = pending.entry(row.zone_id).or_insert_with(|| PendingZone {
            name:     row.name.clone(),
            severity: row.severity,
            ring:     Vec::new(),
        });
        if zone.name != row.name || zone.severity != row.severity {
            return Err(RiskError::Parse(format!(
                "zone {} has inconsistent name/severity across rows",
                row.zone_id
            )));
        }
        zone.ring.push(vertex);
    }

    pending
        .into_iter()
        .map(|(id, z)| RiskZone::new(ZoneId(id), z.name, &z.ring, z.severity))
        .collect()
}
