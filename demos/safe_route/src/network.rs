//! Lower-Manhattan demo map and risk zone.
//!
//! Five intersections between home and work.  The only zone, "East Village",
//! covers the streets into and out of `C_Risky_Area`, so the safe route runs
//! through `D_Intersection` instead.

use anyhow::Result;

use sr_core::{GeoPoint, MapConfig, NodeCatalog, ZoneId};
use sr_risk::RiskZone;

/// Build the 5-node map.
pub fn manhattan_map() -> Result<MapConfig> {
    let mut c = NodeCatalog::new();

    c.add("A_Home",         GeoPoint::new(-74.0060, 40.7128))?;
    c.add("B_Intersection", GeoPoint::new(-73.9960, 40.7228))?;
    c.add("C_Risky_Area",   GeoPoint::new(-73.9860, 40.7328))?;
    c.add("D_Intersection", GeoPoint::new(-73.9950, 40.7428))?;
    c.add("E_Work",         GeoPoint::new(-73.9850, 40.7528))?;

    let map = MapConfig::new(c)
        .with_street("A_Home",         "B_Intersection")
        .with_street("B_Intersection", "C_Risky_Area")
        .with_street("B_Intersection", "D_Intersection")
        .with_street("C_Risky_Area",   "E_Work")
        .with_street("D_Intersection", "E_Work");
    Ok(map)
}

/// The demo zone: severity 8, a rectangle around `C_Risky_Area`.
pub fn east_village() -> Result<RiskZone> {
    let ring = [
        GeoPoint::new(-73.9925, 40.7250),
        GeoPoint::new(-73.9800, 40.7250),
        GeoPoint::new(-73.9800, 40.7450),
        GeoPoint::new(-73.9925, 40.7450),
    ];
    Ok(RiskZone::new(ZoneId(0), "East Village", &ring, 8)?)
}
