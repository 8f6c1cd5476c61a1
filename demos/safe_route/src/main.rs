//! safe_route — plans a walk home-to-work around a reported risk zone.
//!
//! Usage: `safe_route [service-config.json]`
//!
//! Routes are printed as JSON, the same shape a web handler would return.
//! Set `RUST_LOG=debug` to see per-request graph builds.

mod network;

use std::fs::File;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use log::info;

use sr_core::{GeoPoint, ZoneId};
use sr_service::{RoutingService, ServiceConfig};

use network::{east_village, manhattan_map};

const START: &str = "A_Home";
const END:   &str = "E_Work";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== safe_route — minimum-risk walking routes ===");
    println!();

    // 1. Service config: file argument, or the reference defaults.
    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("loading service config from {path}");
            ServiceConfig::from_json_reader(File::open(&path)?)?
        }
        None => ServiceConfig::default(),
    };
    println!("Weight policy: {:?}  |  Overlap: {:?}", config.weight_policy, config.overlap_policy);

    // 2. Static map and live zones.
    let zones = Arc::new(config.live_zones(vec![east_village()?])?);
    let service = RoutingService::new(manhattan_map()?, Arc::clone(&zones), &config)?;
    println!("Map: {} nodes: {}", service.node_names().len(), service.node_names().join(", "));
    println!();

    // 3. Route around the zone.
    let t0 = Instant::now();
    let route = service.plan_route(START, END)?;
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;
    println!("Route {START} → {END} with East Village active ({elapsed_ms:.3} ms):");
    println!("{}", serde_json::to_string_pretty(&route)?);
    println!();

    // 4. Point risk lookups.
    for (label, point) in [
        ("C_Risky_Area", GeoPoint::new(-73.9860, 40.7328)),
        ("A_Home",       GeoPoint::new(-74.0060, 40.7128)),
    ] {
        let risk = service.risk_at(point)?;
        println!("Risk at {label:<14} {}", serde_json::to_string(&risk)?);
    }
    println!();

    // 5. Client mistakes come back as typed errors.
    match service.plan_route(START, "Z_Unknown") {
        Ok(_) => println!("unexpected route to Z_Unknown"),
        Err(e) => println!("Rejected (client error: {}): {e}", e.is_client_error()),
    }
    println!();

    // 6. Clear the zone; the next request routes straight through.
    zones.remove(ZoneId(0))?;
    let route = service.plan_route_from(GeoPoint::new(-74.0059, 40.7127), END)?;
    println!("Route from near {START} → {END} after clearing East Village:");
    println!("{}", serde_json::to_string_pretty(&route)?);

    Ok(())
}
