//! `sr-core` — foundational types for the `saferoute` routing engine.
//!
//! This crate is a dependency of every other `sr-*` crate.  It intentionally
//! has no `sr-*` dependencies and minimal external ones (`thiserror`, `serde`,
//! `csv`, plus optional `rustc-hash`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`, `EdgeId`, `ZoneId`                          |
//! | [`geo`]         | `GeoPoint`, arithmetic midpoint, haversine distance   |
//! | [`catalog`]     | `NodeCatalog`, `Street`, `MapConfig`                  |
//! | [`loader`]      | `load_map_csv`, `load_map_reader`                     |
//! | [`error`]       | `ConfigError`, `ConfigResult`                         |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for catalog name lookups.      |

pub mod catalog;
pub mod error;
pub mod geo;
pub mod ids;
pub mod loader;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use catalog::{MapConfig, NodeCatalog, Street};
pub use error::{ConfigError, ConfigResult};
pub use geo::GeoPoint;
pub use ids::{EdgeId, NodeId, ZoneId};
pub use loader::{load_map_csv, load_map_reader};
