//! `sr-risk` — risk zones, the spatial risk index, and zone providers.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`zone`]     | `RiskZone` (validated polygon + severity)                    |
//! | [`index`]    | `RiskIndex` (R-tree point lookup), `OverlapPolicy`, `ZoneHit` |
//! | [`provider`] | `RiskZoneProvider` trait, `StaticRiskZones`, `LiveRiskZones` |
//! | [`loader`]   | `load_zones_csv`, `load_zones_reader`                        |
//! | [`error`]    | `RiskError`, `RiskResult<T>`                                 |

pub mod error;
pub mod index;
pub mod loader;
pub mod provider;
pub mod zone;


pub use error::{RiskError, RiskResult};
pub use index::{BASELINE_RISK_SCORE, OverlapPolicy, RiskAssessment, RiskIndex, ZoneHit};
pub use loader::{load_zones_csv, load_zones_reader};
pub use provider::{LiveRiskZones, RiskZoneProvider, StaticRiskZones};
pub use zone::RiskZone;
