//! Risk-zone providers.
//!
//! # Snapshot model
//!
//! Routing reads risk data through [`RiskZoneProvider::snapshot`], which hands
//! out an immutable `Arc<RiskIndex>`.  A graph build takes exactly one
//! snapshot, so every street in one graph is weighted against the same zone
//! set even while an administrator is editing zones.
//!
//! [`LiveRiskZones`] implements edits copy-on-write: each edit builds a new
//! index and swaps the `Arc` under a write lock.  Readers hold the lock only
//! long enough to clone the `Arc`; in-flight requests keep their old snapshot.

use std::sync::{Arc, RwLock};

use log::{info, warn};

use sr_core::ZoneId;

use crate::{OverlapPolicy, RiskError, RiskIndex, RiskResult, RiskZone};

// ── Provider trait ────────────────────────────────────────────────────────────

/// Source of current risk-zone data.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: one provider serves every
/// concurrent routing request.
pub trait RiskZoneProvider: Send + Sync {
    /// A consistent, immutable view of the current zones.
    ///
    /// An `Err` must abort the caller's graph build; it is never treated as
    /// "no zones".
    fn snapshot(&self) -> RiskResult<Arc<RiskIndex>>;
}

impl<P: RiskZoneProvider + ?Sized> RiskZoneProvider for Arc<P> {
    fn snapshot(&self) -> RiskResult<Arc<RiskIndex>> {
        (**self).snapshot()
    }
}

// ── StaticRiskZones ───────────────────────────────────────────────────────────

/// A fixed zone set that never changes after construction.
#[derive(Clone)]
pub struct StaticRiskZones(Arc<RiskIndex>);

impl StaticRiskZones {
    pub fn new(index: RiskIndex) -> Self {
        Self(Arc::new(index))
    }

    pub fn from_zones(zones: Vec<RiskZone>, overlap: OverlapPolicy) -> RiskResult<Self> {
        RiskIndex::new(zones, overlap).map(Self::new)
    }

    /// No zones at all.
    pub fn empty() -> Self {
        Self::new(RiskIndex::empty())
    }
}

impl RiskZoneProvider for StaticRiskZones {
    fn snapshot(&self) -> RiskResult<Arc<RiskIndex>> {
        Ok(Arc::clone(&self.0))
    }
}

// ── LiveRiskZones ─────────────────────────────────────────────────────────────

/// A zone set that can be edited while routing requests are being served.
pub struct LiveRiskZones {
    current: RwLock<Arc<RiskIndex>>,
    overlap: OverlapPolicy,
}

impl LiveRiskZones {
    pub fn new(zones: Vec<RiskZone>, overlap: OverlapPolicy) -> RiskResult<Self> {
        let index = RiskIndex::new(zones, overlap)?;
        Ok(Self { current: RwLock::new(Arc::new(index)), overlap })
    }

    /// Replace the whole zone set.
    pub fn replace(&self, zones: Vec<RiskZone>) -> RiskResult<()> {
        let index = RiskIndex::new(zones, self.overlap)?;
        let mut guard = self.current.write().map_err(|_| poisoned())?;
        info!("risk zones replaced: {} → {} zones", guard.len(), index.len());
        *guard = Arc::new(index);
        Ok(())
    }

    /// Insert `zone`, or replace the zone with the same `ZoneId`.
    pub fn upsert(&self, zone: RiskZone) -> RiskResult<()> {
        let mut guard = self.current.write().map_err(|_| poisoned())?;
        let id = zone.id;
        let mut zones: Vec<RiskZone> =
            guard.zones().iter().filter(|z| z.id != id).cloned().collect();
        zones.push(zone);
        *guard = Arc::new(RiskIndex::new(zones, self.overlap)?);
        info!("risk zone {id} upserted ({} zones)", guard.len());
        Ok(())
    }

    /// Remove the zone with `id`.  Returns `false` if it was not present.
    pub fn remove(&self, id: ZoneId) -> RiskResult<bool> {
        let mut guard = self.current.write().map_err(|_| poisoned())?;
        if guard.zone(id).is_none() {
            return Ok(false);
        }
        let zones: Vec<RiskZone> =
            guard.zones().iter().filter(|z| z.id != id).cloned().collect();
        *guard = Arc::new(RiskIndex::new(zones, self.overlap)?);
        info!("risk zone {id} removed ({} zones)", guard.len());
        Ok(true)
    }
}

impl RiskZoneProvider for LiveRiskZones {
    fn snapshot(&self) -> RiskResult<Arc<RiskIndex>> {
        let guard = self.current.read().map_err(|_| poisoned())?;
        Ok(Arc::clone(&*guard))
    }
}

fn poisoned() -> RiskError {
    warn!("risk zone lock poisoned; refusing to serve stale or partial zones");
    RiskError::Unavailable("risk zone store lock poisoned".into())
}
