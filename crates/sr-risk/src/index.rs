//! Spatial risk index.
//!
//! # Lookup
//!
//! An R-tree (via `rstar`) holds the bounding box of every zone.  A point
//! query first collects the zones whose box contains the point, then confirms
//! each candidate with an exact polygon/point intersection test.  Points on a
//! zone's boundary count as inside.
//!
//! # Overlaps
//!
//! When several zones contain the same point the winner is chosen by the
//! index's [`OverlapPolicy`], never by R-tree traversal order.

use rstar::{RTree, RTreeObject, AABB};
use serde::{Deserialize, Serialize};

use sr_core::{GeoPoint, ZoneId};

use crate::{RiskError, RiskResult, RiskZone};

/// Score reported by [`RiskIndex::assess`] for a point outside every zone.
pub const BASELINE_RISK_SCORE: u32 = 1;

// ── Overlap policy ────────────────────────────────────────────────────────────

/// Which zone wins when several contain the same point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Highest severity wins; equal severities fall back to the lowest `ZoneId`.
    #[default]
    HighestSeverity,
    /// Lowest `ZoneId` (earliest declared) wins regardless of severity.
    FirstDeclared,
}

// ── R-tree zone entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a zone's bounding box and its slot in
/// `RiskIndex::zones`.
#[derive(Clone)]
struct ZoneEntry {
    envelope: AABB<[f64; 2]>,
    slot:     usize,
}

impl RTreeObject for ZoneEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

// ── Query results ─────────────────────────────────────────────────────────────

/// A zone matched by a point query.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ZoneHit<'a> {
    pub id:       ZoneId,
    pub name:     &'a str,
    pub severity: u32,
}

impl<'a> From<&'a RiskZone> for ZoneHit<'a> {
    fn from(zone: &'a RiskZone) -> Self {
        ZoneHit { id: zone.id, name: &zone.name, severity: zone.severity }
    }
}

/// Point risk summary: the winning zone's severity, or the baseline score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score:     u32,
    pub zone_name: Option<String>,
}

// ── RiskIndex ─────────────────────────────────────────────────────────────────

/// Immutable set of risk zones with an R-tree for point queries.
///
/// Handed out as `Arc<RiskIndex>` snapshots by a
/// [`RiskZoneProvider`](crate::RiskZoneProvider); safe to share across threads.
pub struct RiskIndex {
    /// Sorted by `ZoneId`.
    zones:   Vec<RiskZone>,
    tree:    RTree<ZoneEntry>,
    overlap: OverlapPolicy,
}

impl RiskIndex {
    /// Index `zones`.  Fails if two zones share a `ZoneId`.
    pub fn new(mut zones: Vec<RiskZone>, overlap: OverlapPolicy) -> RiskResult<Self> {
        zones.sort_by_key(|z| z.id);
        if let Some(w) = zones.windows(2).find(|w| w[0].id == w[1].id) {
            return Err(RiskError::DuplicateZone(w[0].id));
        }

        let entries: Vec<ZoneEntry> = zones
            .iter()
            .enumerate()
            .map(|(slot, z)| ZoneEntry { envelope: z.envelope(), slot })
            .collect();
        let tree = RTree::bulk_load(entries);

        Ok(Self { zones, tree, overlap })
    }

    /// An index with no zones: every point is zone-free.
    pub fn empty() -> Self {
        Self { zones: Vec::new(), tree: RTree::new(), overlap: OverlapPolicy::default() }
    }

    pub fn overlap_policy(&self) -> OverlapPolicy {
        self.overlap
    }

    pub fn zones(&self) -> &[RiskZone] {
        &self.zones
    }

    pub fn zone(&self, id: ZoneId) -> Option<&RiskZone> {
        self.zones
            .binary_search_by_key(&id, |z| z.id)
            .ok()
            .map(|slot| &self.zones[slot])
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    fn containing(&self, point: GeoPoint) -> impl Iterator<Item = &RiskZone> + '_ {
        self.tree
            .locate_in_envelope_intersecting(&AABB::from_point([point.lon, point.lat]))
            .map(|entry| &self.zones[entry.slot])
            .filter(move |z| z.contains(point))
    }

    /// The zone containing `point`, chosen by the overlap policy, or `None`.
    pub fn zone_at(&self, point: GeoPoint) -> Option<ZoneHit<'_>> {
        let hits = self.containing(point);
        let winner = match self.overlap {
            OverlapPolicy::HighestSeverity => hits
                .max_by(|a, b| a.severity.cmp(&b.severity).then(b.id.cmp(&a.id))),
            OverlapPolicy::FirstDeclared => hits.min_by_key(|z| z.id),
        };
        winner.map(ZoneHit::from)
    }

    /// Every zone containing `point`, ordered by `ZoneId`.
    pub fn zones_at(&self, point: GeoPoint) -> Vec<ZoneHit<'_>> {
        let mut hits: Vec<ZoneHit<'_>> = self.containing(point).map(ZoneHit::from).collect();
        hits.sort_by_key(|h| h.id);
        hits
    }

    /// Severity and name of the winning zone at `point`, or
    /// [`BASELINE_RISK_SCORE`] with no name.
    pub fn assess(&self, point: GeoPoint) -> RiskAssessment {
        match self.zone_at(point) {
            Some(hit) => RiskAssessment {
                score:     hit.severity,
                zone_name: Some(hit.name.to_owned()),
            },
            None => RiskAssessment { score: BASELINE_RISK_SCORE, zone_name: None },
        }
    }
}

impl Default for RiskIndex {
    fn default() -> Self {
        Self::empty()
    }
}
