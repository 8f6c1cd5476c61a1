//! Street weight assignment.
//!
//! A street's weight is decided by a single risk query at the arithmetic
//! midpoint of its two endpoints.  The weight depends only on the endpoints,
//! the risk snapshot, and the policy.
//!
//! | Policy            | Zone-free street | Street in a zone of severity `s`  |
//! |-------------------|------------------|-----------------------------------|
//! | `Step` (default)  | `baseline` (1)   | `penalty` (100)                   |
//! | `SeverityScaled`  | `baseline`       | `baseline + s * per_severity`     |
//!
//! Validation guarantees that an in-zone street always costs strictly more
//! than a zone-free one.

use sr_core::GeoPoint;
use sr_risk::RiskIndex;

use crate::{SpatialError, SpatialResult};

/// Weight of a zone-free street under the default policy.
pub const BASELINE_WEIGHT: u32 = 1;

/// Weight of an in-zone street under the default policy.
pub const RISK_PENALTY_WEIGHT: u32 = 100;

/// How a risk-zone hit translates into street weight.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum WeightPolicy {
    /// Fixed penalty for any in-zone street, regardless of severity.
    Step { baseline: u32, penalty: u32 },
    /// Penalty grows linearly with the zone's severity.
    SeverityScaled { baseline: u32, per_severity: u32 },
}

impl Default for WeightPolicy {
    fn default() -> Self {
        WeightPolicy::Step { baseline: BASELINE_WEIGHT, penalty: RISK_PENALTY_WEIGHT }
    }
}

impl WeightPolicy {
    /// Reject policies that would produce a zero weight or fail to make
    /// in-zone streets more expensive than zone-free ones.
    pub fn validate(&self) -> SpatialResult<()> {
        match *self {
            WeightPolicy::Step { baseline, .. } | WeightPolicy::SeverityScaled { baseline, .. }
                if baseline == 0 =>
            {
                Err(SpatialError::InvalidPolicy("baseline weight must be at least 1".into()))
            }
            WeightPolicy::Step { baseline, penalty } if penalty <= baseline => {
                Err(SpatialError::InvalidPolicy(format!(
                    "penalty {penalty} must exceed baseline {baseline}"
                )))
            }
            WeightPolicy::SeverityScaled { per_severity: 0, .. } => Err(
                SpatialError::InvalidPolicy("per-severity weight must be at least 1".into()),
            ),
            // Saturation past u32::MAX would flatten in-zone weights onto the baseline.
            WeightPolicy::SeverityScaled { baseline, per_severity }
                if baseline.checked_add(per_severity).is_none() =>
            {
                Err(SpatialError::InvalidPolicy(format!(
                    "baseline {baseline} + per-severity {per_severity} overflows u32"
                )))
            }
            _ => Ok(()),
        }
    }

    pub fn baseline(&self) -> u32 {
        match *self {
            WeightPolicy::Step { baseline, .. } | WeightPolicy::SeverityScaled { baseline, .. } => {
                baseline
            }
        }
    }

    /// Weight for a street whose midpoint hit a zone of `severity`, or no
    /// zone at all.
    pub fn weight_for(&self, severity: Option<u32>) -> u32 {
        match (*self, severity) {
            (_, None) => self.baseline(),
            (WeightPolicy::Step { penalty, .. }, Some(_)) => penalty,
            (WeightPolicy::SeverityScaled { baseline, per_severity }, Some(s)) => {
                baseline.saturating_add(s.saturating_mul(per_severity))
            }
        }
    }

    /// Weight of the street `a`–`b` against the risk snapshot `risk`.
    pub fn edge_weight(&self, a: GeoPoint, b: GeoPoint, risk: &RiskIndex) -> u32 {
        let hit = risk.zone_at(a.midpoint(b));
        self.weight_for(hit.map(|h| h.severity))
    }
}
