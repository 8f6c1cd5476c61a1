//! Service configuration.
//!
//! Typically loaded from a JSON file by the application and passed to
//! [`RoutingService::new`](crate::RoutingService::new).  Every field has a
//! default, so `{}` is a valid configuration:
//!
//! ```json
//! {
//!   "weight_policy":  { "kind": "step", "baseline": 1, "penalty": 100 },
//!   "overlap_policy": "highest_severity"
//! }
//! ```

use std::io::Read;

use serde::{Deserialize, Serialize};

use sr_risk::{LiveRiskZones, OverlapPolicy, RiskZone, StaticRiskZones};
use sr_spatial::WeightPolicy;

use crate::ServiceResult;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// How a zone hit at a street midpoint becomes a street weight.
    pub weight_policy: WeightPolicy,

    /// Which zone wins where zones overlap.  Applied by the providers built
    /// through [`live_zones`](Self::live_zones) / [`static_zones`](Self::static_zones).
    pub overlap_policy: OverlapPolicy,
}

impl ServiceConfig {
    pub fn from_json_str(json: &str) -> ServiceResult<Self> {
        let config: ServiceConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> ServiceResult<Self> {
        let config: ServiceConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ServiceResult<()> {
        self.weight_policy.validate()?;
        Ok(())
    }

    /// An editable provider over `zones` using this config's overlap policy.
    pub fn live_zones(&self, zones: Vec<RiskZone>) -> ServiceResult<LiveRiskZones> {
        Ok(LiveRiskZones::new(zones, self.overlap_policy)?)
    }

    /// A fixed provider over `zones` using this config's overlap policy.
    pub fn static_zones(&self, zones: Vec<RiskZone>) -> ServiceResult<StaticRiskZones> {
        Ok(StaticRiskZones::from_zones(zones, self.overlap_policy)?)
    }
}
