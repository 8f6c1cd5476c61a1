//! Service error types.
//!
//! [`ServiceError`] is returned only while constructing the service and is
//! fatal.  [`RouteError`] is returned per request.

use thiserror::Error;

use sr_core::{ConfigError, GeoPoint};
use sr_risk::RiskError;
use sr_spatial::SpatialError;

/// Per-request failure.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("unknown node {requested:?}; valid nodes are: {}", .valid.join(", "))]
    UnknownNode { requested: String, valid: Vec<String> },

    #[error("position {0} is not a finite coordinate")]
    InvalidPosition(GeoPoint),

    #[error("no route found from {from:?} to {to:?}")]
    NoPath { from: String, to: String },

    #[error(transparent)]
    RiskUnavailable(#[from] RiskError),

    #[error("graph build failed: {0}")]
    Graph(SpatialError),
}

impl RouteError {
    /// `true` for caller mistakes and negative results; `false` for faults
    /// the caller cannot fix by changing the request.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            RouteError::UnknownNode { .. }
                | RouteError::InvalidPosition(_)
                | RouteError::NoPath { .. }
        )
    }
}

/// Startup failure: the service refuses to start with bad static data.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("map configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Spatial(#[from] SpatialError),

    #[error("risk zone error: {0}")]
    Risk(#[from] RiskError),

    #[error("service config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
