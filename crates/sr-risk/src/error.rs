//! Risk-subsystem error type.

use thiserror::Error;

use sr_core::ZoneId;

/// Errors produced by `sr-risk`.
#[derive(Debug, Error)]
pub enum RiskError {
    #[error("risk zone {id} is invalid: {reason}")]
    InvalidZone { id: ZoneId, reason: String },

    #[error("risk zone {0} declared more than once")]
    DuplicateZone(ZoneId),

    /// The provider could not hand out a zone snapshot.  Routing must fail
    /// rather than treat every street as zone-free.
    #[error("risk data unavailable: {0}")]
    Unavailable(String),

    #[error("zone parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RiskResult<T> = Result<T, RiskError>;
