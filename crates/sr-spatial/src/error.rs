//! Spatial-subsystem error type.

use thiserror::Error;

use sr_core::{ConfigError, NodeId};

/// Errors produced by `sr-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("no route from {from} to {to}")]
    NoPath { from: NodeId, to: NodeId },

    #[error("node {0} not found in graph")]
    UnknownNode(NodeId),

    #[error("invalid weight policy: {0}")]
    InvalidPolicy(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
