//! Static-configuration error type.
//!
//! Everything here is a startup failure: a malformed node catalog or street
//! list is rejected before the first routing request is served.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("duplicate node name {0:?}")]
    DuplicateNode(String),

    #[error("node {name:?} has a non-finite coordinate")]
    InvalidCoordinate { name: String },

    #[error("street {from:?}–{to:?} references undeclared node {missing:?}")]
    UnknownEndpoint { from: String, to: String, missing: String },

    #[error("street {0:?} connects a node to itself")]
    SelfLoop(String),

    #[error("street {from:?}–{to:?} is declared more than once")]
    DuplicateStreet { from: String, to: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for configuration loading and validation.
pub type ConfigResult<T> = Result<T, ConfigError>;
