//! Error taxonomy for record coercion and configuration

use std::path::PathBuf;
use thiserror::Error;

use crate::identity::EventIdentity;

/// Numeric coercion failures on feed text
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("invalid coordinate: {0:?}")]
    InvalidCoordinate(String),

    #[error("invalid magnitude: {0:?}")]
    InvalidMagnitude(String),
}

/// A single feed record that could not be coerced into an `EventRecord`
#[derive(Debug, Clone, PartialEq, Error)]
#[error("malformed record {identity}: {reason}")]
pub struct MalformedRecord {
    pub identity: EventIdentity,
    #[source]
    pub reason: CoreError,
}

/// Startup configuration failures. These are the only errors that stop a
/// monitor from starting.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
