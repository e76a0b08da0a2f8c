//! Probe error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised inside a probe before it is classified.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// A filesystem step failed.
    #[error("{step} {path}: {source}")]
    Io {
        step: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Read-back content differs from what was written.
    #[error("Round-trip mismatch: wrote {expected:?}, read {actual:?}")]
    RoundTripMismatch { expected: String, actual: String },

    /// HTTP client setup failed.
    #[error("HTTP client error: {0}")]
    Client(String),
}

impl ProbeError {
    /// Create a new filesystem step error.
    pub fn io(step: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            step,
            path: path.into(),
            source,
        }
    }
}
