//! Confinement probes for sandprobe.
//!
//! This crate runs the individual checks and sequences them:
//! - Filesystem: write round-trip in the sandbox home, sensitive file reads,
//!   real home and system directory listings
//! - Network: one outbound request raced against a timeout
//! - Harness: ordered, best-effort execution with per-probe reporting

pub mod error;
pub mod filesystem;
pub mod harness;
pub mod network;
pub mod probe;

pub use error::ProbeError;
pub use filesystem::{DirectoryProbe, SensitiveFileProbe, WriteProbe};
pub use harness::Harness;
pub use network::NetworkProbe;
pub use probe::{Probe, ProbeKind, Reporter};

/// Result type for probe operations.
pub type Result<T> = std::result::Result<T, ProbeError>;
