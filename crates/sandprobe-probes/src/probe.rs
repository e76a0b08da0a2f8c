//! Probe and reporter traits.

use sandprobe_core::{Outcome, Tally};

/// Probe families. Renderers phrase status lines per family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeKind {
    /// Write round-trip inside the sandbox home.
    Write,

    /// Read of a sensitive file in the real home.
    SensitiveFile,

    /// Listing of the real home directory.
    RealHome,

    /// Listing of a system directory.
    SystemDir,

    /// Outbound network request.
    Network,
}

/// A synchronous check run once by the harness.
///
/// Implementations classify their own failures; `run` never returns an
/// error to the caller.
pub trait Probe: Send {
    /// Short label used in status lines.
    fn name(&self) -> &str;

    /// Probe family.
    fn kind(&self) -> ProbeKind;

    /// Attempt the operation and classify the result.
    fn run(&self) -> Outcome;
}

/// Receives outcomes as probes complete.
///
/// Shared between the harness and the background network task, so
/// implementations must serialize their own output.
pub trait Reporter: Send + Sync {
    /// Report one probe outcome.
    fn report(&self, kind: ProbeKind, name: &str, outcome: &Outcome);

    /// Called once after the synchronous probes finish.
    fn finish(&self, _tally: &Tally) {}
}
