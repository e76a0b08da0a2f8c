//! Probe outcome types.

use super::DirectoryListing;
use std::io;
use std::time::Duration;

/// What a probe managed to access when it should not have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// A file was readable. Its content is not retained.
    Readable { bytes: u64 },

    /// A directory was listable.
    Listed(DirectoryListing),
}

/// Result of running one probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The operation succeeded as expected.
    Success(String),

    /// The operation failed, which is evidence the sandbox holds.
    Blocked {
        reason: String,
        /// Underlying error kind, kept for diagnostics only.
        kind: io::ErrorKind,
    },

    /// The operation succeeded although it should have been blocked.
    UnexpectedAccess(Access),

    /// The operation failed for a reason unrelated to confinement.
    Error(String),

    /// No result arrived in time.
    Timeout(Duration),
}

impl Outcome {
    /// Classify a failed I/O operation as blocked.
    pub fn blocked(err: &io::Error) -> Self {
        Self::Blocked {
            reason: err.to_string(),
            kind: err.kind(),
        }
    }

    /// Create an error outcome.
    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }

    /// The outcome class, for tallying.
    pub fn class(&self) -> OutcomeClass {
        match self {
            Self::Success(_) => OutcomeClass::Success,
            Self::Blocked { .. } => OutcomeClass::Blocked,
            Self::UnexpectedAccess(_) => OutcomeClass::UnexpectedAccess,
            Self::Error(_) => OutcomeClass::Error,
            Self::Timeout(_) => OutcomeClass::Timeout,
        }
    }
}

/// Outcome discriminant without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeClass {
    Success,
    Blocked,
    UnexpectedAccess,
    Error,
    Timeout,
}

/// Per-class counts for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub success: usize,
    pub blocked: usize,
    pub unexpected_access: usize,
    pub errors: usize,
    pub timeouts: usize,
}

impl Tally {
    /// Count one outcome.
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome.class() {
            OutcomeClass::Success => self.success += 1,
            OutcomeClass::Blocked => self.blocked += 1,
            OutcomeClass::UnexpectedAccess => self.unexpected_access += 1,
            OutcomeClass::Error => self.errors += 1,
            OutcomeClass::Timeout => self.timeouts += 1,
        }
    }

    /// Total outcomes counted.
    pub fn total(&self) -> usize {
        self.success + self.blocked + self.unexpected_access + self.errors + self.timeouts
    }
}
