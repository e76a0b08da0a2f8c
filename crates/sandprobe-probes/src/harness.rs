//! Ordered probe runner.

use crate::filesystem::{DirectoryProbe, SensitiveFileProbe, WriteProbe};
use crate::probe::{Probe, Reporter};
use sandprobe_core::{Outcome, ProbeConfig, ProbeTargets, Tally};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, error};

/// Runs synchronous probes in order and reports each outcome.
///
/// A probe that fails, or even panics, is reported and the run continues
/// with the next one.
pub struct Harness {
    probes: Vec<Box<dyn Probe>>,
    reporter: Arc<dyn Reporter>,
}

impl Harness {
    /// Create an empty harness.
    pub fn new(reporter: Arc<dyn Reporter>) -> Self {
        Self {
            probes: Vec::new(),
            reporter,
        }
    }

    /// Build the configured filesystem probe list.
    ///
    /// Order: write test, sensitive files, real home, system directories.
    pub fn from_config(
        config: &ProbeConfig,
        targets: &ProbeTargets,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        let mut harness = Self::new(reporter).with_probe(WriteProbe::new(&targets.sandbox_home));

        for file in &config.sensitive_files {
            harness.push(SensitiveFileProbe::new(targets.in_real_home(file)));
        }

        if config.list_real_home {
            harness.push(DirectoryProbe::real_home(
                &targets.real_home,
                config.sample_limit,
            ));
        }

        for dir in &config.system_dirs {
            harness.push(DirectoryProbe::system_dir(dir, config.sample_limit));
        }

        harness
    }

    /// Add a probe to the end of the list.
    pub fn push(&mut self, probe: impl Probe + 'static) {
        self.probes.push(Box::new(probe));
    }

    /// Add a probe (builder style).
    pub fn with_probe(mut self, probe: impl Probe + 'static) -> Self {
        self.push(probe);
        self
    }

    /// Number of registered probes.
    pub fn len(&self) -> usize {
        self.probes.len()
    }

    /// Check if no probes are registered.
    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    /// Run every probe once, in order, then signal completion.
    pub fn run(&self) -> Tally {
        let mut tally = Tally::default();

        for probe in &self.probes {
            debug!(probe = probe.name(), kind = ?probe.kind(), "running probe");

            let outcome = panic::catch_unwind(AssertUnwindSafe(|| probe.run()))
                .unwrap_or_else(|payload| {
                    let msg = panic_message(payload.as_ref());
                    error!(probe = probe.name(), "probe panicked: {}", msg);
                    Outcome::error(format!("probe panicked: {}", msg))
                });

            tally.record(&outcome);
            self.reporter.report(probe.kind(), probe.name(), &outcome);
        }

        self.reporter.finish(&tally);
        tally
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
