//! sandprobe command-line interface.

pub mod render;

use clap::Parser;
use render::TerminalReporter;
use sandprobe_core::config::ProbeConfig;
use sandprobe_core::{paths, ProbeTargets};
use sandprobe_probes::{Harness, NetworkProbe};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// sandprobe - check whether this process is confined to a sandbox
#[derive(Parser)]
#[command(name = "sandprobe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a probe target file (JSON5)
    #[arg(short, long, env = "SANDPROBE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Maximum entries shown per directory listing
    #[arg(long)]
    pub sample_limit: Option<usize>,

    /// Network probe timeout in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Endpoint requested by the network probe
    #[arg(long)]
    pub url: Option<String>,

    /// Skip the network probe
    #[arg(long)]
    pub no_network: bool,
}

impl Cli {
    /// Log filter derived from `-v` flags.
    pub fn log_filter(&self) -> String {
        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        format!("sandprobe={}", level)
    }

    /// Build the effective config: defaults, then file, then flags.
    pub fn probe_config(&self) -> anyhow::Result<ProbeConfig> {
        let mut config = match &self.config {
            Some(path) => ProbeConfig::load(path)?,
            None => ProbeConfig::default(),
        };

        if let Some(limit) = self.sample_limit {
            config.sample_limit = limit;
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.network.timeout_ms = timeout_ms;
        }
        if let Some(url) = &self.url {
            config.network.url = url.clone();
        }
        if self.no_network {
            config.network.enabled = false;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Run every probe and print the report.
///
/// The network probe starts first and reports whenever it finishes, which
/// is usually after the closing summary. The process waits for it before
/// returning.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.probe_config()?;
    let targets = ProbeTargets::resolve(&config)?;
    debug!(?targets, "resolved probe targets");

    let reporter = Arc::new(TerminalReporter::stdout());
    reporter.header(&targets, paths::current_dir().as_deref());

    let network = NetworkProbe::from_config(&config.network)?
        .map(|probe| probe.spawn(reporter.clone()));

    let harness = Harness::from_config(&config, &targets, reporter.clone());
    tokio::task::spawn_blocking(move || harness.run()).await?;

    if let Some(handle) = network {
        handle.await?;
    }

    Ok(())
}
