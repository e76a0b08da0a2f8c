//! sandprobe entry point.

use clap::Parser;
use sandprobe_cli::{run, Cli};
use sandprobe_core::env::vars;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with the report
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env(vars::SANDPROBE_LOG)
                .or_else(|_| EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| cli.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    run(cli).await
}
