//! Plank CLI binary.

use anyhow::Result;
use plank::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the plank CLI.
///
/// Uses tokio's current_thread runtime: plank is a sequential, I/O-bound
/// CLI with a single logical thread of execution.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Controlled via RUST_LOG, e.g. RUST_LOG=plank=debug,plank_jsonl=trace
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("plank=info,plank_jsonl=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();
    cli.execute().await
}
