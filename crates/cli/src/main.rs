use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::fmt::SubscriberBuilder;

/// Execute one simulation run in the current working directory.
///
/// Reads `input.json`, hands its two parameters to `<exe-dir>/bin/app`, and
/// leaves `output.txt`, `output.json`, and `output.tar.gz` behind.
#[derive(Parser)]
#[command(name = "simrun")]
#[command(version = simrun::VERSION)]
#[command(about = "Single simulation run executor")]
struct Cmd {}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let _cmd = Cmd::parse();

    // The scenario app ships alongside the executor, under bin/ next to the
    // binary; the run directory is wherever we were invoked.
    let exe = std::env::current_exe().context("resolving executor path")?;
    let program_dir = exe
        .parent()
        .context("executor path has no parent directory")?;
    let app = program_dir.join("bin").join("app");

    let run_dir = std::env::current_dir().context("resolving run directory")?;
    let product = simrun::execute(&run_dir, &app)
        .with_context(|| format!("run in {} failed", run_dir.display()))?;
    tracing::info!(product, "run complete");
    Ok(())
}
