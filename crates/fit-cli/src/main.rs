use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fit_cli::commands::report;
use fit_cli::{Cli, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;

    // Verbose wins over configuration, which wins over RUST_LOG
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else if let Some(directive) = &config.log_filter {
        EnvFilter::new(directive)
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
    tracing::debug!(?config, "loaded configuration");

    let trainings = fit_core::sample_trainings().context("invalid sample session")?;
    tracing::debug!(count = trainings.len(), "reporting sample sessions");

    let mut stdout = std::io::stdout().lock();
    report::run(&mut stdout, &trainings, cli.output_format())?;

    Ok(())
}
