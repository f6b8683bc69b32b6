//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Fitness tracker.
///
/// Computes distance, mean speed and calories for the sample running,
/// swimming and walking sessions and prints a report for each.
#[derive(Debug, Parser)]
#[command(name = "fit", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output reports as JSON.
    #[arg(long, conflicts_with = "compact")]
    pub json: bool,

    /// Output one summary line per session.
    #[arg(long)]
    pub compact: bool,
}

impl Cli {
    /// Output format selected by the flags.
    pub const fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.compact {
            OutputFormat::Compact
        } else {
            OutputFormat::Text
        }
    }
}

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Four labelled lines per session.
    Text,
    /// One line per session.
    Compact,
    Json,
}
