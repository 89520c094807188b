//! CLI argument definitions.
//!
//! This tool has a single implicit command: inspect the run named by
//! `RUN_URL` and apply it when the plan is creation-only. Only ambient
//! flags are parsed; credentials and the run URL come from the environment.

use clap::Parser;
use std::path::PathBuf;

/// Plangate - policy-gated auto-apply for Terraform Cloud runs.
#[derive(Parser, Debug)]
#[command(name = "plangate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Console output format (text, json).
    #[arg(long, default_value = "text")]
    pub output: OutputFormat,

    /// Directory where summary artifacts are written.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
