//! Plangate CLI entrypoint.
//!
//! This is the main entrypoint for the plangate command-line tool.

use std::process::ExitCode;

use plangate::cli::{Cli, OutputFormatter};
use plangate::config::GateConfig;
use plangate::error::Result;
use plangate::gate::{Gate, GateOutcome};
use plangate::report::SummaryWriter;

use tracing_subscriber::EnvFilter;

/// Main entrypoint.
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Initialize logging
    init_logging(cli.verbose);

    // Run async runtime
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(GateOutcome::Applied) => ExitCode::SUCCESS,
        Ok(GateOutcome::Rejected) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the logging system.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Main async entry point.
async fn run(cli: Cli) -> Result<GateOutcome> {
    let formatter = OutputFormatter::new(cli.output);
    let config = GateConfig::from_env()?;

    let gate = Gate::new(&config, SummaryWriter::new(&cli.out_dir))?;
    let report = gate.run().await?;

    // Show the analyzed plan
    let output = formatter.format_analysis(&report.analysis);
    println!("{output}");

    match report.outcome {
        GateOutcome::Applied => {
            eprintln!("Apply triggered for {}.", report.run_id);
        }
        GateOutcome::Rejected => {
            eprintln!(
                "Plan for {} contains changes that are not pure creations. Apply cancelled.",
                report.run_id
            );
        }
    }

    Ok(report.outcome)
}
