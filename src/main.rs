//! readme-sync - Compatible versions synchronizer CLI tool
//!
//! Reads the "Compatible versions" section of a source README, rebuilds the
//! same section in a target README and replaces stale version strings
//! throughout the target's body text.

use clap::Parser;
use readme_sync::cli::CliArgs;
use readme_sync::logging;
use readme_sync::orchestrator::Orchestrator;
use readme_sync::output::{create_formatter, OutputConfig};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    if args.no_color {
        colored::control::set_override(false);
    }
    logging::init(args.log_level(), !args.no_color);

    // Run the main logic and handle errors
    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("readme-sync v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Source: {}", args.src_file.display());
        eprintln!("Target: {}", args.target_file.display());
        if args.dry_run {
            eprintln!("Mode: dry-run");
        }
    }

    let orchestrator = Orchestrator::new(args.clone());
    let report = orchestrator.run()?;

    // Create output formatter based on CLI options
    let output_config =
        OutputConfig::from_cli(args.json, args.diff, args.verbose, args.quiet, args.no_color);
    let formatter = create_formatter(output_config);

    // Output results
    let mut stdout = io::stdout().lock();
    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    if !report.is_success() {
        if let Some(error) = &report.write_error {
            eprintln!("Error: {}", error);
        }
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
