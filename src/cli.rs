//! CLI argument parsing module for readme-sync

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Synchronize the "Compatible versions" section between README files
#[derive(Parser, Debug, Clone)]
#[command(
    name = "readme-sync",
    version,
    about = "Update tool versions throughout a target README file based on a source README file's compatible versions section"
)]
pub struct CliArgs {
    /// Path to the source README file (provides correct versions)
    pub src_file: PathBuf,

    /// Path to the target README file to update globally
    pub target_file: PathBuf,

    /// Dry run mode - show what would be updated without making changes
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Enable quiet mode - only errors and warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(long, conflicts_with = "diff")]
    pub json: bool,

    /// Show changes in diff format
    #[arg(long)]
    pub diff: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CliArgs {
    /// Log level implied by the verbosity flags
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::ERROR
        } else if self.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::WARN
        }
    }
}
