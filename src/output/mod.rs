//! Output formatting for sync reports
//!
//! This module provides:
//! - Text output for human-readable display
//! - JSON output for machine processing
//! - Diff output for showing changed lines

mod diff;
mod json;
mod text;

pub use diff::DiffFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::orchestrator::SyncReport;
use std::io::Write;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for machine processing
    Json,
    /// Unified diff format
    Diff,
}

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// No output on success
    Quiet,
    /// Normal output
    #[default]
    Normal,
    /// Detailed output with per-replacement information
    Verbose,
}

/// Configuration for output formatting
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Output format (text, json, diff)
    pub format: OutputFormat,
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Whether to use colors (when supported)
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            verbosity: Verbosity::default(),
            color: true,
        }
    }
}

impl OutputConfig {
    /// Create a new output configuration
    pub fn new(format: OutputFormat, verbosity: Verbosity, color: bool) -> Self {
        Self {
            format,
            verbosity,
            color,
        }
    }

    /// Create configuration from CLI arguments
    pub fn from_cli(json: bool, diff: bool, verbose: bool, quiet: bool, no_color: bool) -> Self {
        let format = if json {
            OutputFormat::Json
        } else if diff {
            OutputFormat::Diff
        } else {
            OutputFormat::Text
        };

        let verbosity = if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };

        Self {
            format,
            verbosity,
            color: !no_color,
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and write the sync report
    fn format(&self, report: &SyncReport, writer: &mut dyn Write) -> std::io::Result<()>;
}

/// Create an output formatter based on configuration
pub fn create_formatter(config: OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Text => Box::new(TextFormatter::with_color(config.verbosity, config.color)),
        OutputFormat::Json => Box::new(JsonFormatter::new(config.verbosity)),
        OutputFormat::Diff => Box::new(DiffFormatter::new()),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::document::split_lines;
    use crate::domain::VersionMap;
    use crate::orchestrator::{SyncReport, SyncStatus};
    use crate::parser::parse_section;
    use crate::update::update_document;
    use std::path::PathBuf;

    /// Builds a report for the docker/nodejs example without touching disk
    pub fn sample_report(status: SyncStatus) -> SyncReport {
        let source: VersionMap = [("docker", "24.0"), ("nodejs", "20.1")].into_iter().collect();
        let lines = split_lines(
            "Docker 23.5 is required.\n\n## Compatible versions\n- Docker - v23.5\n- NodeJS - v20.1\n\nEnd.\n",
        );
        let parsed = parse_section(&lines);
        let outcome = update_document(&lines, &source, parsed.as_ref()).unwrap();

        SyncReport {
            source: PathBuf::from("SOURCE.md"),
            target: PathBuf::from("README.md"),
            source_versions: source,
            target_versions: parsed.map(|p| p.versions),
            status,
            outcome: Some(outcome),
            dry_run: status == SyncStatus::WouldUpdate,
            write_error: None,
        }
    }

    /// Runs a formatter into a string
    pub fn render(formatter: &dyn super::OutputFormatter, report: &SyncReport) -> String {
        let mut buf = Vec::new();
        formatter.format(report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }
}
