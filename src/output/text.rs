//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Result messages for each sync status
//! - Per-replacement breakdown in verbose mode
//! - Rebuilt section listing in verbose mode

use crate::orchestrator::{SyncReport, SyncStatus};
use crate::output::{OutputFormatter, Verbosity};
use crate::update::{AppliedReplacement, UpdateOutcome};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    /// Get the dry-run prefix if applicable
    fn dry_run_prefix(&self, report: &SyncReport) -> String {
        if report.dry_run {
            if self.color {
                format!("{} ", "(dry-run)".cyan())
            } else {
                "(dry-run) ".to_string()
            }
        } else {
            String::new()
        }
    }

    /// Format a single replacement line
    fn format_replacement_line(
        &self,
        applied: &AppliedReplacement,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let replacement = &applied.replacement;
        let tools = replacement.tools.join(", ");

        if self.color {
            writeln!(
                writer,
                "  {} {} {} ({}) {}",
                replacement.from.dimmed(),
                "→".dimmed(),
                replacement.to.bright_white().bold(),
                tools,
                format!("×{}", applied.count).dimmed()
            )
        } else {
            writeln!(
                writer,
                "  {} -> {} ({}) x{}",
                replacement.from, replacement.to, tools, applied.count
            )
        }
    }

    /// Format the changes of an update
    fn format_outcome(
        &self,
        report: &SyncReport,
        outcome: &UpdateOutcome,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let prefix = self.dry_run_prefix(report);

        let total = outcome.total_substitutions();
        if total > 0 {
            writeln!(
                writer,
                "{}Global version string replacements made: {}",
                prefix, total
            )?;
            if self.verbosity == Verbosity::Verbose {
                for applied in &outcome.replacements {
                    self.format_replacement_line(applied, writer)?;
                }
            }
        }

        if let Some(section) = &outcome.section {
            writeln!(
                writer,
                "{}Compatible versions section was rebuilt/updated.",
                prefix
            )?;
            if self.verbosity == Verbosity::Verbose {
                for bullet in &section.after {
                    writeln!(writer, "  {}", bullet.trim_end())?;
                }
            }
        }

        if report.written() {
            let message = format!("Successfully updated {}.", report.target.display());
            if self.color {
                writeln!(writer, "{}", message.green())?;
            } else {
                writeln!(writer, "{}", message)?;
            }
        } else if report.dry_run {
            writeln!(writer, "{}{} was not modified.", prefix, report.target.display())?;
        }

        Ok(())
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &SyncReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            return Ok(());
        }

        match report.status {
            SyncStatus::Identical => writeln!(
                writer,
                "Source and Target compatible versions sections are identical (ignoring order). No updates needed."
            ),
            SyncStatus::UpToDate => writeln!(
                writer,
                "No version updates or section rebuilds were necessary."
            ),
            SyncStatus::Updated | SyncStatus::WouldUpdate => match &report.outcome {
                Some(outcome) => self.format_outcome(report, outcome, writer),
                None => Ok(()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{render, sample_report};

    fn plain(verbosity: Verbosity) -> TextFormatter {
        TextFormatter::with_color(verbosity, false)
    }

    #[test]
    fn test_format_identical() {
        let mut report = sample_report(SyncStatus::Identical);
        report.outcome = None;
        let output = render(&plain(Verbosity::Normal), &report);
        assert!(output.contains("identical (ignoring order). No updates needed."));
    }

    #[test]
    fn test_format_up_to_date() {
        let report = sample_report(SyncStatus::UpToDate);
        let output = render(&plain(Verbosity::Normal), &report);
        assert_eq!(
            output,
            "No version updates or section rebuilds were necessary.\n"
        );
    }

    #[test]
    fn test_format_updated() {
        let report = sample_report(SyncStatus::Updated);
        let output = render(&plain(Verbosity::Normal), &report);

        assert_eq!(
            output,
            "Global version string replacements made: 1\n\
             Compatible versions section was rebuilt/updated.\n\
             Successfully updated README.md.\n"
        );
    }

    #[test]
    fn test_format_updated_verbose() {
        let report = sample_report(SyncStatus::Updated);
        let output = render(&plain(Verbosity::Verbose), &report);

        assert!(output.contains("  23.5 -> 24.0 (docker) x1\n"));
        assert!(output.contains("  - Docker - v24.0\n"));
        assert!(output.contains("  - Nodejs - v20.1\n"));
    }

    #[test]
    fn test_format_dry_run() {
        let report = sample_report(SyncStatus::WouldUpdate);
        let output = render(&plain(Verbosity::Normal), &report);

        assert!(output.contains("(dry-run) Global version string replacements made: 1"));
        assert!(output.contains("(dry-run) README.md was not modified."));
        assert!(!output.contains("Successfully updated"));
    }

    #[test]
    fn test_format_write_failure_omits_success() {
        let mut report = sample_report(SyncStatus::Updated);
        report.write_error = Some(crate::error::DocumentError::write_error(
            "README.md",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        ));
        let output = render(&plain(Verbosity::Normal), &report);

        assert!(output.contains("Global version string replacements made: 1"));
        assert!(!output.contains("Successfully updated"));
    }

    #[test]
    fn test_format_quiet() {
        let report = sample_report(SyncStatus::Updated);
        let output = render(&plain(Verbosity::Quiet), &report);
        assert!(output.is_empty());
    }

    #[test]
    fn test_format_colored_contains_text() {
        let report = sample_report(SyncStatus::Updated);
        let output = render(&TextFormatter::new(Verbosity::Normal), &report);
        assert!(output.contains("Successfully updated README.md."));
    }
}
