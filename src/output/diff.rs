//! Diff output formatter for showing changes
//!
//! This module provides:
//! - Unified-style hunks for each substituted body line
//! - One hunk for the rebuilt section, led by its heading as context

use crate::orchestrator::{SyncReport, SyncStatus};
use crate::output::OutputFormatter;
use crate::update::UpdateOutcome;
use std::io::Write;

/// Diff formatter for showing line changes
pub struct DiffFormatter;

/// A hunk to print, located by its first original line
struct Hunk<'a> {
    start: usize,
    end: usize,
    context: Option<&'a str>,
    removed: Vec<&'a str>,
    added: Vec<&'a str>,
}

impl DiffFormatter {
    /// Create a new diff formatter
    pub fn new() -> Self {
        Self
    }

    /// Get the dry-run prefix if applicable
    fn dry_run_prefix(report: &SyncReport) -> &'static str {
        if report.dry_run {
            "(dry-run) "
        } else {
            ""
        }
    }

    /// Collects hunks in document order. Substituted lines inside a rebuilt
    /// section are covered by the section hunk.
    fn hunks(outcome: &UpdateOutcome) -> Vec<Hunk<'_>> {
        let mut hunks: Vec<Hunk<'_>> = outcome
            .line_changes
            .iter()
            .filter(|change| {
                outcome
                    .section
                    .as_ref()
                    .map_or(true, |section| !section.span.contains(change.index))
            })
            .map(|change| Hunk {
                start: change.index,
                end: change.index,
                context: None,
                removed: vec![strip_eol(&change.before)],
                added: vec![strip_eol(&change.after)],
            })
            .collect();

        if let Some(section) = &outcome.section {
            hunks.push(Hunk {
                start: section.span.start,
                end: section.span.end,
                context: Some(strip_eol(&section.heading)),
                removed: section.before.iter().map(|l| strip_eol(l)).collect(),
                added: section.after.iter().map(|l| strip_eol(l)).collect(),
            });
        }

        hunks.sort_by_key(|hunk| hunk.start);
        hunks
    }
}

impl Default for DiffFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_eol(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

impl OutputFormatter for DiffFormatter {
    fn format(&self, report: &SyncReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let prefix = Self::dry_run_prefix(report);

        let outcome = match (&report.status, &report.outcome) {
            (SyncStatus::Updated | SyncStatus::WouldUpdate, Some(outcome)) => outcome,
            _ => {
                writeln!(writer, "# {} is up to date", report.target.display())?;
                return Ok(());
            }
        };

        writeln!(writer, "{}--- a/{}", prefix, report.target.display())?;
        writeln!(writer, "{}+++ b/{}", prefix, report.target.display())?;

        for hunk in Self::hunks(outcome) {
            writeln!(writer, "@@ lines {}-{} @@", hunk.start + 1, hunk.end + 1)?;
            if let Some(context) = hunk.context {
                writeln!(writer, " {}", context)?;
            }
            for line in &hunk.removed {
                writeln!(writer, "-{}", line)?;
            }
            for line in &hunk.added {
                writeln!(writer, "+{}", line)?;
            }
        }

        writeln!(writer)?;
        writeln!(
            writer,
            "{}# {} replacement(s), section {}",
            prefix,
            outcome.total_substitutions(),
            if outcome.section_rebuilt() {
                "rebuilt"
            } else {
                "unchanged"
            }
        )?;

        Ok(())
    }
}
