//! JSON output formatter for machine processing

use crate::domain::VersionMap;
use crate::orchestrator::{SyncReport, SyncStatus};
use crate::output::{OutputFormatter, Verbosity};
use crate::update::{AppliedReplacement, Conflict};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full report
#[derive(Serialize)]
struct JsonOutput<'a> {
    source: String,
    target: String,
    status: SyncStatus,
    dry_run: bool,
    written: bool,
    substitutions: usize,
    section_rebuilt: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    replacements: Vec<&'a AppliedReplacement>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    conflicts: Vec<&'a Conflict>,
    /// Source versions (verbose only)
    #[serde(skip_serializing_if = "Option::is_none")]
    versions: Option<&'a VersionMap>,
    /// Versions the target section listed before the sync (verbose only)
    #[serde(skip_serializing_if = "Option::is_none")]
    previous_versions: Option<&'a VersionMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &SyncReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let verbose = self.verbosity == Verbosity::Verbose;
        let (replacements, conflicts) = match &report.outcome {
            Some(outcome) => (
                outcome.replacements.iter().collect(),
                outcome.conflicts.iter().collect(),
            ),
            None => (Vec::new(), Vec::new()),
        };

        let output = JsonOutput {
            source: report.source.display().to_string(),
            target: report.target.display().to_string(),
            status: report.status,
            dry_run: report.dry_run,
            written: report.written(),
            substitutions: report.total_substitutions(),
            section_rebuilt: report.section_rebuilt(),
            replacements,
            conflicts,
            versions: verbose.then_some(&report.source_versions),
            previous_versions: report.target_versions.as_ref().filter(|_| verbose),
            error: report.write_error.as_ref().map(ToString::to_string),
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
