//! Sync orchestrator coordinating the whole workflow
//!
//! This module provides:
//! - Workflow coordination: check → parse source → parse target → diff → update → write
//! - Short-circuit when both sections already list the same versions
//! - Dry-run mode support
//! - Write failures reported in the result instead of aborting

use crate::cli::CliArgs;
use crate::document::{check_input_file, write_lines, Document};
use crate::domain::{DocumentRole, VersionMap};
use crate::error::{DocumentError, SyncError};
use crate::parser::parse_document;
use crate::update::{update_document, UpdateOutcome};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

/// Orchestrator for coordinating the sync workflow
pub struct Orchestrator {
    /// CLI arguments for configuration
    args: CliArgs,
}

/// How a sync run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    /// Both sections list the same (tool, version) pairs
    Identical,
    /// Nothing to substitute and the section is already in shape
    UpToDate,
    /// The target was changed (or the write was attempted)
    Updated,
    /// Changes were computed but not written (dry-run)
    WouldUpdate,
}

/// Result of running the orchestrator
#[derive(Debug)]
pub struct SyncReport {
    /// Source document path
    pub source: PathBuf,
    /// Target document path
    pub target: PathBuf,
    /// Versions read from the source section
    pub source_versions: VersionMap,
    /// Versions read from the target section, if it has one
    pub target_versions: Option<VersionMap>,
    /// Final status
    pub status: SyncStatus,
    /// Update details, absent when the sections were identical
    pub outcome: Option<UpdateOutcome>,
    /// Whether this was a dry-run
    pub dry_run: bool,
    /// Error raised while writing the target
    pub write_error: Option<DocumentError>,
}

impl SyncReport {
    fn new(
        source: PathBuf,
        target: PathBuf,
        source_versions: VersionMap,
        target_versions: Option<VersionMap>,
        dry_run: bool,
    ) -> Self {
        Self {
            source,
            target,
            source_versions,
            target_versions,
            status: SyncStatus::Identical,
            outcome: None,
            dry_run,
            write_error: None,
        }
    }

    /// Returns true if the target file was rewritten
    pub fn written(&self) -> bool {
        self.status == SyncStatus::Updated && self.write_error.is_none()
    }

    /// Returns true unless writing the target failed
    pub fn is_success(&self) -> bool {
        self.write_error.is_none()
    }

    /// Total number of version string substitutions
    pub fn total_substitutions(&self) -> usize {
        self.outcome
            .as_ref()
            .map(UpdateOutcome::total_substitutions)
            .unwrap_or(0)
    }

    /// Returns true if the section was rebuilt
    pub fn section_rebuilt(&self) -> bool {
        self.outcome
            .as_ref()
            .map(UpdateOutcome::section_rebuilt)
            .unwrap_or(false)
    }
}

impl Orchestrator {
    /// Create a new orchestrator with the given CLI arguments
    pub fn new(args: CliArgs) -> Self {
        Self { args }
    }

    /// Run the sync workflow.
    ///
    /// Errors abort the run before anything is written. A failed write is
    /// reported through `SyncReport::write_error`.
    pub fn run(&self) -> Result<SyncReport, SyncError> {
        let source_path = &self.args.src_file;
        let target_path = &self.args.target_file;

        // Step 1: Both inputs must be existing files
        check_input_file(source_path, DocumentRole::Source)?;
        check_input_file(target_path, DocumentRole::Target)?;

        // Step 2: The source must have a section
        let source_doc = Document::read(source_path, DocumentRole::Source)?;
        let source_section =
            parse_document(&source_doc).ok_or_else(|| SyncError::section_not_found(source_path))?;

        // Step 3: The target may lack a section but not content
        let target_doc = Document::read(target_path, DocumentRole::Target)?;
        if target_doc.is_empty() {
            return Err(SyncError::empty_target(target_path));
        }
        let target_section = parse_document(&target_doc);

        let mut report = SyncReport::new(
            source_path.clone(),
            target_path.clone(),
            source_section.versions.clone(),
            target_section.as_ref().map(|s| s.versions.clone()),
            self.args.dry_run,
        );

        if let Some(section) = &target_section {
            if section.versions == source_section.versions {
                info!("source and target sections are identical");
                return Ok(report);
            }
        }

        // Step 4: Substitute and rebuild
        let outcome = update_document(
            &target_doc.lines,
            &source_section.versions,
            target_section.as_ref(),
        )?;

        // Step 5: Write back (unless dry-run or nothing changed)
        report.status = if !outcome.has_changes() {
            SyncStatus::UpToDate
        } else if self.args.dry_run {
            debug!("dry-run: leaving {} untouched", target_path.display());
            SyncStatus::WouldUpdate
        } else {
            if let Err(e) = write_lines(target_path, &outcome.lines) {
                report.write_error = Some(e);
            }
            SyncStatus::Updated
        };
        report.outcome = Some(outcome);

        Ok(report)
    }
}
