//! Target document update logic
//!
//! This module provides:
//! - Substitution planning from source vs. target section versions
//! - Whole-word replacement of stale versions across every target line
//! - Rebuild of the target's compatible versions section
//!
//! Everything here is pure: the updated lines and the counts are returned
//! in an `UpdateOutcome` and writing is left to the caller.

mod plan;
mod rebuild;

pub use plan::{Conflict, Replacement, SubstitutionPlan, Substituter};
pub use rebuild::{rebuild_section, render_bullet, render_bullets, SectionRebuild};

use crate::domain::{ParsedSection, VersionMap};
use crate::error::SyncError;
use serde::Serialize;
use tracing::{debug, warn};

/// A replacement together with how often it was applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedReplacement {
    #[serde(flatten)]
    pub replacement: Replacement,
    /// Number of substitutions made
    pub count: usize,
}

/// A single line rewritten by the substitution pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineChange {
    /// Zero-based line index in the original document
    pub index: usize,
    pub before: String,
    pub after: String,
}

/// Result of updating a target document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Updated line sequence
    pub lines: Vec<String>,
    /// Replacements in plan order with their counts
    pub replacements: Vec<AppliedReplacement>,
    /// Replacements dropped because of a shared old version
    pub conflicts: Vec<Conflict>,
    /// Lines changed by the substitution pass
    pub line_changes: Vec<LineChange>,
    /// Section rebuild, if the section changed
    pub section: Option<SectionRebuild>,
}

impl UpdateOutcome {
    /// Total number of version string substitutions
    pub fn total_substitutions(&self) -> usize {
        self.replacements.iter().map(|r| r.count).sum()
    }

    /// Returns true if the section was rebuilt
    pub fn section_rebuilt(&self) -> bool {
        self.section.is_some()
    }

    /// Returns true if the document needs to be written
    pub fn has_changes(&self) -> bool {
        self.total_substitutions() > 0 || self.section_rebuilt()
    }
}

/// Updates the target lines against the source versions.
///
/// `target` is the parsed target section, or `None` when the target has no
/// compatible versions heading; in that case nothing can be diffed and the
/// section rebuild is skipped.
pub fn update_document(
    lines: &[String],
    source: &VersionMap,
    target: Option<&ParsedSection>,
) -> Result<UpdateOutcome, SyncError> {
    let empty = VersionMap::new();
    let target_versions = target.map(|s| &s.versions).unwrap_or(&empty);

    let plan = SubstitutionPlan::build(source, target_versions);
    for conflict in plan.conflicts() {
        warn!(
            "{} wants {} -> {}, but {} -> {} is already registered; keeping {}",
            conflict.tool,
            conflict.from,
            conflict.wanted,
            conflict.from,
            conflict.applied,
            conflict.applied
        );
    }

    let mut updated = lines.to_vec();
    let mut counts = vec![0; plan.len()];
    let mut line_changes = Vec::new();

    if let Some(substituter) = Substituter::new(&plan)? {
        for (index, line) in updated.iter_mut().enumerate() {
            if let Some(new_line) = substituter.replace_line(line, &mut counts) {
                line_changes.push(LineChange {
                    index,
                    before: std::mem::replace(line, new_line.clone()),
                    after: new_line,
                });
            }
        }
    }

    let replacements: Vec<AppliedReplacement> = plan
        .replacements()
        .iter()
        .zip(counts)
        .map(|(replacement, count)| {
            debug!(
                "{} -> {} ({}): {} substitution(s)",
                replacement.from,
                replacement.to,
                replacement.tools.join(", "),
                count
            );
            AppliedReplacement {
                replacement: replacement.clone(),
                count,
            }
        })
        .collect();

    let section = target.and_then(|parsed| rebuild_section(lines, parsed.span, source));
    if let Some(rebuild) = &section {
        debug!(
            "rebuilding section at lines {}..={}",
            rebuild.span.start + 1,
            rebuild.span.end + 1
        );
        updated.splice(rebuild.span.range(), rebuild.block());
    }

    Ok(UpdateOutcome {
        lines: updated,
        replacements,
        conflicts: plan.conflicts().to_vec(),
        line_changes,
        section,
    })
}
