//! Version substitution planning and whole-word replacement
//!
//! The plan is derived by diffing the source versions against the versions
//! found in the target section: every tool whose target version differs
//! registers an `old → new` replacement keyed by the old version string.

use crate::domain::VersionMap;
use crate::error::SyncError;
use regex::{Captures, Regex};
use serde::Serialize;
use std::collections::HashMap;

/// A registered old → new version replacement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replacement {
    /// Version string found in the target
    pub from: String,
    /// Version string from the source
    pub to: String,
    /// Tools that requested this replacement
    pub tools: Vec<String>,
}

/// A replacement that lost to an earlier one registered for the same old version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    /// Tool whose replacement was dropped
    pub tool: String,
    /// Shared old version
    pub from: String,
    /// Version the tool asked for
    pub wanted: String,
    /// Version that is applied instead
    pub applied: String,
}

/// Ordered set of replacements plus the conflicts found while building it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionPlan {
    replacements: Vec<Replacement>,
    conflicts: Vec<Conflict>,
}

impl SubstitutionPlan {
    /// Builds the plan from the source versions and the target section versions.
    ///
    /// Tools are visited in alphabetical order, not in the order their bullets
    /// appear in the source file. Tools missing from the target section are
    /// ignored. When two tools share an old version but want different new
    /// versions, the alphabetically first tool wins and the other is recorded
    /// as a [`Conflict`].
    pub fn build(source: &VersionMap, target: &VersionMap) -> Self {
        let mut plan = SubstitutionPlan::default();

        for (tool, new_version) in source.iter() {
            let Some(old_version) = target.get(tool) else {
                continue;
            };
            if old_version == new_version {
                continue;
            }

            match plan.replacements.iter_mut().find(|r| r.from == old_version) {
                Some(existing) if existing.to == new_version => {
                    existing.tools.push(tool.to_string());
                }
                Some(existing) => plan.conflicts.push(Conflict {
                    tool: tool.to_string(),
                    from: old_version.to_string(),
                    wanted: new_version.to_string(),
                    applied: existing.to.clone(),
                }),
                None => plan.replacements.push(Replacement {
                    from: old_version.to_string(),
                    to: new_version.to_string(),
                    tools: vec![tool.to_string()],
                }),
            }
        }

        plan
    }

    pub fn replacements(&self) -> &[Replacement] {
        &self.replacements
    }

    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }
}

/// Compiled whole-word matcher for every replacement of a plan
///
/// All old versions are matched by one alternation, longest first, so each
/// position of a line is rewritten at most once.
pub struct Substituter {
    pattern: Regex,
    index: HashMap<String, usize>,
    targets: Vec<String>,
}

impl Substituter {
    /// Compiles the plan. Returns `None` for an empty plan.
    pub fn new(plan: &SubstitutionPlan) -> Result<Option<Self>, SyncError> {
        if plan.is_empty() {
            return Ok(None);
        }

        let mut alternatives: Vec<&str> =
            plan.replacements.iter().map(|r| r.from.as_str()).collect();
        alternatives.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let pattern = format!(
            r"\b(?:{})\b",
            alternatives
                .iter()
                .map(|v| regex::escape(v))
                .collect::<Vec<_>>()
                .join("|")
        );
        let pattern = Regex::new(&pattern).map_err(|e| SyncError::InvalidPattern {
            message: e.to_string(),
        })?;

        let index = plan
            .replacements
            .iter()
            .enumerate()
            .map(|(i, r)| (r.from.clone(), i))
            .collect();
        let targets = plan.replacements.iter().map(|r| r.to.clone()).collect();

        Ok(Some(Self {
            pattern,
            index,
            targets,
        }))
    }

    /// Replaces every whole-word occurrence of an old version in the line.
    ///
    /// `counts` is indexed like the plan's replacements and incremented per
    /// substitution. Returns `None` when the line is unchanged.
    pub fn replace_line(&self, line: &str, counts: &mut [usize]) -> Option<String> {
        let mut hits = 0;
        let replaced = self.pattern.replace_all(line, |caps: &Captures| {
            let matched = &caps[0];
            match self.index.get(matched) {
                Some(&i) => {
                    counts[i] += 1;
                    hits += 1;
                    self.targets[i].clone()
                }
                None => matched.to_string(),
            }
        });

        if hits > 0 {
            Some(replaced.into_owned())
        } else {
            None
        }
    }
}
