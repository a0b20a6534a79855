//! Section location types

use super::VersionMap;
use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// Inclusive line span of a compatible versions section
///
/// `start` is the heading line. `end` is the last recognized version bullet,
/// or the heading itself when the section holds no valid bullet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionSpan {
    pub start: usize,
    pub end: usize,
}

impl SectionSpan {
    /// Creates a span covering only the heading line
    pub fn heading(start: usize) -> Self {
        Self { start, end: start }
    }

    /// Line range of the bullets following the heading (`start+1..=end`)
    pub fn bullet_range(&self) -> Range<usize> {
        self.start + 1..self.end + 1
    }

    /// Line range of the whole section, heading included
    pub fn range(&self) -> Range<usize> {
        self.start..self.end + 1
    }

    /// Returns true if the line index falls inside the section
    pub fn contains(&self, index: usize) -> bool {
        self.range().contains(&index)
    }
}

/// A parsed compatible versions section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSection {
    /// Tool versions listed in the section
    pub versions: VersionMap,
    /// Where the section lives in the document
    pub span: SectionSpan,
}

/// Which of the two documents a path refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentRole {
    /// Document providing the correct versions
    Source,
    /// Document being updated
    Target,
}

impl DocumentRole {
    /// Capitalized label for messages
    pub fn label(&self) -> &'static str {
        match self {
            DocumentRole::Source => "Source",
            DocumentRole::Target => "Target",
        }
    }
}

impl fmt::Display for DocumentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentRole::Source => write!(f, "source"),
            DocumentRole::Target => write!(f, "target"),
        }
    }
}
