//! Line-level patterns of a compatible versions section
//!
//! Handles line formats:
//! - Heading: `## Compatible versions` (level 2 or deeper, any case)
//! - Bullet: `- Docker - v24.0`, `-docker-24.0`, `  - Node.js - 20.1`

use crate::domain::is_version_string;
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

// Heading of level 2+ reading "Compatible versions"
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"^\s*#{2,}\s+Compatible versions\s*$")
        .case_insensitive(true)
        .build()
        .unwrap()
});

// Bullet entry: - <name> - v<version>
static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-\s*([\w.-]+)\s*-\s*v?([\d.]+)\s*$").unwrap());

/// A tool/version pair read from a bullet line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletEntry {
    /// Tool name as written
    pub name: String,
    /// Version without the `v` prefix
    pub version: String,
}

/// Classification of a line found inside a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionLine {
    /// A valid version bullet
    Entry(BulletEntry),
    /// Blank line, skipped
    Blank,
    /// Dash line that is not a valid bullet; ignored without closing
    Unrecognized,
    /// Any other content; closes the section
    Terminator,
}

/// Returns true if the line is a compatible versions heading
pub fn is_heading(line: &str) -> bool {
    HEADING_RE.is_match(line)
}

/// Parses a bullet line into a tool/version pair.
///
/// Returns `None` when the line does not follow the bullet pattern or the
/// captured version is not made of digits and dots only.
pub fn parse_bullet(line: &str) -> Option<BulletEntry> {
    let caps = BULLET_RE.captures(line)?;
    let name = caps.get(1)?.as_str().trim();
    let version = caps.get(2)?.as_str().trim();

    if !is_version_string(version) {
        return None;
    }

    Some(BulletEntry {
        name: name.to_string(),
        version: version.to_string(),
    })
}

/// Classifies a line that follows the heading
pub fn classify(line: &str) -> SectionLine {
    if let Some(entry) = parse_bullet(line) {
        return SectionLine::Entry(entry);
    }

    let trimmed = line.trim();
    if trimmed.is_empty() {
        SectionLine::Blank
    } else if trimmed.starts_with('#') || !trimmed.starts_with('-') {
        SectionLine::Terminator
    } else {
        SectionLine::Unrecognized
    }
}
