//! Compatible versions section parser
//!
//! Scans a document top to bottom with a two-state machine:
//! - `Outside` until the first heading matches
//! - `Inside` while bullets, blank lines or unrecognized dash lines follow
//!
//! The first terminating line ends the scan; later headings are not
//! considered.

mod bullet;

pub use bullet::{classify, is_heading, parse_bullet, BulletEntry, SectionLine};

use crate::document::Document;
use crate::domain::{ParsedSection, SectionSpan, VersionMap};
use tracing::{debug, trace};

/// Scanner state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// No heading seen yet
    Outside,
    /// Inside the section opened at the given span
    Inside(SectionSpan),
}

/// Locates and parses the compatible versions section of a line sequence.
///
/// Returns `None` when no heading is found.
pub fn parse_section<S: AsRef<str>>(lines: &[S]) -> Option<ParsedSection> {
    let mut versions = VersionMap::new();
    let mut state = ScanState::Outside;

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        state = match state {
            ScanState::Outside if is_heading(line) => {
                debug!("compatible versions heading at line {}", index + 1);
                ScanState::Inside(SectionSpan::heading(index))
            }
            ScanState::Outside => ScanState::Outside,
            ScanState::Inside(mut span) => match classify(line) {
                SectionLine::Entry(entry) => {
                    trace!("line {}: {} = {}", index + 1, entry.name, entry.version);
                    versions.insert(&entry.name, &entry.version);
                    span.end = index;
                    ScanState::Inside(span)
                }
                SectionLine::Blank | SectionLine::Unrecognized => ScanState::Inside(span),
                SectionLine::Terminator => {
                    debug!("section closed at line {}", index + 1);
                    return Some(ParsedSection { versions, span });
                }
            },
        };
    }

    match state {
        ScanState::Inside(span) => Some(ParsedSection { versions, span }),
        ScanState::Outside => None,
    }
}

/// Parses the compatible versions section of a document
pub fn parse_document(document: &Document) -> Option<ParsedSection> {
    let parsed = parse_section(&document.lines);
    match &parsed {
        Some(section) => debug!(
            "{}: {} tool(s) in lines {}..={}",
            document.path.display(),
            section.versions.len(),
            section.span.start + 1,
            section.span.end + 1
        ),
        None => debug!(
            "{}: no compatible versions section",
            document.path.display()
        ),
    }
    parsed
}
