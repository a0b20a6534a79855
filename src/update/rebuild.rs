//! Section rebuild from the source versions

use crate::document::line_ending;
use crate::domain::{display_tool_name, SectionSpan, VersionMap};
use serde::Serialize;

/// A rebuilt compatible versions section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionRebuild {
    /// Span of the section in the original document
    pub span: SectionSpan,
    /// Heading line, carried over from the original
    pub heading: String,
    /// Original bullet lines (`start+1..=end`)
    pub before: Vec<String>,
    /// Rebuilt bullet lines
    pub after: Vec<String>,
}

impl SectionRebuild {
    /// Lines replacing the original `start..=end` block
    pub fn block(&self) -> Vec<String> {
        std::iter::once(self.heading.clone())
            .chain(self.after.iter().cloned())
            .collect()
    }
}

/// Renders a single bullet line: `- Docker - v24.0`
pub fn render_bullet(tool: &str, version: &str, eol: &str) -> String {
    format!("- {} - v{}{}", display_tool_name(tool), version, eol)
}

/// Renders one bullet per entry in alphabetical tool order
pub fn render_bullets(versions: &VersionMap, eol: &str) -> Vec<String> {
    versions
        .iter()
        .map(|(tool, version)| render_bullet(tool, version, eol))
        .collect()
}

/// Rebuilds the section at `span` from the source versions.
///
/// Bullets reuse the heading's line terminator. Returns `None` when the
/// rebuilt bullets are identical to the original ones.
pub fn rebuild_section(
    lines: &[String],
    span: SectionSpan,
    source: &VersionMap,
) -> Option<SectionRebuild> {
    let original_heading = lines.get(span.start)?;
    let eol = match line_ending(original_heading) {
        "" => "\n",
        eol => eol,
    };
    let heading = if original_heading.ends_with('\n') {
        original_heading.clone()
    } else {
        format!("{}{}", original_heading, eol)
    };

    let before = lines.get(span.bullet_range())?.to_vec();
    let after = render_bullets(source, eol);

    if before == after {
        return None;
    }

    Some(SectionRebuild {
        span,
        heading,
        before,
        after,
    })
}
