//! Document reading and writing
//!
//! A document is held as its verbatim line sequence, each line keeping its
//! terminator, so writing the lines back reproduces the file byte for byte.

use crate::domain::DocumentRole;
use crate::error::DocumentError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A text document split into lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path the document was read from
    pub path: PathBuf,
    /// Lines including their terminators
    pub lines: Vec<String>,
}

impl Document {
    /// Creates a document from in-memory text
    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        Self {
            path: path.into(),
            lines: split_lines(text),
        }
    }

    /// Reads a document from disk
    pub fn read(path: &Path, role: DocumentRole) -> Result<Self, DocumentError> {
        let text = fs::read_to_string(path)
            .map_err(|e| DocumentError::read_error(role, path, e))?;
        let document = Self::from_text(path, &text);
        debug!(
            "read {} document {} ({} lines)",
            role,
            path.display(),
            document.lines.len()
        );
        Ok(document)
    }

    /// Returns true if the document has no content at all
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Splits text into lines, keeping each line's terminator
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}

/// Returns the terminator a line ends with (`"\r\n"`, `"\n"` or `""`)
pub fn line_ending(line: &str) -> &'static str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else if line.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}

/// Checks that a path exists and is a regular file
pub fn check_input_file(path: &Path, role: DocumentRole) -> Result<(), DocumentError> {
    if !path.exists() {
        return Err(DocumentError::not_found(role, path));
    }
    if !path.is_file() {
        return Err(DocumentError::not_a_file(role, path));
    }
    Ok(())
}

/// Writes lines to a file in a single operation
pub fn write_lines(path: &Path, lines: &[String]) -> Result<(), DocumentError> {
    fs::write(path, lines.concat()).map_err(|e| DocumentError::write_error(path, e))?;
    debug!("wrote {} lines to {}", lines.len(), path.display());
    Ok(())
}
