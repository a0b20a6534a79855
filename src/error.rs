//! Application error types using thiserror
//!
//! Error hierarchy:
//! - DocumentError: file system problems with the source or target document
//! - SyncError: everything that aborts a synchronization run

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DocumentRole;

/// Errors related to reading and writing documents
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Path does not exist
    #[error("{} file not found: {}", .role.label(), .path.display())]
    NotFound { role: DocumentRole, path: PathBuf },

    /// Path exists but is not a regular file
    #[error("{} path is not a file: {}", .role.label(), .path.display())]
    NotAFile { role: DocumentRole, path: PathBuf },

    /// Failed to read the document
    #[error("failed to read {} file {}: {}", .role, .path.display(), .source)]
    ReadError {
        role: DocumentRole,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the document
    #[error("failed to write updated file {}: {}", .path.display(), .source)]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that abort a synchronization run
#[derive(Error, Debug)]
pub enum SyncError {
    /// Document IO errors
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// The source document has no compatible versions heading
    #[error(
        "failed to parse source file or find compatible versions section: {}",
        .path.display()
    )]
    SectionNotFound { path: PathBuf },

    /// The target document is empty
    #[error("cannot process empty target file content: {}", .path.display())]
    EmptyTarget { path: PathBuf },

    /// A substitution pattern failed to compile
    #[error("invalid substitution pattern: {message}")]
    InvalidPattern { message: String },
}

impl DocumentError {
    /// Creates a new NotFound error
    pub fn not_found(role: DocumentRole, path: impl Into<PathBuf>) -> Self {
        DocumentError::NotFound {
            role,
            path: path.into(),
        }
    }

    /// Creates a new NotAFile error
    pub fn not_a_file(role: DocumentRole, path: impl Into<PathBuf>) -> Self {
        DocumentError::NotAFile {
            role,
            path: path.into(),
        }
    }

    /// Creates a new ReadError
    pub fn read_error(
        role: DocumentRole,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        DocumentError::ReadError {
            role,
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DocumentError::WriteError {
            path: path.into(),
            source,
        }
    }
}

impl SyncError {
    /// Creates a new SectionNotFound error
    pub fn section_not_found(path: impl Into<PathBuf>) -> Self {
        SyncError::SectionNotFound { path: path.into() }
    }

    /// Creates a new EmptyTarget error
    pub fn empty_target(path: impl Into<PathBuf>) -> Self {
        SyncError::EmptyTarget { path: path.into() }
    }
}
