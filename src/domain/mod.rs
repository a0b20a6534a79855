//! Core domain models for readme-sync
//!
//! This module contains the fundamental types used throughout the application:
//! - Version maps keyed by normalized tool name
//! - Section spans locating the compatible versions block in a document
//! - Document roles (source / target)

mod section;
mod version_map;

pub use section::{DocumentRole, ParsedSection, SectionSpan};
pub use version_map::{display_tool_name, is_version_string, normalize_tool_name, VersionMap};
