//! readme-sync - Compatible versions synchronizer library
//!
//! This library provides the core functionality for keeping the
//! "Compatible versions" section of two README files in sync:
//! - Section parsing (heading + `- Tool - vX.Y` bullets)
//! - Whole-word replacement of stale versions in the target body
//! - Section rebuild from the source versions

pub mod cli;
pub mod document;
pub mod domain;
pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod output;
pub mod parser;
pub mod update;
