//! Integration tests for readme-sync
//!
//! These tests verify:
//! - Section parsing of realistic README files
//! - The full parse → update → write pipeline over temp files
//! - Whole-word substitution boundaries

use readme_sync::document::{write_lines, Document};
use readme_sync::domain::{DocumentRole, VersionMap};
use readme_sync::parser::parse_document;
use readme_sync::update::{render_bullets, update_document};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture directory creation helper
fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const SOURCE_README: &str = r#"# Toolchain

Shared tooling for all services.

## Compatible versions

- Docker - v24.0
- NodeJS - v20.1
- Github-Cli - v2.40.1

## License

MIT
"#;

const TARGET_README: &str = r#"# Service

Install Docker 23.5 or later. Node 20.1 is required.
The Docker 23.5 API is used for build 123.50 artifacts.

### Compatible Versions
- NodeJS - v20.1
- Docker - v23.5
- GitHub-CLI - v2.39

## Setup

Run `gh` 2.39 and check `docker --version` prints 23.5.
"#;

mod section_parsing {
    use super::*;

    #[test]
    fn test_parse_source_readme() {
        let dir = create_test_dir();
        let path = write_file(&dir, "SOURCE.md", SOURCE_README);

        let doc = Document::read(&path, DocumentRole::Source).unwrap();
        let section = parse_document(&doc).expect("section should be found");

        assert_eq!(section.versions.len(), 3);
        assert_eq!(section.versions.get("docker"), Some("24.0"));
        assert_eq!(section.versions.get("nodejs"), Some("20.1"));
        assert_eq!(section.versions.get("github-cli"), Some("2.40.1"));
        assert_eq!(section.span.start, 4);
        assert_eq!(section.span.end, 8);
    }

    #[test]
    fn test_parse_heading_case_insensitive() {
        let doc = Document::from_text("TARGET.md", TARGET_README);
        let section = parse_document(&doc).expect("section should be found");

        assert_eq!(section.span.start, 5);
        assert_eq!(section.span.end, 8);
        assert_eq!(section.versions.get("github-cli"), Some("2.39"));
    }

    #[test]
    fn test_rendering_sorted_section_is_fixed_point() {
        let text = "## Compatible versions\n- Docker - v24.0\n- Github-Cli - v2.40.1\n- Nodejs - v20.1\n";
        let doc = Document::from_text("README.md", text);
        let section = parse_document(&doc).unwrap();

        let rendered = render_bullets(&section.versions, "\n");
        assert_eq!(rendered, doc.lines[1..].to_vec());
    }
}

mod pipeline {
    use super::*;

    fn sync(source: &str, target: &str) -> (TempDir, PathBuf, bool) {
        let dir = create_test_dir();
        let target_path = write_file(&dir, "TARGET.md", target);

        let source_doc = Document::from_text("SOURCE.md", source);
        let source_section = parse_document(&source_doc).unwrap();
        let target_doc = Document::read(&target_path, DocumentRole::Target).unwrap();
        let target_section = parse_document(&target_doc);

        let outcome = update_document(
            &target_doc.lines,
            &source_section.versions,
            target_section.as_ref(),
        )
        .unwrap();

        let changed = outcome.has_changes();
        if changed {
            write_lines(&target_path, &outcome.lines).unwrap();
        }
        (dir, target_path, changed)
    }

    #[test]
    fn test_full_sync() {
        let (_dir, target_path, changed) = sync(SOURCE_README, TARGET_README);
        assert!(changed);

        let updated = fs::read_to_string(&target_path).unwrap();
        assert_eq!(
            updated,
            r#"# Service

Install Docker 24.0 or later. Node 20.1 is required.
The Docker 24.0 API is used for build 123.50 artifacts.

### Compatible Versions
- Docker - v24.0
- Github-Cli - v2.40.1
- Nodejs - v20.1

## Setup

Run `gh` 2.40.1 and check `docker --version` prints 24.0.
"#
        );
    }

    #[test]
    fn test_sync_is_idempotent() {
        let (_dir, target_path, _) = sync(SOURCE_README, TARGET_README);
        let first = fs::read_to_string(&target_path).unwrap();

        let (_dir2, target_path2, changed) = sync(SOURCE_README, &first);
        assert!(!changed);
        assert_eq!(fs::read_to_string(&target_path2).unwrap(), first);
    }

    #[test]
    fn test_target_without_section_unchanged() {
        let target = "# Service\n\nDocker 23.5 is required.\n";
        let (_dir, target_path, changed) = sync(SOURCE_README, target);

        assert!(!changed);
        assert_eq!(fs::read_to_string(&target_path).unwrap(), target);
    }

    #[test]
    fn test_crlf_target_keeps_line_endings() {
        let target = "Docker 23.5\r\n\r\n## Compatible versions\r\n- Docker - v23.5\r\n";
        let source = "## Compatible versions\n- Docker - v24.0\n";
        let (_dir, target_path, changed) = sync(source, target);

        assert!(changed);
        assert_eq!(
            fs::read_to_string(&target_path).unwrap(),
            "Docker 24.0\r\n\r\n## Compatible versions\r\n- Docker - v24.0\r\n"
        );
    }
}

mod substitution_boundaries {
    use super::*;

    fn substitute(text: &str, old: &str, new: &str) -> String {
        let source: VersionMap = [("tool", new)].into_iter().collect();
        let target = format!("## Compatible versions\n- Tool - v{}\n\n{}", old, text);
        let doc = Document::from_text("README.md", &target);
        let section = parse_document(&doc);

        let outcome = update_document(&doc.lines, &source, section.as_ref()).unwrap();
        outcome.lines[3..].concat()
    }

    #[test]
    fn test_standalone_version_replaced() {
        assert_eq!(
            substitute("version 23.5 API\n", "23.5", "24.0"),
            "version 24.0 API\n"
        );
    }

    #[test]
    fn test_longer_token_untouched() {
        assert_eq!(substitute("build 123.50\n", "23.5", "24.0"), "build 123.50\n");
    }

    #[test]
    fn test_prefixed_token_untouched() {
        assert_eq!(substitute("tag v23.5\n", "23.5", "24.0"), "tag v23.5\n");
    }

    #[test]
    fn test_punctuation_is_a_boundary() {
        assert_eq!(
            substitute("(23.5), \"23.5\"; 23.5.\n", "23.5", "24.0"),
            "(24.0), \"24.0\"; 24.0.\n"
        );
    }
}
