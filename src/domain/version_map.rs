//! Tool → version mapping parsed from a compatible versions section
//!
//! Keys are normalized (trimmed, lowercased) tool identifiers. Entries are
//! kept sorted by key, so iteration order is the rendering order and two
//! maps compare equal exactly when their sorted (tool, version) pairs match.

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

// Digits and dots only
static VERSION_STRING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\d.]+$").unwrap());

/// Mapping from lowercased tool name to version string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VersionMap {
    entries: BTreeMap<String, String>,
}

impl VersionMap {
    /// Creates an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a tool version, normalizing the tool name.
    ///
    /// A later insert for the same tool replaces the earlier version, which
    /// is returned.
    pub fn insert(&mut self, tool: &str, version: &str) -> Option<String> {
        self.entries
            .insert(normalize_tool_name(tool), version.trim().to_string())
    }

    /// Looks up the version of a tool by (case-insensitive) name
    pub fn get(&self, tool: &str) -> Option<&str> {
        self.entries
            .get(&normalize_tool_name(tool))
            .map(String::as_str)
    }

    /// Returns true if the tool is present
    pub fn contains(&self, tool: &str) -> bool {
        self.get(tool).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in alphabetical key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(tool, version)| (tool.as_str(), version.as_str()))
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for VersionMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = VersionMap::new();
        for (tool, version) in iter {
            map.insert(tool.as_ref(), version.as_ref());
        }
        map
    }
}

/// Normalizes a tool name into a map key
pub fn normalize_tool_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Returns true if the string consists solely of digits and dots
pub fn is_version_string(version: &str) -> bool {
    VERSION_STRING_RE.is_match(version)
}

/// Renders a tool key for display: each hyphen-separated word gets an
/// upper-cased first character and a lower-cased remainder.
///
/// `nodejs` becomes `Nodejs`, `github-cli` becomes `Github-Cli`.
pub fn display_tool_name(key: &str) -> String {
    key.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join("-")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_normalizes_key() {
        let mut map = VersionMap::new();
        map.insert("  NodeJS ", " 20.1 ");
        assert_eq!(map.get("nodejs"), Some("20.1"));
        assert_eq!(map.get("NODEJS"), Some("20.1"));
        assert!(map.contains("NodeJs"));
    }

    #[test]
    fn test_insert_overwrites() {
        let mut map = VersionMap::new();
        assert_eq!(map.insert("docker", "23.5"), None);
        assert_eq!(map.insert("Docker", "24.0"), Some("23.5".to_string()));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("docker"), Some("24.0"));
    }

    #[test]
    fn test_iter_is_sorted() {
        let map: VersionMap = [("rust", "1.75"), ("docker", "24.0"), ("node", "20")]
            .into_iter()
            .collect();
        let keys: Vec<_> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["docker", "node", "rust"]);
    }

    #[test]
    fn test_equality_ignores_insert_order() {
        let a: VersionMap = [("docker", "24.0"), ("nodejs", "20.1")].into_iter().collect();
        let b: VersionMap = [("NodeJS", "20.1"), ("Docker", "24.0")].into_iter().collect();
        assert_eq!(a, b);

        let c: VersionMap = [("docker", "24.0"), ("nodejs", "20.2")].into_iter().collect();
        assert_ne!(a, c);
    }

    #[test]
    fn test_is_version_string() {
        assert!(is_version_string("24.0"));
        assert!(is_version_string("1"));
        assert!(is_version_string("0.0.0.0.0"));
        assert!(!is_version_string(""));
        assert!(!is_version_string("1.0-beta"));
        assert!(!is_version_string("v1.0"));
    }

    #[test]
    fn test_display_tool_name() {
        assert_eq!(display_tool_name("docker"), "Docker");
        assert_eq!(display_tool_name("nodejs"), "Nodejs");
        assert_eq!(display_tool_name("github-cli"), "Github-Cli");
        assert_eq!(display_tool_name("node.js"), "Node.js");
        assert_eq!(display_tool_name("a--b"), "A--B");
    }

    #[test]
    fn test_display_tool_name_lowercases_tail() {
        assert_eq!(display_tool_name("NODEJS"), "Nodejs");
    }

    #[test]
    fn test_serialize_as_object() {
        let map: VersionMap = [("docker", "24.0")].into_iter().collect();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"docker":"24.0"}"#);
    }
}
