//! In-memory index data model.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from path to its content lines, plus a creation timestamp.
///
/// An entry's value is `None` when the path had no readable content:
/// unreadable/binary files, zero-line files and contentless directories all
/// share this marker. Marker entries are excluded from [`files`](Self::files)
/// but still enumerated by [`keys`](Self::keys), so name search sees them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileIndex {
    created: String,
    entries: BTreeMap<String, Option<Vec<String>>>,
}

impl FileIndex {
    pub fn new() -> Self {
        Self {
            created: Local::now().format("%d.%m.%Y %H:%M:%S").to_string(),
            entries: BTreeMap::new(),
        }
    }

    /// Creation timestamp, set at construction and never mutated.
    pub fn created(&self) -> &str {
        &self.created
    }

    /// Insert (or overwrite) an entry. Empty `lines` is stored as the
    /// "no content" marker, not as an empty sequence.
    pub fn insert(&mut self, path: impl Into<String>, lines: Vec<String>) {
        let value = if lines.is_empty() { None } else { Some(lines) };
        self.entries.insert(path.into(), value);
    }

    /// `(path, lines)` pairs, skipping marker entries.
    pub fn files(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .filter_map(|(path, lines)| Some((path.as_str(), lines.as_deref()?)))
    }

    /// Every path, marker entries included.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Every entry, marker entries included.
    pub fn items(&self) -> impl Iterator<Item = (&str, Option<&[String]>)> {
        self.entries
            .iter()
            .map(|(path, lines)| (path.as_str(), lines.as_deref()))
    }

    pub fn get(&self, path: &str) -> Option<&[String]> {
        self.entries.get(path)?.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FileIndex {
    fn default() -> Self {
        Self::new()
    }
}
