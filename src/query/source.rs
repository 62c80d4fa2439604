//! Candidate sources for the search engine.
//!
//! The engine is written once against [`SearchSource`]; an in-memory
//! [`FileIndex`](crate::index::FileIndex) and the live filesystem both
//! implement it. `read_lines` is separate from `content_paths` so the
//! combined search can reject a path by name before any content is read.

use crate::error::IndexerError;
use crate::index::FileIndex;
use crate::utils::walk::PathWalker;
use std::fs;
use std::path::{Path, PathBuf};

pub trait SearchSource {
    /// Every known path, contentless entries included (name search).
    fn paths(&self) -> Box<dyn Iterator<Item = String> + '_>;

    /// Paths that may have content lines (content search candidates).
    fn content_paths(&self) -> Box<dyn Iterator<Item = String> + '_>;

    /// The content lines of `path`, or `None` when it has no readable
    /// content. A `None` here is never fatal; the scan moves on.
    fn read_lines(&self, path: &str) -> Option<Vec<String>>;
}

impl SearchSource for FileIndex {
    fn paths(&self) -> Box<dyn Iterator<Item = String> + '_> {
        Box::new(self.keys().map(str::to_owned))
    }

    fn content_paths(&self) -> Box<dyn Iterator<Item = String> + '_> {
        Box::new(self.files().map(|(path, _)| path.to_owned()))
    }

    fn read_lines(&self, path: &str) -> Option<Vec<String>> {
        self.get(path).map(<[String]>::to_vec)
    }
}

/// Live-filesystem source rooted at a directory.
///
/// The root is validated once at construction; per-file read failures
/// during a scan surface as `None` from `read_lines`.
pub struct FilesystemSource {
    root: PathBuf,
}

impl FilesystemSource {
    pub fn new(root: &Path) -> Result<Self, IndexerError> {
        if !root.is_dir() {
            return Err(IndexerError::NotADirectory(root.to_path_buf()));
        }
        Ok(Self {
            root: root.to_path_buf(),
        })
    }
}

impl SearchSource for FilesystemSource {
    fn paths(&self) -> Box<dyn Iterator<Item = String> + '_> {
        match PathWalker::new(&self.root) {
            Ok(walker) => Box::new(walker.map(|p| p.to_string_lossy().into_owned())),
            // Root vanished after construction: nothing to enumerate.
            Err(_) => Box::new(std::iter::empty()),
        }
    }

    fn content_paths(&self) -> Box<dyn Iterator<Item = String> + '_> {
        match PathWalker::files(&self.root) {
            Ok(walker) => Box::new(walker.map(|p| p.to_string_lossy().into_owned())),
            Err(_) => Box::new(std::iter::empty()),
        }
    }

    fn read_lines(&self, path: &str) -> Option<Vec<String>> {
        let text = fs::read_to_string(path).ok()?;
        let lines: Vec<String> = text.lines().map(str::to_owned).collect();
        if lines.is_empty() { None } else { Some(lines) }
    }
}
