//! Depth-first directory traversal.
//!
//! The walker yields every file under a root. In the full variant it also
//! yields the path of any directory whose entire subtree contains no files,
//! so empty leaf directories stay discoverable by name search. Entries are
//! visited in file-name order, making the traversal deterministic for a
//! given filesystem state.

use crate::error::IndexerError;
use ignore::{Walk, WalkBuilder};
use std::path::{Path, PathBuf};

/// Lazy, pull-based iterator over the paths under a root directory.
pub struct PathWalker {
    inner: Walk,
    yield_dirs: bool,
}

impl PathWalker {
    /// Walk yielding files and file-free directories.
    pub fn new(root: &Path) -> Result<Self, IndexerError> {
        Self::with_options(root, true)
    }

    /// Walk yielding file paths only.
    pub fn files(root: &Path) -> Result<Self, IndexerError> {
        Self::with_options(root, false)
    }

    fn with_options(root: &Path, yield_dirs: bool) -> Result<Self, IndexerError> {
        if !root.is_dir() {
            return Err(IndexerError::NotADirectory(root.to_path_buf()));
        }
        Ok(Self {
            inner: walker(root),
            yield_dirs,
        })
    }
}

impl Iterator for PathWalker {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        for entry in self.inner.by_ref() {
            let Ok(entry) = entry else { continue };
            let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
            if !is_dir {
                return Some(entry.into_path());
            }
            if self.yield_dirs && subtree_has_no_files(entry.path()) {
                return Some(entry.into_path());
            }
        }
        None
    }
}

/// Everything is indexed: no hidden-file or gitignore filtering, sorted for
/// deterministic order.
fn walker(root: &Path) -> Walk {
    WalkBuilder::new(root)
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
}

/// True when no file exists anywhere under `dir`. Only file-free subtrees
/// are walked to the end, so the check stays cheap.
fn subtree_has_no_files(dir: &Path) -> bool {
    for entry in walker(dir) {
        let Ok(entry) = entry else { continue };
        if entry.file_type().map(|ft| !ft.is_dir()).unwrap_or(false) {
            return false;
        }
    }
    true
}
