//! Index persistence.
//!
//! The on-disk format is versioned JSON behind a required `.fdx` extension:
//!
//! ```json
//! { "version": 1, "created": "21.03.2026 14:02:11",
//!   "entries": { "a/b.txt": ["line"], "a/hollow": null } }
//! ```
//!
//! `null` is the "no content" marker. `load(save(index))` reproduces the
//! index exactly, `created` included.

use crate::error::IndexerError;
use crate::index::types::FileIndex;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

pub const INDEX_EXTENSION: &str = "fdx";
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct PersistedIndexRef<'a> {
    version: u32,
    #[serde(flatten)]
    index: &'a FileIndex,
}

#[derive(Deserialize)]
struct PersistedIndex {
    version: u32,
    #[serde(flatten)]
    index: FileIndex,
}

/// Whether `path` carries the persisted-index extension.
pub fn is_index_file(path: &Path) -> bool {
    path.extension().and_then(OsStr::to_str) == Some(INDEX_EXTENSION)
}

/// Serialize `index` to `dst`, overwriting any existing file.
///
/// The extension gate runs before anything is written; a wrong extension
/// fails with [`IndexerError::InvalidFormat`] and leaves `dst` untouched.
pub fn save(index: &FileIndex, dst: &Path) -> Result<(), IndexerError> {
    if !is_index_file(dst) {
        return Err(IndexerError::InvalidFormat(dst.to_path_buf()));
    }
    let file = File::create(dst)?;
    let persisted = PersistedIndexRef {
        version: FORMAT_VERSION,
        index,
    };
    serde_json::to_writer(BufWriter::new(file), &persisted)
        .map_err(|_| IndexerError::Corrupt(dst.to_path_buf()))?;
    Ok(())
}

/// Load a previously saved index.
///
/// A missing file is [`IndexerError::NotFound`]; anything unreadable, with
/// the wrong shape or the wrong version tag is [`IndexerError::Corrupt`].
pub fn load(src: &Path) -> Result<FileIndex, IndexerError> {
    if !src.is_file() {
        return Err(IndexerError::NotFound(src.to_path_buf()));
    }
    let text = fs::read_to_string(src).map_err(|_| IndexerError::Corrupt(src.to_path_buf()))?;
    let persisted: PersistedIndex =
        serde_json::from_str(&text).map_err(|_| IndexerError::Corrupt(src.to_path_buf()))?;
    if persisted.version != FORMAT_VERSION {
        return Err(IndexerError::Corrupt(src.to_path_buf()));
    }
    Ok(persisted.index)
}
