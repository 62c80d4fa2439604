//! Typed errors raised by the core.
//!
//! Every error the index/search layers can raise is one of these kinds;
//! callers match on the kind, users see the one-line message. Per-file read
//! failures during a scan are deliberately NOT here: a single unreadable
//! file is skipped, never fatal.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexerError {
    /// The root argument of a traversal is not an existing directory.
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// Destination path lacks the persisted-index extension.
    #[error("expected {} to be a .fdx file", .0.display())]
    InvalidFormat(PathBuf),

    /// Persisted index file is missing.
    #[error("no such file {}", .0.display())]
    NotFound(PathBuf),

    /// Persisted index file is unreadable or has the wrong shape.
    #[error("cannot load `{}`, may be damaged", .0.display())]
    Corrupt(PathBuf),

    /// Malformed invocation (CLI layer).
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// I/O failure outside the scan's skip policy (e.g. writing an index).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
