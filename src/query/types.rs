//! Search result value objects.
//!
//! These are plain values handed to the caller; they keep no reference back
//! to the index or filesystem they came from.

use std::collections::BTreeMap;

/// Half-open byte-offset pair marking one match within a string.
pub type Span = (usize, usize);

/// One line's match spans for a content search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// Raw text of the matched line, without its newline terminator.
    pub line: String,
    /// Non-overlapping match spans, ascending by start offset.
    pub spans: Vec<Span>,
}

/// One file/path's aggregated search result.
///
/// Only ever constructed with at least one occurrence or path span; empty
/// results are never emitted by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputInfo {
    /// The file or directory the result refers to.
    pub path: String,
    /// 1-based line number to its occurrence. Empty for name-only searches.
    pub occurrences: BTreeMap<usize, Occurrence>,
    /// Match spans into `path` itself. Populated by name-matching searches.
    pub path_spans: Vec<Span>,
}
