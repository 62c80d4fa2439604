//! The search engine.
//!
//! Three entry points share one shape: escape the user's literal term,
//! compile a single [`Regex`] per term, then lazily scan the candidates a
//! [`SearchSource`] enumerates. Each produced [`OutputInfo`] carries every
//! non-overlapping match span so the formatter can highlight exactly what
//! matched. Results are pull-based; stopping early stops the scan.

use crate::error::IndexerError;
use crate::query::source::SearchSource;
use crate::query::types::{Occurrence, OutputInfo, Span};
use crate::utils::escape::{escape_literal, escape_literal_extended};
use regex::Regex;
use std::collections::BTreeMap;

fn compile(escaped: &str) -> Result<Regex, IndexerError> {
    Regex::new(escaped).map_err(|e| IndexerError::InvalidArguments(format!("bad search term: {e}")))
}

fn find_spans(pattern: &Regex, text: &str) -> Vec<Span> {
    pattern.find_iter(text).map(|m| (m.start(), m.end())).collect()
}

/// Scan lines in order, collecting an [`Occurrence`] per matching line
/// keyed by 1-based line number.
fn scan_lines(pattern: &Regex, lines: &[String]) -> BTreeMap<usize, Occurrence> {
    let mut occurrences = BTreeMap::new();
    for (i, line) in lines.iter().enumerate() {
        let spans = find_spans(pattern, line);
        if spans.is_empty() {
            continue;
        }
        occurrences.insert(
            i + 1,
            Occurrence {
                line: line.clone(),
                spans,
            },
        );
    }
    occurrences
}

/// Content search: one result per file with at least one matching line.
pub fn search_content<'a, S: SearchSource + ?Sized>(
    info: &str,
    source: &'a S,
) -> Result<impl Iterator<Item = OutputInfo> + 'a, IndexerError> {
    let pattern = compile(&escape_literal(info))?;
    Ok(source.content_paths().filter_map(move |path| {
        let lines = source.read_lines(&path)?;
        let occurrences = scan_lines(&pattern, &lines);
        if occurrences.is_empty() {
            return None;
        }
        Some(OutputInfo {
            path,
            occurrences,
            path_spans: Vec::new(),
        })
    }))
}

/// Name search: one result per path the pattern matches, spans into the
/// path string itself.
pub fn search_names<'a, S: SearchSource + ?Sized>(
    name: &str,
    source: &'a S,
) -> Result<impl Iterator<Item = OutputInfo> + 'a, IndexerError> {
    let pattern = compile(&escape_literal(name))?;
    Ok(source.paths().filter_map(move |path| {
        let path_spans = find_spans(&pattern, &path);
        if path_spans.is_empty() {
            return None;
        }
        Some(OutputInfo {
            path,
            occurrences: BTreeMap::new(),
            path_spans,
        })
    }))
}

/// Combined search: the name pattern filters candidates before any content
/// is read, then the info pattern scans the survivors' lines.
pub fn search_combined<'a, S: SearchSource + ?Sized>(
    info: &str,
    name: &str,
    source: &'a S,
) -> Result<impl Iterator<Item = OutputInfo> + 'a, IndexerError> {
    let name_pattern = compile(&escape_literal_extended(name))?;
    let info_pattern = compile(&escape_literal_extended(info))?;
    Ok(source.content_paths().filter_map(move |path| {
        let path_spans = find_spans(&name_pattern, &path);
        if path_spans.is_empty() {
            return None;
        }
        let lines = source.read_lines(&path)?;
        let occurrences = scan_lines(&info_pattern, &lines);
        if occurrences.is_empty() {
            return None;
        }
        Some(OutputInfo {
            path,
            occurrences,
            path_spans,
        })
    }))
}
