//! # fdx - file & directory index and search
//!
//! fdx builds a searchable index of a directory tree's file paths and text
//! contents, then answers regex queries against either the live filesystem
//! or a previously persisted index.
//!
//! ## Architecture
//!
//! - [`index`] - In-memory index, its builder and JSON persistence
//! - [`query`] - The search engine and its index/filesystem sources
//! - [`output`] - Highlighted result rendering
//! - [`utils`] - Directory traversal and regex-literal escaping
//! - [`error`] - The typed error taxonomy shared by all of the above
//!
//! ## Quick Start
//!
//! ```no_run
//! use fdx::index::build_index;
//! use fdx::query::search_content;
//! use std::path::Path;
//!
//! let index = build_index(Path::new("."))?;
//! for result in search_content("needle", &index)? {
//!     println!("{}: {} matching lines", result.path, result.occurrences.len());
//! }
//! # Ok::<(), fdx::IndexerError>(())
//! ```

pub mod error;
pub mod index;
pub mod output;
pub mod query;
pub mod utils;

pub use error::IndexerError;
pub use index::FileIndex;
