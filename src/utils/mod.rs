//! Shared utilities.
//!
//! - [`escape`] - Regex-metacharacter escaping for literal search terms
//! - [`walk`] - Deterministic depth-first directory traversal

pub mod escape;
pub mod walk;

pub use escape::*;
pub use walk::*;
