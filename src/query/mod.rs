pub mod engine;
pub mod source;
pub mod types;

pub use engine::{search_combined, search_content, search_names};
pub use source::{FilesystemSource, SearchSource};
pub use types::{Occurrence, OutputInfo, Span};
