pub mod build;
pub mod store;
pub mod types;

pub use build::build_index;
pub use types::FileIndex;
