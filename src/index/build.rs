//! Index construction from a live directory tree.

use crate::error::IndexerError;
use crate::index::types::FileIndex;
use crate::utils::walk::PathWalker;
use std::fs;
use std::path::Path;

/// Walk `root` and build a [`FileIndex`] of everything under it.
///
/// Paths that cannot be read as UTF-8 text (binary files, permission
/// failures, contentless directories) are recorded with the "no content"
/// marker rather than aborting the build.
pub fn build_index(root: &Path) -> Result<FileIndex, IndexerError> {
    let walker = PathWalker::new(root)?;
    let mut index = FileIndex::new();
    let mut unreadable = 0usize;

    #[cfg(feature = "progress")]
    let spinner = {
        let spinner = indicatif::ProgressBar::new_spinner();
        spinner.set_style(
            indicatif::ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message("Discovering paths...");
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        spinner
    };

    for path in walker {
        let lines: Vec<String> = match fs::read_to_string(&path) {
            Ok(text) => text.lines().map(str::to_owned).collect(),
            Err(_) => {
                if path.is_file() {
                    unreadable += 1;
                }
                Vec::new()
            }
        };
        index.insert(path.to_string_lossy(), lines);

        #[cfg(feature = "progress")]
        spinner.set_message(format!("Indexed {} paths", index.len()));
    }

    #[cfg(feature = "progress")]
    if unreadable > 0 {
        spinner.finish_with_message(format!(
            "Indexed {} paths ({unreadable} unreadable)",
            index.len()
        ));
    } else {
        spinner.finish_with_message(format!("Indexed {} paths", index.len()));
    }

    #[cfg(not(feature = "progress"))]
    let _ = unreadable;

    Ok(index)
}
