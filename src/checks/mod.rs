//! Check implementations.
//!
//! Each check classifies an observation into a [`CheckRecord`](crate::report::CheckRecord);
//! none of them print or propagate errors. Presentation lives in the CLI
//! commands, aggregation in [`report`](crate::report).

pub mod files;
pub mod runner;
pub mod smoke;
pub mod tools;

use std::fs;
use std::path::Path;

/// Create the configured directories, logging rather than failing.
///
/// Returns the directories that could not be created.
pub fn ensure_dirs(project_root: &Path, dirs: &[String]) -> Vec<String> {
    let mut failed = Vec::new();

    for dir in dirs {
        let path = project_root.join(dir);
        if let Err(e) = fs::create_dir_all(&path) {
            tracing::warn!("Could not create {}: {}", path.display(), e);
            failed.push(dir.clone());
        }
    }

    failed
}
