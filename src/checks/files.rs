//! Required-file existence checks.
//!
//! A missing file is a normal, expected outcome recorded as a failing
//! check; the function itself never errors.

use std::path::Path;

use crate::config::FileEntry;
use crate::report::{CheckKind, CheckRecord};

/// Check a single (path, label) entry against the project root.
pub fn check_file(project_root: &Path, entry: &FileEntry) -> CheckRecord {
    if project_root.join(&entry.path).exists() {
        CheckRecord::passed(&entry.label, &entry.path, CheckKind::File)
    } else {
        CheckRecord::failed(&entry.label, &entry.path, CheckKind::File)
            .with_detail("NOT FOUND")
    }
}

/// Check every entry in display order.
pub fn check_files(project_root: &Path, entries: &[FileEntry]) -> Vec<CheckRecord> {
    entries
        .iter()
        .map(|entry| check_file(project_root, entry))
        .collect()
}
