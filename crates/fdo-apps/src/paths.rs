//! Path helpers for XDG data directories.

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Roots used when `XDG_DATA_DIRS` yields nothing usable.
pub const FALLBACK_DATA_DIRS: [&str; 2] = ["/usr/local/share", "/usr/share"];

/// Get the ordered data directories from `XDG_DATA_DIRS`.
pub fn data_directories() -> Vec<PathBuf> {
    let value = std::env::var("XDG_DATA_DIRS").ok();
    data_directories_from(value.as_deref())
}

/// Split a colon separated directory list, falling back to the default pair.
///
/// Empty segments are dropped, so an unset or empty variable (or one made
/// only of separators) falls back instead of producing an empty root.
pub fn data_directories_from(value: Option<&str>) -> Vec<PathBuf> {
    let dirs: Vec<PathBuf> = value
        .unwrap_or_default()
        .split(':')
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .collect();

    if dirs.is_empty() {
        return FALLBACK_DATA_DIRS.iter().map(PathBuf::from).collect();
    }

    dirs
}

/// List the immediate children of `dir`, sorted by file name.
///
/// Returns `None` if `dir` is not a readable directory. Entries that fail to
/// stat are skipped. Links are not followed, so a symlinked directory does
/// not report as a directory.
pub(crate) fn list_dir(dir: &Path) -> Option<Vec<DirEntry>> {
    if !dir.is_dir() {
        return None;
    }

    let entries = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .collect();

    Some(entries)
}

/// Dot-prefixed entries are never searched.
pub(crate) fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}
