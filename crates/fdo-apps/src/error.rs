//! Error types for fdo-apps

use std::path::PathBuf;

/// Failures while reading desktop entries.
///
/// Absence of an icon or application is never an error; lookups return
/// `None` for that.
#[derive(Debug, thiserror::Error)]
pub enum FdoError {
    #[error("could not read desktop entry {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
