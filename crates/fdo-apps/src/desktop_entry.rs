//! Desktop entry parsing.

use crate::error::FdoError;
use crate::icons::IconSearch;
use log::warn;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

const DESKTOP_ENTRY_SECTION: &str = "[Desktop Entry]";

/// Application metadata parsed from a .desktop file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AppInfo {
    pub name: String,
    /// Raw `Icon=` value, either an absolute path or a theme icon name.
    pub icon_name: String,
    /// Resolved icon file, if any could be found.
    pub icon_path: Option<PathBuf>,
    pub exec: String,
}

impl AppInfo {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn icon_name(&self) -> &str {
        &self.icon_name
    }

    pub fn icon_path(&self) -> Option<&Path> {
        self.icon_path.as_deref()
    }

    pub fn exec(&self) -> &str {
        &self.exec
    }
}

/// Where the scanner is relative to the `[Desktop Entry]` group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    Outside,
    DesktopEntry,
}

impl Section {
    /// Any header line moves the cursor, only the exact entry header enters.
    fn next(self, line: &str) -> Self {
        if !line.starts_with('[') {
            return self;
        }
        if line == DESKTOP_ENTRY_SECTION {
            Section::DesktopEntry
        } else {
            Section::Outside
        }
    }
}

/// Parse a .desktop file, resolving its icon through `search`.
///
/// Returns `None` only when the file cannot be read.
pub fn parse_desktop_file(path: &Path, search: &IconSearch) -> Option<AppInfo> {
    match read_desktop_entry(path, search) {
        Ok(app) => Some(app),
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

pub(crate) fn read_desktop_entry(
    path: &Path,
    search: &IconSearch,
) -> Result<AppInfo, FdoError> {
    let io_err = |source| FdoError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let mut app = AppInfo::default();
    let mut section = Section::Outside;

    // Lossy decoding: a stray non UTF-8 byte should not hide the whole entry
    for line in BufReader::new(file).split(b'\n') {
        let line = line.map_err(io_err)?;
        let line = String::from_utf8_lossy(&line);
        let line = line.strip_suffix('\r').unwrap_or(&*line);
        section = section.next(line);
        if section != Section::DesktopEntry {
            continue;
        }

        if let Some(value) = line.strip_prefix("Name=") {
            app.name = value.to_string();
        } else if let Some(value) = line.strip_prefix("Icon=") {
            app.icon_name = value.to_string();
        } else if let Some(value) = line.strip_prefix("Exec=") {
            app.exec = value.to_string();
        }
    }

    if !app.icon_name.is_empty() {
        app.icon_path = resolve_icon_token(&app.icon_name, search);
        if app.icon_path.is_none() {
            warn!(
                "Could not find path for icon {} ({})",
                app.icon_name,
                path.display()
            );
        }
    }

    Ok(app)
}

/// Absolute paths to existing files are used verbatim, anything else is
/// looked up in the icon themes.
fn resolve_icon_token(token: &str, search: &IconSearch) -> Option<PathBuf> {
    let direct = Path::new(token);
    if direct.is_absolute() && direct.is_file() {
        return Some(direct.to_path_buf());
    }

    search.resolve(token)
}
