//! Icon theme lookup.
//!
//! Resolution walks four tiers, each across every data directory before the
//! next one starts:
//!
//! 1. the requested theme under `<dir>/icons/<theme>`
//! 2. the `hicolor` fallback theme
//! 3. the flat `<dir>/pixmaps` directory
//! 4. every theme installed under `<dir>/icons`, in listing order
//!
//! The first existing file wins.

use crate::paths::{is_hidden, list_dir};
use log::debug;
use std::path::{Path, PathBuf};

/// Supported icon file extensions, in priority order.
pub const ICON_EXTENSIONS: [&str; 2] = ["png", "svg"];

/// Theme every icon theme ultimately falls back to.
pub const FALLBACK_THEME: &str = "hicolor";

/// Icon contexts searched when no sized or scalable app icon exists.
pub const ICON_CATEGORIES: [&str; 7] = [
    "apps",
    "actions",
    "devices",
    "emblems",
    "mimetypes",
    "places",
    "status",
];

/// Parameters shared by every icon resolution in a single lookup.
#[derive(Clone, Debug)]
pub struct IconSearch {
    pub data_dirs: Vec<PathBuf>,
    pub theme: String,
    pub size: u32,
}

impl IconSearch {
    pub fn new(data_dirs: Vec<PathBuf>, theme: &str, size: u32) -> Self {
        Self {
            data_dirs,
            theme: theme.to_string(),
            size,
        }
    }

    /// Resolve an icon name to a file using this search's theme and size.
    pub fn resolve(&self, icon_name: &str) -> Option<PathBuf> {
        lookup_icon_path(&self.data_dirs, &self.theme, self.size, icon_name)
    }
}

/// Find the image file for `icon_name` in `theme` at `size` pixels.
pub fn lookup_icon_path(
    data_dirs: &[PathBuf],
    theme: &str,
    size: u32,
    icon_name: &str,
) -> Option<PathBuf> {
    let size = size.to_string();
    // Absolute names must not replace the directory they are joined onto
    let icon_name = icon_name.trim_start_matches('/');
    let theme = theme.trim_start_matches('/');

    // e.g. /usr/share/icons/Adwaita
    let found = data_dirs
        .iter()
        .find_map(|dir| {
            lookup_icon_path_in_theme(&dir.join("icons").join(theme), &size, icon_name)
        })
        .or_else(|| {
            data_dirs.iter().find_map(|dir| {
                lookup_icon_path_in_theme(
                    &dir.join("icons").join(FALLBACK_THEME),
                    &size,
                    icon_name,
                )
            })
        })
        .or_else(|| {
            data_dirs
                .iter()
                .find_map(|dir| lookup_icon_in_dir(&dir.join("pixmaps"), icon_name))
        })
        .or_else(|| {
            data_dirs.iter().find_map(|dir| {
                lookup_icon_path_in_any_theme(&dir.join("icons"), &size, icon_name)
            })
        });

    match &found {
        Some(path) => debug!("Resolved icon {} to {}", icon_name, path.display()),
        None => debug!("No icon found for {} in theme {}", icon_name, theme),
    }

    found
}

/// Search a single theme root for `icon_name`.
fn lookup_icon_path_in_theme(theme_dir: &Path, size: &str, icon_name: &str) -> Option<PathBuf> {
    if !theme_dir.exists() {
        return None;
    }

    let sized = format!("{size}x{size}");
    for ext in ICON_EXTENSIONS {
        let file = format!("{icon_name}.{ext}");
        let candidates = [
            // <theme>/32/apps/xterm.png
            theme_dir.join(size).join("apps").join(&file),
            // <theme>/32x32/apps/xterm.png
            theme_dir.join(&sized).join("apps").join(&file),
            // <theme>/apps/32/xterm.png
            theme_dir.join("apps").join(size).join(&file),
            // <theme>/apps/32x32/xterm.png
            theme_dir.join("apps").join(&sized).join(&file),
            // Requested size is missing, try scalable
            theme_dir.join("scalable").join("apps").join(&file),
            theme_dir.join("apps").join("scalable").join(&file),
        ];

        if let Some(found) = candidates.into_iter().find(|p| p.is_file()) {
            return Some(found);
        }
    }

    ICON_CATEGORIES
        .iter()
        .find_map(|category| lookup_any_size_in_theme_dir(theme_dir, category, icon_name))
}

/// Look for `icon_name` at any size within one category of a theme.
///
/// Size directories are walked in reverse file-name order so that larger
/// sizes come first. Pure string order puts `48` ahead of `128`; that order
/// is kept as is.
fn lookup_any_size_in_theme_dir(
    theme_dir: &Path,
    category: &str,
    icon_name: &str,
) -> Option<PathBuf> {
    // <theme>/<size>/<category>/xterm.png
    let size_dirs = list_dir(theme_dir)?;
    if let Some(found) = find_in_size_dirs(&size_dirs, Some(category), icon_name) {
        return Some(found);
    }

    // <theme>/<category>/<size>/xterm.png
    let size_dirs = list_dir(&theme_dir.join(category))?;
    find_in_size_dirs(&size_dirs, None, icon_name)
}

fn find_in_size_dirs(
    entries: &[walkdir::DirEntry],
    category: Option<&str>,
    icon_name: &str,
) -> Option<PathBuf> {
    entries
        .iter()
        .rev()
        .filter(|e| !is_hidden(e) && e.file_type().is_dir())
        .find_map(|e| {
            let dir = match category {
                Some(category) => e.path().join(category),
                None => e.path().to_path_buf(),
            };
            lookup_icon_in_dir(&dir, icon_name)
        })
}

/// Try `<dir>/<icon_name>.<ext>` for each extension.
fn lookup_icon_in_dir(dir: &Path, icon_name: &str) -> Option<PathBuf> {
    ICON_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{icon_name}.{ext}")))
        .find(|p| p.is_file())
}

/// Last resort: every theme under an `icons` directory.
fn lookup_icon_path_in_any_theme(
    icons_dir: &Path,
    size: &str,
    icon_name: &str,
) -> Option<PathBuf> {
    list_dir(icons_dir)?
        .iter()
        .filter(|e| !is_hidden(e) && e.file_type().is_dir())
        .find_map(|e| lookup_icon_path_in_theme(e.path(), size, icon_name))
}
