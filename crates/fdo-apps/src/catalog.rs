//! Application lookup over the XDG data directories.

use crate::desktop_entry::{AppInfo, parse_desktop_file};
use crate::icons::{IconSearch, lookup_icon_path};
use crate::paths::{data_directories, is_hidden, list_dir};
use fdo_wm::WindowIdentity;
use log::debug;
use std::path::{Path, PathBuf};

/// Finds applications and their icons for a desktop.
pub trait IconProvider {
    /// Look up an application by desktop file name, display name or command.
    fn find_icon_from_app_name(&self, theme: &str, size: u32, app_name: &str) -> Option<AppInfo>;

    /// Every application whose name or command contains `app_name`, ignoring case.
    fn find_icons_matching_app_name(&self, theme: &str, size: u32, app_name: &str) -> Vec<AppInfo>;

    /// Look up the application behind a window.
    fn find_icon_from_win_info(
        &self,
        theme: &str,
        size: u32,
        win: &dyn WindowIdentity,
    ) -> Option<AppInfo>;
}

/// freedesktop.org backed [`IconProvider`].
///
/// Data directories are read from `XDG_DATA_DIRS` at the start of every
/// lookup unless pinned with [`FdoIconProvider::with_data_dirs`].
#[derive(Clone, Debug, Default)]
pub struct FdoIconProvider {
    data_dirs: Option<Vec<PathBuf>>,
}

impl FdoIconProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed list of data directories instead of the environment.
    pub fn with_data_dirs(data_dirs: Vec<PathBuf>) -> Self {
        Self {
            data_dirs: Some(data_dirs),
        }
    }

    /// Data directories for one lookup, in priority order.
    pub fn data_dirs(&self) -> Vec<PathBuf> {
        match &self.data_dirs {
            Some(dirs) => dirs.clone(),
            None => data_directories(),
        }
    }

    /// Resolve an icon name without going through a desktop entry.
    pub fn lookup_icon_path(&self, theme: &str, size: u32, icon_name: &str) -> Option<PathBuf> {
        lookup_icon_path(&self.data_dirs(), theme, size, icon_name)
    }

    fn search(&self, theme: &str, size: u32) -> IconSearch {
        IconSearch::new(self.data_dirs(), theme, size)
    }

    /// `applications/<name>.desktop` first, then entry contents.
    fn lookup_application(search: &IconSearch, app_name: &str) -> Option<AppInfo> {
        if app_name.is_empty() {
            return None;
        }

        // Names such as commands may be absolute, keep them under applications/
        let file_name = format!("{}.desktop", app_name.trim_start_matches('/'));
        let by_file = search
            .data_dirs
            .iter()
            .map(|dir| dir.join("applications").join(&file_name))
            .find(|path| path.exists());
        if let Some(path) = by_file {
            debug!("Found {} at {}", app_name, path.display());
            return parse_desktop_file(&path, search);
        }

        Self::lookup_application_by_metadata(search, app_name)
    }

    /// First entry whose name or command equals `app_name` exactly.
    fn lookup_application_by_metadata(search: &IconSearch, app_name: &str) -> Option<AppInfo> {
        search
            .data_dirs
            .iter()
            .flat_map(|dir| desktop_files(dir))
            .filter_map(|path| parse_desktop_file(&path, search))
            .find(|app| app.name == app_name || app.exec == app_name)
    }
}

impl IconProvider for FdoIconProvider {
    fn find_icon_from_app_name(&self, theme: &str, size: u32, app_name: &str) -> Option<AppInfo> {
        Self::lookup_application(&self.search(theme, size), app_name)
    }

    fn find_icons_matching_app_name(&self, theme: &str, size: u32, app_name: &str) -> Vec<AppInfo> {
        let search = self.search(theme, size);
        let needle = app_name.to_lowercase();

        search
            .data_dirs
            .iter()
            .flat_map(|dir| desktop_files(dir))
            .filter_map(|path| parse_desktop_file(&path, &search))
            .filter(|app| {
                app.name.to_lowercase().contains(&needle)
                    || app.exec.to_lowercase().contains(&needle)
            })
            .collect()
    }

    fn find_icon_from_win_info(
        &self,
        theme: &str,
        size: u32,
        win: &dyn WindowIdentity,
    ) -> Option<AppInfo> {
        let search = self.search(theme, size);

        Self::lookup_application(&search, &win.title())
            .or_else(|| {
                win.class()
                    .iter()
                    .find_map(|class| Self::lookup_application(&search, class))
            })
            .or_else(|| Self::lookup_application(&search, &win.command()))
            .or_else(|| Self::lookup_application(&search, &win.icon_name()))
    }
}

/// Non-hidden files directly under `<dir>/applications`, in listing order.
fn desktop_files(data_dir: &Path) -> Vec<PathBuf> {
    list_dir(&data_dir.join("applications"))
        .unwrap_or_default()
        .into_iter()
        .filter(|e| !is_hidden(e) && !e.file_type().is_dir())
        .map(|e| e.into_path())
        .collect()
}
