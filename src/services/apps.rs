//! App catalog and icon service shim.
//!
//! Wraps the fdo-apps crate with the theme, size and data directories chosen
//! on the command line.

use fdo_apps::{AppInfo, FdoIconProvider, IconProvider};
use fdo_wm::WindowIdentity;
use log::debug;
use std::path::PathBuf;

pub struct AppService {
    provider: FdoIconProvider,
    theme: String,
    size: u32,
}

impl AppService {
    /// An empty `data_dirs` means the environment decides.
    pub fn new(theme: &str, size: u32, data_dirs: Vec<PathBuf>) -> Self {
        let provider = if data_dirs.is_empty() {
            FdoIconProvider::new()
        } else {
            FdoIconProvider::with_data_dirs(data_dirs)
        };

        Self {
            provider,
            theme: theme.to_string(),
            size,
        }
    }

    pub fn data_dirs(&self) -> Vec<PathBuf> {
        self.provider.data_dirs()
    }

    /// Get icon path for an icon name.
    pub fn icon(&self, name: &str) -> Option<PathBuf> {
        self.provider.lookup_icon_path(&self.theme, self.size, name)
    }

    /// Get app by desktop file name, display name or command.
    pub fn app(&self, name: &str) -> Option<AppInfo> {
        self.provider
            .find_icon_from_app_name(&self.theme, self.size, name)
    }

    pub fn search(&self, fragment: &str) -> Vec<AppInfo> {
        let apps = self
            .provider
            .find_icons_matching_app_name(&self.theme, self.size, fragment);
        debug!("{} applications match {}", apps.len(), fragment);
        apps
    }

    pub fn window(&self, win: &dyn WindowIdentity) -> Option<AppInfo> {
        self.provider
            .find_icon_from_win_info(&self.theme, self.size, win)
    }
}
