//! fdo-apps: freedesktop.org application and icon resolver.
//!
//! Provides:
//! - Data directory discovery from `XDG_DATA_DIRS`
//! - Desktop entry parsing (`Name`, `Icon`, `Exec`)
//! - Icon lookup across the requested theme, hicolor, pixmaps and every installed theme
//! - Application lookup by name, command, partial name or window info
//!
//! Nothing is cached: every call reads the filesystem again.

mod catalog;
mod desktop_entry;
mod error;
mod icons;
mod paths;

pub use catalog::{FdoIconProvider, IconProvider};
pub use desktop_entry::{AppInfo, parse_desktop_file};
pub use error::FdoError;
pub use icons::{FALLBACK_THEME, ICON_CATEGORIES, ICON_EXTENSIONS, IconSearch, lookup_icon_path};
pub use paths::{FALLBACK_DATA_DIRS, data_directories, data_directories_from};

/// Convenience function to look up an application with data directories from the environment.
pub fn find_app(theme: &str, size: u32, name: &str) -> Option<AppInfo> {
    FdoIconProvider::new().find_icon_from_app_name(theme, size, name)
}

/// Convenience function to resolve an icon name with data directories from the environment.
pub fn find_icon(theme: &str, size: u32, icon_name: &str) -> Option<std::path::PathBuf> {
    FdoIconProvider::new().lookup_icon_path(theme, size, icon_name)
}
