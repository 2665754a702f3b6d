//! Lookups that take their data directories from `XDG_DATA_DIRS`.
//!
//! Kept as the only test in this binary because it sets process environment.

use std::env;
use std::fs;

#[test]
fn test_convenience_lookups_read_xdg_data_dirs() {
    let tmp = tempfile::tempdir().unwrap();
    let d1 = tmp.path().join("d1");
    let d2 = tmp.path().join("d2");

    let icon = d1.join("icons/hicolor/scalable/apps/editor.svg");
    fs::create_dir_all(icon.parent().unwrap()).unwrap();
    fs::write(&icon, b"").unwrap();

    let desktop = d2.join("applications/editor.desktop");
    fs::create_dir_all(desktop.parent().unwrap()).unwrap();
    fs::write(&desktop, "[Desktop Entry]\nName=Editor\nIcon=editor\nExec=editor %F\n").unwrap();

    unsafe {
        env::set_var(
            "XDG_DATA_DIRS",
            format!("{}:{}", d1.display(), d2.display()),
        );
    }

    assert_eq!(fdo_apps::find_icon("Adwaita", 48, "editor"), Some(icon.clone()));

    let app = fdo_apps::find_app("Adwaita", 48, "editor").unwrap();
    assert_eq!(app.name(), "Editor");
    assert_eq!(app.exec(), "editor %F");
    assert_eq!(app.icon_path(), Some(icon.as_path()));

    assert!(fdo_apps::find_app("Adwaita", 48, "missing").is_none());

    unsafe {
        env::remove_var("XDG_DATA_DIRS");
    }
}
