use fdo_apps::AppInfo;

/// Human readable block for one application.
pub fn app_to_text(app: &AppInfo) -> String {
    let icon_path = app
        .icon_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "Name: {}\nExec: {}\nIcon: {}\nIcon path: {}",
        app.name(),
        app.exec(),
        app.icon_name(),
        icon_path
    )
}

pub fn apps_to_text(apps: &[AppInfo]) -> String {
    apps.iter()
        .map(app_to_text)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_app_to_text() {
        let app = AppInfo {
            name: "Foo".to_string(),
            icon_name: "foo-icon".to_string(),
            icon_path: Some(PathBuf::from("/usr/share/pixmaps/foo-icon.png")),
            exec: "/usr/bin/foo".to_string(),
        };

        assert_eq!(
            app_to_text(&app),
            concat!(
                "Name: Foo\nExec: /usr/bin/foo\nIcon: foo-icon\n",
                "Icon path: /usr/share/pixmaps/foo-icon.png"
            )
        );
    }

    #[test]
    fn test_unresolved_icon() {
        let app = AppInfo {
            name: "Bare".to_string(),
            ..Default::default()
        };
        assert!(app_to_text(&app).ends_with("Icon path: -"));
        assert_eq!(apps_to_text(&[app.clone(), app]).matches("Name: Bare").count(), 2);
    }
}
