//! Core types for the window manager side of icon lookup.

/// Read-only identity of a live window, as reported by the window manager.
pub trait WindowIdentity {
    /// Window title.
    fn title(&self) -> String;

    /// Window class names, most specific first.
    fn class(&self) -> Vec<String>;

    /// Command line that started the window's process.
    fn command(&self) -> String;

    /// Icon name hint set by the application.
    fn icon_name(&self) -> String;
}

/// Information about a window.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WindowInfo {
    /// Window title.
    pub title: String,
    /// Class names (e.g. WM_CLASS instance and class).
    pub classes: Vec<String>,
    /// Launch command.
    pub command: String,
    /// Icon name hint.
    pub icon_name: String,
}

impl WindowIdentity for WindowInfo {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn class(&self) -> Vec<String> {
        self.classes.clone()
    }

    fn command(&self) -> String {
        self.command.clone()
    }

    fn icon_name(&self) -> String {
        self.icon_name.clone()
    }
}

/// Keyboard modifier held for a shortcut.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeyModifier {
    #[default]
    None,
    Shift,
    Control,
    Alt,
    Super,
}

impl std::fmt::Display for KeyModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyModifier::None => write!(f, ""),
            KeyModifier::Shift => write!(f, "Shift"),
            KeyModifier::Control => write!(f, "Control"),
            KeyModifier::Alt => write!(f, "Alt"),
            KeyModifier::Super => write!(f, "Super"),
        }
    }
}

/// A desktop keyboard shortcut.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Shortcut {
    /// Action name, used to match typed shortcuts.
    pub name: String,
    /// Key that triggers it (e.g. "Space").
    pub key_name: String,
    pub modifier: KeyModifier,
}

impl Shortcut {
    pub fn new(name: &str, key_name: &str, modifier: KeyModifier) -> Self {
        Self {
            name: name.to_string(),
            key_name: key_name.to_string(),
            modifier,
        }
    }

    /// Name used to match typed shortcuts against registered ones.
    pub fn shortcut_name(&self) -> &str {
        &self.name
    }
}
