//! Shortcut registration and dispatch.

use crate::types::Shortcut;
use log::debug;
use std::sync::{Arc, RwLock};

/// Handler run when a shortcut is typed.
pub type ShortcutCallback = Arc<dyn Fn(&Shortcut) + Send + Sync>;

/// Anything that can list and dispatch desktop shortcuts.
pub trait ShortcutManager {
    fn shortcuts(&self) -> Vec<Shortcut>;

    fn typed_shortcut(&self, shortcut: &Shortcut);
}

/// Registry of shortcuts and their handlers.
#[derive(Default)]
pub struct ShortcutHandler {
    /// Registration order is kept so the latest handler wins on dispatch.
    entries: RwLock<Vec<(Shortcut, ShortcutCallback)>>,
}

impl ShortcutHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler, replacing any handler for the same shortcut.
    pub fn add_shortcut<F>(&self, shortcut: Shortcut, handler: F)
    where
        F: Fn(&Shortcut) + Send + Sync + 'static,
    {
        let Ok(mut entries) = self.entries.write() else {
            return;
        };

        entries.retain(|(existing, _)| *existing != shortcut);
        debug!(
            "Registered shortcut {} ({}+{})",
            shortcut.name, shortcut.modifier, shortcut.key_name
        );
        let handler: ShortcutCallback = Arc::new(handler);
        entries.push((shortcut, handler));
    }

    fn find_handler(&self, name: &str) -> Option<ShortcutCallback> {
        self.entries.read().ok().and_then(|entries| {
            entries
                .iter()
                .rev()
                .find(|(s, _)| s.shortcut_name() == name)
                .map(|(_, handler)| handler.clone())
        })
    }
}

impl ShortcutManager for ShortcutHandler {
    /// All registered shortcuts, in registration order.
    fn shortcuts(&self) -> Vec<Shortcut> {
        self.entries
            .read()
            .map(|entries| entries.iter().map(|(s, _)| s.clone()).collect())
            .unwrap_or_default()
    }

    /// Run the handler registered under the typed shortcut's name.
    fn typed_shortcut(&self, shortcut: &Shortcut) {
        // Lock is released before the handler runs so it may register more shortcuts
        match self.find_handler(shortcut.shortcut_name()) {
            Some(handler) => handler(shortcut),
            None => debug!("No handler for shortcut {}", shortcut.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::KeyModifier;
    use std::sync::Mutex;

    type Recorded = Box<dyn Fn(&Shortcut) + Send + Sync>;

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str) -> Recorded) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let log_clone = log.clone();
        let make = move |tag: &str| {
            let log = log_clone.clone();
            let tag = tag.to_string();
            Box::new(move |_: &Shortcut| log.lock().unwrap().push(tag.clone())) as Recorded
        };
        (log, make)
    }

    #[test]
    fn test_dispatch_by_name() {
        let (log, make) = recorder();
        let handler = ShortcutHandler::new();
        let launcher = Shortcut::new("launcher", "Space", KeyModifier::Super);
        handler.add_shortcut(launcher, make("launcher"));
        handler.add_shortcut(Shortcut::new("close", "F4", KeyModifier::Alt), make("close"));

        handler.typed_shortcut(&Shortcut::new("close", "F4", KeyModifier::Alt));
        assert_eq!(*log.lock().unwrap(), vec!["close"]);
    }

    #[test]
    fn test_last_registration_wins() {
        let (log, make) = recorder();
        let handler = ShortcutHandler::new();
        let shortcut = Shortcut::new("launcher", "Space", KeyModifier::Super);
        handler.add_shortcut(shortcut.clone(), make("first"));
        handler.add_shortcut(shortcut.clone(), make("second"));

        handler.typed_shortcut(&shortcut);
        assert_eq!(*log.lock().unwrap(), vec!["second"]);
        assert_eq!(handler.shortcuts(), vec![shortcut]);
    }

    #[test]
    fn test_same_name_different_keys() {
        let (log, make) = recorder();
        let handler = ShortcutHandler::new();
        let launcher = Shortcut::new("launcher", "Space", KeyModifier::Super);
        handler.add_shortcut(launcher.clone(), make("super"));
        handler.add_shortcut(Shortcut::new("launcher", "F2", KeyModifier::Alt), make("alt"));

        handler.typed_shortcut(&launcher);
        assert_eq!(*log.lock().unwrap(), vec!["alt"]);
        assert_eq!(handler.shortcuts().len(), 2);
    }

    #[test]
    fn test_unknown_shortcut_is_noop() {
        let (log, _) = recorder();
        let handler = ShortcutHandler::new();
        handler.typed_shortcut(&Shortcut::new("missing", "X", KeyModifier::None));
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_handler_can_register() {
        let handler = Arc::new(ShortcutHandler::new());
        let inner = handler.clone();
        handler.add_shortcut(Shortcut::new("setup", "S", KeyModifier::Control), move |_| {
            inner.add_shortcut(Shortcut::new("extra", "E", KeyModifier::Control), |_| {});
        });

        handler.typed_shortcut(&Shortcut::new("setup", "S", KeyModifier::Control));
        assert_eq!(handler.shortcuts().len(), 2);
    }
}
