//! fdo-wm: Window manager side of freedesktop.org app lookup
//!
//! Provides the window identity that application lookup consumes and a
//! registry for desktop keyboard shortcuts.

pub mod shortcuts;
pub mod types;

pub use shortcuts::{ShortcutCallback, ShortcutHandler, ShortcutManager};
pub use types::*;
