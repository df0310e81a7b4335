//! Input modes and the actions screens hand back to the shell.

use clutch_app::{Intent, Screen};

use crate::tui::styles::ToastLevel;

/// Whether keystrokes act as commands or as text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Keys drive navigation and shortcuts.
    #[default]
    Normal,
    /// Keys feed the focused text field.
    Editing,
}

impl InputMode {
    /// Indicator label for the navigation bar.
    pub const fn as_str(&self) -> &'static str {
        match self {
            InputMode::Normal => "NORMAL",
            InputMode::Editing => "EDIT",
        }
    }

    /// True when printable keys should reach a text field.
    pub const fn accepts_text(&self) -> bool {
        matches!(self, InputMode::Editing)
    }
}

/// What a screen wants the shell to do after handling a key.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenAction {
    /// Apply an intent to the session store.
    Dispatch(Intent),
    /// Jump to another screen.
    Navigate(Screen),
    /// Surface a transient message.
    Toast {
        /// Severity used for styling.
        level: ToastLevel,
        /// Text shown to the user.
        message: String,
    },
    /// Leave the interface.
    Quit,
}

impl ScreenAction {
    /// Convenience constructor for success toasts.
    pub fn success(message: impl Into<String>) -> Self {
        Self::Toast {
            level: ToastLevel::Success,
            message: message.into(),
        }
    }
}
