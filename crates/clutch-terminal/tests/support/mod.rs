//! Shared harness for driving the shell without a terminal.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use clutch_app::AppState;
use clutch_terminal::tui::styles::Styles;
use clutch_terminal::tui::TuiApp;

/// Wraps [`TuiApp`] and feeds it synthetic key presses.
pub struct TestTui {
    pub app: TuiApp,
}

impl Default for TestTui {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTui {
    pub fn new() -> Self {
        Self {
            app: TuiApp::new(Styles::default()),
        }
    }

    pub fn send(&mut self, code: KeyCode) {
        self.app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    pub fn send_char(&mut self, c: char) {
        self.send(KeyCode::Char(c));
    }

    pub fn send_ctrl(&mut self, c: char) {
        self.app
            .handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    pub fn type_str(&mut self, s: &str) {
        for c in s.chars() {
            self.send_char(c);
        }
    }

    pub fn send_enter(&mut self) {
        self.send(KeyCode::Enter);
    }

    pub fn send_esc(&mut self) {
        self.send(KeyCode::Esc);
    }

    pub fn send_tab(&mut self) {
        self.send(KeyCode::Tab);
    }

    pub fn send_backtab(&mut self) {
        self.app
            .handle_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
    }

    /// Signs in through the gate with the login defaults.
    pub fn login(&mut self, username: &str) {
        self.type_str(username);
        self.send_enter();
        assert!(self.app.state().is_authenticated(), "login did not succeed");
    }

    pub fn state(&self) -> &AppState {
        self.app.state()
    }
}
