//! Reusable widgets embedded in screens.

pub mod text_field;
pub mod toast;

pub use text_field::TextField;
pub use toast::{Toast, ToastId, ToastManager};

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::tui::styles::Styles;

/// A focusable widget embedded in a screen.
pub trait Component {
    /// Handles a key, returning true when it was consumed.
    fn handle_key(&mut self, key: KeyEvent) -> bool;

    /// Draws the component into `area`.
    fn render(&self, f: &mut Frame<'_>, area: Rect, styles: &Styles);

    /// Whether the component currently receives input.
    fn is_focused(&self) -> bool;

    /// Grants or removes focus.
    fn set_focused(&mut self, focused: bool);
}
