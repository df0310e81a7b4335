//! Single-line text input with a label, hint and optional masking.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::Component;
use crate::tui::styles::Styles;

/// Editable single-line field.
///
/// The cursor is tracked as a character index so multi-byte input behaves.
/// Keys the field does not consume (Enter, Esc, Tab, arrows up/down) fall
/// through to the owning screen.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    buffer: String,
    cursor: usize,
    focused: bool,
    label: String,
    hint: Option<String>,
    max_chars: Option<usize>,
    masked: bool,
}

impl TextField {
    /// Creates an empty field titled `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Grey placeholder shown while the field is empty.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Caps the number of characters the field accepts.
    pub fn with_max_chars(mut self, max: usize) -> Self {
        self.max_chars = Some(max);
        self
    }

    /// Renders the contents as dots, for passwords.
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    /// Current contents.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Takes the contents, leaving the field empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.buffer)
    }

    /// Replaces the contents and puts the cursor at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.cursor = self.buffer.chars().count();
    }

    /// Clears the contents.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_index(&self) -> usize {
        self.buffer
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor)
            .unwrap_or(self.buffer.len())
    }

    fn insert_char(&mut self, c: char) {
        if let Some(max) = self.max_chars {
            if self.char_count() >= max {
                return;
            }
        }
        let at = self.byte_index();
        self.buffer.insert(at, c);
        self.cursor += 1;
    }

    fn delete_back(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index();
            self.buffer.remove(at);
        }
    }

    fn delete_forward(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index();
            self.buffer.remove(at);
        }
    }

    fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn cursor_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    fn display_text(&self) -> String {
        if self.masked {
            "●".repeat(self.char_count())
        } else {
            self.buffer.clone()
        }
    }
}

impl Component for TextField {
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.focused || key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match key.code {
            KeyCode::Char(c) => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                self.delete_back();
                true
            }
            KeyCode::Delete => {
                self.delete_forward();
                true
            }
            KeyCode::Left => {
                self.cursor_left();
                true
            }
            KeyCode::Right => {
                self.cursor_right();
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.char_count();
                true
            }
            _ => false,
        }
    }

    fn render(&self, f: &mut Frame<'_>, area: Rect, styles: &Styles) {
        let border = if self.focused {
            styles.border_focused()
        } else {
            styles.border()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(self.label.clone());

        let inner_width = area.width.saturating_sub(2) as usize;
        // Horizontal scroll keeps the cursor in view on long input.
        let offset = if inner_width > 0 {
            self.cursor.saturating_sub(inner_width.saturating_sub(1))
        } else {
            self.cursor
        };

        let paragraph = if self.buffer.is_empty() {
            let hint = self.hint.as_deref().unwrap_or("");
            Paragraph::new(hint).style(styles.text_muted())
        } else {
            let shown: String = self
                .display_text()
                .chars()
                .skip(offset)
                .take(inner_width.max(1))
                .collect();
            Paragraph::new(shown).style(styles.text())
        };
        f.render_widget(paragraph.block(block), area);

        if self.focused {
            let x = area.x + 1 + (self.cursor - offset) as u16;
            f.set_cursor(x.min(area.x + area.width.saturating_sub(2)), area.y + 1);
        }
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}
