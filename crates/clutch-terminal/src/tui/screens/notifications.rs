//! Notifications screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use clutch_app::{AppState, NotificationKind, Screen};

use super::ScreenView;
use crate::tui::input::ScreenAction;
use crate::tui::styles::Styles;

fn kind_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Like => "❤️",
        NotificationKind::Event => "📅",
        NotificationKind::Follow => "👥",
    }
}

/// Read-only list of notifications; Esc returns to the feed.
#[derive(Debug, Default)]
pub struct NotificationsScreen {
    selected: usize,
}

impl NotificationsScreen {
    /// Creates the screen.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScreenView for NotificationsScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let len = state.notifications().len();
                if len > 0 && self.selected + 1 < len {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Esc | KeyCode::Char('b') => Some(ScreenAction::Navigate(Screen::Feed)),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame<'_>, area: Rect, state: &AppState, styles: &Styles) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(styles.border())
            .title(" Notifications ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut lines: Vec<Line> = Vec::new();
        for (i, notification) in state.notifications().iter().enumerate() {
            let style = if i == self.selected {
                styles.selected()
            } else {
                styles.text()
            };
            let marker = if i == self.selected { "▶ " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{marker}{} {}", kind_icon(notification.kind), notification.text),
                    style,
                ),
                Span::styled(format!("  {}", notification.time), styles.text_muted()),
            ]));
            lines.push(Line::raw(""));
        }
        lines.push(Line::styled("Esc: back to feed", styles.text_muted()));

        f.render_widget(Paragraph::new(lines), inner);
    }

    fn on_enter(&mut self, state: &AppState) {
        let len = state.notifications().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}
