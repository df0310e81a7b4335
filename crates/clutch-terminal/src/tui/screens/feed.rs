//! Feed screen: scrollable posts plus an inline composer.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use clutch_app::{AppState, Intent, Screen};

use super::ScreenView;
use crate::tui::components::{Component, TextField};
use crate::tui::input::{InputMode, ScreenAction};
use crate::tui::styles::Styles;

const LINES_PER_POST: usize = 5;

/// Newest-first list of posts with like and compose shortcuts.
pub struct FeedScreen {
    selected: usize,
    composer_open: bool,
    composer: TextField,
}

impl Default for FeedScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedScreen {
    /// Creates the screen with the composer closed.
    pub fn new() -> Self {
        Self {
            selected: 0,
            composer_open: false,
            composer: TextField::new("New Post")
                .with_hint("What's happening with your ride?")
                .with_max_chars(280),
        }
    }

    fn open_composer(&mut self) {
        self.composer_open = true;
        self.composer.set_focused(true);
    }

    fn close_composer(&mut self) {
        self.composer_open = false;
        self.composer.clear();
        self.composer.set_focused(false);
    }

    fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

impl ScreenView for FeedScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> Option<ScreenAction> {
        if self.composer_open {
            return match key.code {
                KeyCode::Esc => {
                    self.close_composer();
                    None
                }
                KeyCode::Enter => {
                    if self.composer.text().trim().is_empty() {
                        return None;
                    }
                    let content = self.composer.take();
                    self.close_composer();
                    self.selected = 0;
                    Some(ScreenAction::Dispatch(Intent::AddPost { content }))
                }
                _ => {
                    self.composer.handle_key(key);
                    None
                }
            };
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.select_next(state.posts().len());
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.select_prev();
                None
            }
            KeyCode::Char('n') => {
                self.open_composer();
                None
            }
            KeyCode::Char('l') | KeyCode::Enter => {
                let id = state.posts().get(self.selected)?.id;
                Some(ScreenAction::Dispatch(Intent::LikePost { id }))
            }
            KeyCode::Char('b') => Some(ScreenAction::Navigate(Screen::Notifications)),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame<'_>, area: Rect, state: &AppState, styles: &Styles) {
        let (list_area, composer_area) = if self.composer_open {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(3)])
                .split(area);
            (chunks[0], Some(chunks[1]))
        } else {
            (area, None)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(styles.border())
            .title(" Feed ");
        let inner = block.inner(list_area);
        f.render_widget(block, list_area);

        let mut lines: Vec<Line> = Vec::with_capacity(state.posts().len() * LINES_PER_POST);
        for (i, post) in state.posts().iter().enumerate() {
            let author_style = if i == self.selected {
                styles.selected()
            } else {
                styles.text_highlight()
            };
            let marker = if i == self.selected { "▶ " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(format!("{marker}{}", post.author), author_style),
            ]));
            lines.push(Line::styled(format!("  {}", post.content), styles.text()));
            lines.push(Line::styled(format!("  {}", post.image), styles.text_muted()));
            lines.push(Line::styled(
                format!("  ♥ {}  💬 {}", post.likes, post.comments),
                styles.text_accent(),
            ));
            lines.push(Line::raw(""));
        }

        let visible = inner.height as usize;
        let total = lines.len();
        let scroll = if total > visible {
            (self.selected * LINES_PER_POST).min(total - visible)
        } else {
            0
        };
        f.render_widget(
            Paragraph::new(lines).scroll((scroll as u16, 0)),
            inner,
        );

        if let Some(composer_area) = composer_area {
            self.composer.render(f, composer_area, styles);
        }
    }

    fn on_enter(&mut self, state: &AppState) {
        let len = state.posts().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    fn input_mode(&self) -> InputMode {
        if self.composer_open {
            InputMode::Editing
        } else {
            InputMode::Normal
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clutch_app::{AuthMode, PostId};
    use crossterm::event::KeyModifiers;

    use super::*;

    fn signed_in() -> AppState {
        let mut state = AppState::new();
        state
            .authenticate("DriftQueen", "", "", AuthMode::Login)
            .unwrap();
        state
    }

    fn press(screen: &mut FeedScreen, state: &AppState, code: KeyCode) -> Option<ScreenAction> {
        screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE), state)
    }

    fn type_str(screen: &mut FeedScreen, state: &AppState, s: &str) {
        for c in s.chars() {
            press(screen, state, KeyCode::Char(c));
        }
    }

    #[test]
    fn selection_moves_and_stays_in_bounds() {
        let state = signed_in();
        let mut screen = FeedScreen::new();

        press(&mut screen, &state, KeyCode::Char('j'));
        press(&mut screen, &state, KeyCode::Char('j'));
        press(&mut screen, &state, KeyCode::Char('j'));
        assert_eq!(screen.selected, 2);

        press(&mut screen, &state, KeyCode::Char('k'));
        press(&mut screen, &state, KeyCode::Char('k'));
        press(&mut screen, &state, KeyCode::Char('k'));
        assert_eq!(screen.selected, 0);
    }

    #[test]
    fn liking_targets_the_selected_post() {
        let state = signed_in();
        let mut screen = FeedScreen::new();

        press(&mut screen, &state, KeyCode::Char('j'));
        let action = press(&mut screen, &state, KeyCode::Char('l'));
        assert_eq!(
            action,
            Some(ScreenAction::Dispatch(Intent::LikePost {
                id: PostId::new(2),
            }))
        );
    }

    #[test]
    fn liking_an_empty_feed_does_nothing() {
        let state = AppState::new();
        let mut screen = FeedScreen::new();
        assert_eq!(press(&mut screen, &state, KeyCode::Char('l')), None);
    }

    #[test]
    fn composer_submits_trimmed_content() {
        let state = signed_in();
        let mut screen = FeedScreen::new();

        press(&mut screen, &state, KeyCode::Char('n'));
        assert_eq!(screen.input_mode(), InputMode::Editing);

        type_str(&mut screen, &state, "Fresh coat of wax.");
        let action = press(&mut screen, &state, KeyCode::Enter);
        assert_eq!(
            action,
            Some(ScreenAction::Dispatch(Intent::AddPost {
                content: "Fresh coat of wax.".into(),
            }))
        );
        assert_eq!(screen.input_mode(), InputMode::Normal);
        assert_eq!(screen.selected, 0);
    }

    #[test]
    fn empty_composer_refuses_to_submit() {
        let state = signed_in();
        let mut screen = FeedScreen::new();

        press(&mut screen, &state, KeyCode::Char('n'));
        type_str(&mut screen, &state, "   ");
        assert_eq!(press(&mut screen, &state, KeyCode::Enter), None);
        assert_eq!(screen.input_mode(), InputMode::Editing);
    }

    #[test]
    fn escape_discards_the_draft() {
        let state = signed_in();
        let mut screen = FeedScreen::new();

        press(&mut screen, &state, KeyCode::Char('n'));
        type_str(&mut screen, &state, "half a thought");
        press(&mut screen, &state, KeyCode::Esc);
        assert_eq!(screen.input_mode(), InputMode::Normal);

        // Reopening shows an empty composer.
        press(&mut screen, &state, KeyCode::Char('n'));
        assert_eq!(screen.composer.text(), "");
    }

    #[test]
    fn b_jumps_to_notifications() {
        let state = signed_in();
        let mut screen = FeedScreen::new();
        assert_eq!(
            press(&mut screen, &state, KeyCode::Char('b')),
            Some(ScreenAction::Navigate(Screen::Notifications))
        );
    }

    #[test]
    fn entering_clamps_a_stale_selection() {
        let state = signed_in();
        let mut screen = FeedScreen::new();
        screen.selected = 99;
        screen.on_enter(&state);
        assert_eq!(screen.selected, 2);
    }
}
