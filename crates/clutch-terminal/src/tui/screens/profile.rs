//! Profile screen: read view plus an inline editor.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use clutch_app::{AppState, Intent, DEFAULT_BIO};

use super::ScreenView;
use crate::tui::components::{Component, TextField};
use crate::tui::input::{InputMode, ScreenAction};
use crate::tui::styles::Styles;

/// The signed-in profile with an edit mode toggled by `e`.
pub struct ProfileScreen {
    editing: bool,
    username: TextField,
    car: TextField,
    bio: TextField,
    focus: usize,
}

impl Default for ProfileScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileScreen {
    /// Creates the screen in the read view.
    pub fn new() -> Self {
        Self {
            editing: false,
            username: TextField::new("Username"),
            car: TextField::new("Car"),
            bio: TextField::new("Bio")
                .with_hint("Tell us about yourself and your ride..."),
            focus: 0,
        }
    }

    fn start_editing(&mut self, state: &AppState) {
        let Some(user) = state.user() else { return };
        self.username.set_text(user.username.clone());
        self.car.set_text(user.car.clone());
        self.bio.set_text(user.bio.clone().unwrap_or_default());
        self.focus = 0;
        self.editing = true;
        self.sync_focus();
    }

    fn stop_editing(&mut self) {
        self.editing = false;
        self.username.clear();
        self.car.clear();
        self.bio.clear();
        self.sync_focus();
    }

    fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            0 => &mut self.username,
            1 => &mut self.car,
            _ => &mut self.bio,
        }
    }

    fn sync_focus(&mut self) {
        self.username.set_focused(false);
        self.car.set_focused(false);
        self.bio.set_focused(false);
        if self.editing {
            self.focused_field_mut().set_focused(true);
        }
    }

    fn submit(&mut self) -> ScreenAction {
        let action = ScreenAction::Dispatch(Intent::SaveProfile {
            username: self.username.text().to_string(),
            car: self.car.text().to_string(),
            bio: self.bio.text().to_string(),
        });
        self.stop_editing();
        action
    }
}

impl ScreenView for ProfileScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> Option<ScreenAction> {
        if self.editing {
            return match key.code {
                KeyCode::Esc => {
                    self.stop_editing();
                    None
                }
                KeyCode::Enter => Some(self.submit()),
                KeyCode::Tab | KeyCode::Down => {
                    self.focus = (self.focus + 1) % 3;
                    self.sync_focus();
                    None
                }
                KeyCode::BackTab | KeyCode::Up => {
                    self.focus = (self.focus + 2) % 3;
                    self.sync_focus();
                    None
                }
                _ => {
                    self.focused_field_mut().handle_key(key);
                    None
                }
            };
        }

        match key.code {
            KeyCode::Char('e') => {
                self.start_editing(state);
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame<'_>, area: Rect, state: &AppState, styles: &Styles) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(styles.border())
            .title(" Profile ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        if self.editing {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Length(1),
                    Constraint::Min(0),
                ])
                .split(inner);
            self.username.render(f, chunks[0], styles);
            self.car.render(f, chunks[1], styles);
            self.bio.render(f, chunks[2], styles);
            f.render_widget(
                Paragraph::new("Enter save | Tab next field | Esc cancel")
                    .style(styles.text_muted()),
                chunks[3],
            );
            return;
        }

        let Some(user) = state.user() else { return };
        let bio = user.bio.as_deref().unwrap_or(DEFAULT_BIO);
        let mut lines = vec![
            Line::styled(user.username.clone(), styles.text_highlight()),
        ];
        if !user.email.is_empty() {
            lines.push(Line::styled(user.email.clone(), styles.text_muted()));
        }
        lines.extend([
            Line::raw(""),
            Line::styled("Car Information", styles.text_highlight()),
            Line::styled(format!("  {}", user.car), styles.text()),
            Line::raw(""),
            Line::styled("Bio", styles.text_highlight()),
            Line::styled(format!("  {bio}"), styles.text()),
            Line::raw(""),
            Line::styled("e: edit profile", styles.text_muted()),
        ]);
        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }

    fn input_mode(&self) -> InputMode {
        if self.editing {
            InputMode::Editing
        } else {
            InputMode::Normal
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clutch_app::AuthMode;
    use crossterm::event::KeyModifiers;

    use super::*;

    fn signed_in() -> AppState {
        let mut state = AppState::new();
        state
            .authenticate("DriftQueen", "dq@example.com", "", AuthMode::Login)
            .unwrap();
        state
    }

    fn press(
        screen: &mut ProfileScreen,
        state: &AppState,
        code: KeyCode,
    ) -> Option<ScreenAction> {
        screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE), state)
    }

    fn type_str(screen: &mut ProfileScreen, state: &AppState, s: &str) {
        for c in s.chars() {
            press(screen, state, KeyCode::Char(c));
        }
    }

    #[test]
    fn editing_starts_prefilled() {
        let state = signed_in();
        let mut screen = ProfileScreen::new();

        press(&mut screen, &state, KeyCode::Char('e'));
        assert!(screen.editing);
        assert_eq!(screen.username.text(), "DriftQueen");
        assert_eq!(screen.car.text(), "Volvo V40");
        assert_eq!(screen.bio.text(), DEFAULT_BIO);
    }

    #[test]
    fn saving_dispatches_the_edited_fields() {
        let state = signed_in();
        let mut screen = ProfileScreen::new();

        press(&mut screen, &state, KeyCode::Char('e'));
        type_str(&mut screen, &state, "X");
        press(&mut screen, &state, KeyCode::Tab);
        type_str(&mut screen, &state, " GT");

        let action = press(&mut screen, &state, KeyCode::Enter);
        assert_eq!(
            action,
            Some(ScreenAction::Dispatch(Intent::SaveProfile {
                username: "DriftQueenX".into(),
                car: "Volvo V40 GT".into(),
                bio: DEFAULT_BIO.into(),
            }))
        );
        assert!(!screen.editing);
    }

    #[test]
    fn escape_discards_edits() {
        let state = signed_in();
        let mut screen = ProfileScreen::new();

        press(&mut screen, &state, KeyCode::Char('e'));
        type_str(&mut screen, &state, "garbage");
        assert_eq!(press(&mut screen, &state, KeyCode::Esc), None);
        assert!(!screen.editing);
        assert_eq!(screen.input_mode(), InputMode::Normal);
    }

    #[test]
    fn no_editor_without_a_session() {
        let state = AppState::new();
        let mut screen = ProfileScreen::new();
        press(&mut screen, &state, KeyCode::Char('e'));
        assert!(!screen.editing);
    }

    #[test]
    fn backtab_cycles_backwards() {
        let state = signed_in();
        let mut screen = ProfileScreen::new();

        press(&mut screen, &state, KeyCode::Char('e'));
        press(&mut screen, &state, KeyCode::BackTab);
        assert!(screen.bio.is_focused());
    }
}
