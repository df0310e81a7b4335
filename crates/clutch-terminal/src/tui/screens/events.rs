//! Events screen: upcoming meets plus a registration form.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use clutch_app::AppState;

use super::{centered_rect, ScreenView};
use crate::tui::components::{Component, TextField};
use crate::tui::input::{InputMode, ScreenAction};
use crate::tui::styles::Styles;

const LINES_PER_EVENT: usize = 5;

/// List of events with a modal signup form.
///
/// Registration is demo-only: submitting closes the form and shows a
/// success toast, nothing is recorded.
pub struct EventsScreen {
    selected: usize,
    form_open: bool,
    name: TextField,
    car: TextField,
    message: TextField,
    focus: usize,
}

impl Default for EventsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl EventsScreen {
    /// Creates the screen with the form closed.
    pub fn new() -> Self {
        Self {
            selected: 0,
            form_open: false,
            name: TextField::new("Your Name"),
            car: TextField::new("Your Car"),
            message: TextField::new("Message")
                .with_hint("Tell us about your ride or why you want to join!"),
            focus: 0,
        }
    }

    fn open_form(&mut self, state: &AppState) {
        let Some(user) = state.user() else { return };
        self.name.set_text(user.username.clone());
        self.car.set_text(user.car.clone());
        self.message.clear();
        self.focus = 0;
        self.form_open = true;
        self.sync_focus();
    }

    fn close_form(&mut self) {
        self.form_open = false;
        self.name.clear();
        self.car.clear();
        self.message.clear();
        self.sync_focus();
    }

    fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            0 => &mut self.name,
            1 => &mut self.car,
            _ => &mut self.message,
        }
    }

    fn sync_focus(&mut self) {
        self.name.set_focused(false);
        self.car.set_focused(false);
        self.message.set_focused(false);
        if self.form_open {
            self.focused_field_mut().set_focused(true);
        }
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

impl ScreenView for EventsScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> Option<ScreenAction> {
        if self.form_open {
            return match key.code {
                KeyCode::Esc => {
                    self.close_form();
                    None
                }
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
                KeyCode::Enter => {
                    let name = state.events().get(self.selected)?.name.clone();
                    self.close_form();
                    Some(ScreenAction::success(format!(
                        "Successfully registered for {name}!"
                    )))
                }
                _ => {
                    self.focused_field_mut().handle_key(key);
                    None
                }
            };
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.select_next(state.events().len());
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.select_prev();
                None
            }
            KeyCode::Enter => {
                if !state.events().is_empty() {
                    self.open_form(state);
                }
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame<'_>, area: Rect, state: &AppState, styles: &Styles) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(styles.border())
            .title(" Upcoming Events ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut lines: Vec<Line> = Vec::with_capacity(state.events().len() * LINES_PER_EVENT);
        for (i, event) in state.events().iter().enumerate() {
            let name_style = if i == self.selected {
                styles.selected()
            } else {
                styles.text_highlight()
            };
            let marker = if i == self.selected { "▶ " } else { "  " };
            lines.push(Line::styled(format!("{marker}{}", event.name), name_style));
            lines.push(Line::styled(
                format!("  📅 {}  📍 {}", event.date, event.location),
                styles.text(),
            ));
            lines.push(Line::styled(
                format!("  {} attending", event.attendees),
                styles.text_accent(),
            ));
            lines.push(Line::styled(
                format!("  {}", event.description),
                styles.text_muted(),
            ));
            lines.push(Line::raw(""));
        }
        lines.push(Line::styled(
            "Enter: Join Event",
            styles.text_muted(),
        ));

        let visible = inner.height as usize;
        let total = lines.len();
        let scroll = if total > visible {
            (self.selected * LINES_PER_EVENT).min(total - visible)
        } else {
            0
        };
        f.render_widget(Paragraph::new(lines).scroll((scroll as u16, 0)), inner);

        if self.form_open {
            self.render_form(f, area, state, styles);
        }
    }

    fn input_mode(&self) -> InputMode {
        if self.form_open {
            InputMode::Editing
        } else {
            InputMode::Normal
        }
    }

    fn on_enter(&mut self, state: &AppState) {
        let len = state.events().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

impl EventsScreen {
    fn render_form(&self, f: &mut Frame<'_>, area: Rect, state: &AppState, styles: &Styles) {
        let Some(event) = state.events().get(self.selected) else {
            return;
        };
        let card = centered_rect(60, 70, area);
        f.render_widget(Clear, card);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(styles.border_focused())
            .title(format!(" Register for {} ", event.name));
        let inner = block.inner(card);
        f.render_widget(block, card);

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

        self.name.render(f, chunks[0], styles);
        self.car.render(f, chunks[1], styles);
        self.message.render(f, chunks[2], styles);
        f.render_widget(
            Paragraph::new("Enter submit | Tab next field | Esc cancel")
                .style(styles.text_muted()),
            chunks[3],
        );
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clutch_app::AuthMode;
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::tui::styles::ToastLevel;

    fn signed_in() -> AppState {
        let mut state = AppState::new();
        state
            .authenticate("DriftQueen", "", "", AuthMode::Login)
            .unwrap();
        state
    }

    fn press(screen: &mut EventsScreen, state: &AppState, code: KeyCode) -> Option<ScreenAction> {
        screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE), state)
    }

    #[test]
    fn enter_opens_a_prefilled_form() {
        let state = signed_in();
        let mut screen = EventsScreen::new();

        press(&mut screen, &state, KeyCode::Enter);
        assert!(screen.form_open);
        assert_eq!(screen.name.text(), "DriftQueen");
        assert_eq!(screen.car.text(), "Volvo V40");
        assert_eq!(screen.message.text(), "");
    }

    #[test]
    fn submitting_toasts_and_closes() {
        let state = signed_in();
        let mut screen = EventsScreen::new();

        press(&mut screen, &state, KeyCode::Char('j'));
        press(&mut screen, &state, KeyCode::Enter);
        let action = press(&mut screen, &state, KeyCode::Enter);
        assert_eq!(
            action,
            Some(ScreenAction::Toast {
                level: ToastLevel::Success,
                message: "Successfully registered for Track Day at Silverstone!".into(),
            })
        );
        assert!(!screen.form_open);
    }

    #[test]
    fn escape_discards_the_form() {
        let state = signed_in();
        let mut screen = EventsScreen::new();

        press(&mut screen, &state, KeyCode::Enter);
        press(&mut screen, &state, KeyCode::Char('x'));
        press(&mut screen, &state, KeyCode::Esc);
        assert!(!screen.form_open);
        assert_eq!(screen.input_mode(), InputMode::Normal);
        assert_eq!(screen.name.text(), "");
    }

    #[test]
    fn tab_cycles_the_three_fields() {
        let state = signed_in();
        let mut screen = EventsScreen::new();

        press(&mut screen, &state, KeyCode::Enter);
        press(&mut screen, &state, KeyCode::Tab);
        assert!(screen.car.is_focused());
        press(&mut screen, &state, KeyCode::Tab);
        assert!(screen.message.is_focused());
        press(&mut screen, &state, KeyCode::Tab);
        assert!(screen.name.is_focused());
    }

    #[test]
    fn no_form_without_a_session() {
        let state = AppState::new();
        let mut screen = EventsScreen::new();
        press(&mut screen, &state, KeyCode::Enter);
        assert!(!screen.form_open);
    }

    #[test]
    fn selection_stays_within_the_list() {
        let state = signed_in();
        let mut screen = EventsScreen::new();
        for _ in 0..5 {
            press(&mut screen, &state, KeyCode::Char('j'));
        }
        assert_eq!(screen.selected, 2);
    }
}
