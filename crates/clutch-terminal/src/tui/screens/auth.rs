//! Sign-in gate shown until a profile exists.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use clutch_app::{AppState, AuthMode, Intent};

use super::{centered_rect, ScreenView};
use crate::tui::components::{Component, TextField};
use crate::tui::input::{InputMode, ScreenAction};
use crate::tui::styles::Styles;

/// Login/register form rendered in a centered card.
///
/// Submitting always dispatches [`Intent::Authenticate`]; the store rejects
/// blank usernames and the shell surfaces that as a toast.
pub struct AuthScreen {
    mode: AuthMode,
    username: TextField,
    email: TextField,
    password: TextField,
    car: TextField,
    focus: usize,
}

impl Default for AuthScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthScreen {
    /// Creates the form in login mode with the username focused.
    pub fn new() -> Self {
        let mut screen = Self {
            mode: AuthMode::Login,
            username: TextField::new("Username").with_hint("Username"),
            email: TextField::new("Email").with_hint("Email"),
            password: TextField::new("Password").with_hint("Password").masked(),
            car: TextField::new("Car")
                .with_hint("Your Car Model (e.g., Honda Civic)"),
            focus: 0,
        };
        screen.sync_focus();
        screen
    }

    /// The path the form currently submits through.
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    fn field_count(&self) -> usize {
        match self.mode {
            AuthMode::Login => 2,
            AuthMode::Register => 4,
        }
    }

    fn focused_field_mut(&mut self) -> &mut TextField {
        match (self.mode, self.focus) {
            (AuthMode::Login, 0) => &mut self.username,
            (AuthMode::Login, _) => &mut self.password,
            (AuthMode::Register, 0) => &mut self.username,
            (AuthMode::Register, 1) => &mut self.email,
            (AuthMode::Register, 2) => &mut self.password,
            (AuthMode::Register, _) => &mut self.car,
        }
    }

    fn sync_focus(&mut self) {
        self.username.set_focused(false);
        self.email.set_focused(false);
        self.password.set_focused(false);
        self.car.set_focused(false);
        self.focused_field_mut().set_focused(true);
    }

    fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.field_count();
        self.sync_focus();
    }

    fn focus_prev(&mut self) {
        let count = self.field_count();
        self.focus = (self.focus + count - 1) % count;
        self.sync_focus();
    }

    fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
        self.focus = 0;
        self.sync_focus();
    }

    fn submit(&mut self) -> ScreenAction {
        ScreenAction::Dispatch(Intent::Authenticate {
            username: self.username.text().to_string(),
            email: self.email.text().to_string(),
            password: self.password.take(),
            car: self.car.text().to_string(),
            mode: self.mode,
        })
    }
}

impl ScreenView for AuthScreen {
    fn handle_key(&mut self, key: KeyEvent, _state: &AppState) -> Option<ScreenAction> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('t') = key.code {
                self.toggle_mode();
            }
            return None;
        }
        match key.code {
            KeyCode::Enter => Some(self.submit()),
            KeyCode::Esc => Some(ScreenAction::Quit),
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev();
                None
            }
            _ => {
                self.focused_field_mut().handle_key(key);
                None
            }
        }
    }

    fn render(&self, f: &mut Frame<'_>, area: Rect, _state: &AppState, styles: &Styles) {
        let card = centered_rect(60, 80, area);
        f.render_widget(Clear, card);

        let (title, toggle_hint) = match self.mode {
            AuthMode::Login => (" Sign In ", "Don't have an account? Ctrl+T to register"),
            AuthMode::Register => (" Register ", "Already have an account? Ctrl+T to log in"),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(styles.border_focused())
            .title(title);
        let inner = block.inner(card);
        f.render_widget(block, card);

        let mut constraints = vec![
            Constraint::Length(1), // brand
            Constraint::Length(1), // tagline
            Constraint::Length(1),
            Constraint::Length(3), // username
        ];
        if self.mode == AuthMode::Register {
            constraints.push(Constraint::Length(3)); // email
        }
        constraints.push(Constraint::Length(3)); // password
        if self.mode == AuthMode::Register {
            constraints.push(Constraint::Length(3)); // car
        }
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Length(2)); // hints
        constraints.push(Constraint::Min(0));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        f.render_widget(
            Paragraph::new("CLUTCH CLUB")
                .style(styles.title())
                .alignment(Alignment::Center),
            chunks[0],
        );
        f.render_widget(
            Paragraph::new("Car Enthusiast Community")
                .style(styles.text_muted())
                .alignment(Alignment::Center),
            chunks[1],
        );

        let mut idx = 3;
        self.username.render(f, chunks[idx], styles);
        idx += 1;
        if self.mode == AuthMode::Register {
            self.email.render(f, chunks[idx], styles);
            idx += 1;
        }
        self.password.render(f, chunks[idx], styles);
        idx += 1;
        if self.mode == AuthMode::Register {
            self.car.render(f, chunks[idx], styles);
            idx += 1;
        }
        idx += 1;

        let hints = vec![
            Line::styled("Enter submit | Tab next field | Esc quit", styles.text_muted()),
            Line::styled(toggle_hint, styles.text_muted()),
        ];
        f.render_widget(
            Paragraph::new(hints).alignment(Alignment::Center),
            chunks[idx],
        );
    }

    fn input_mode(&self) -> InputMode {
        InputMode::Editing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(screen: &mut AuthScreen, code: KeyCode) -> Option<ScreenAction> {
        screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE), &AppState::new())
    }

    fn type_str(screen: &mut AuthScreen, s: &str) {
        for c in s.chars() {
            press(screen, KeyCode::Char(c));
        }
    }

    fn ctrl_t(screen: &mut AuthScreen) {
        screen.handle_key(
            KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL),
            &AppState::new(),
        );
    }

    #[test]
    fn login_submits_username_and_password() {
        let mut screen = AuthScreen::new();
        type_str(&mut screen, "DriftQueen");
        press(&mut screen, KeyCode::Tab);
        type_str(&mut screen, "hunter2");

        let action = press(&mut screen, KeyCode::Enter);
        assert_eq!(
            action,
            Some(ScreenAction::Dispatch(Intent::Authenticate {
                username: "DriftQueen".into(),
                email: String::new(),
                password: "hunter2".into(),
                car: String::new(),
                mode: AuthMode::Login,
            }))
        );
    }

    #[test]
    fn register_collects_email_and_car() {
        let mut screen = AuthScreen::new();
        ctrl_t(&mut screen);
        assert_eq!(screen.mode(), AuthMode::Register);

        type_str(&mut screen, "Apex");
        press(&mut screen, KeyCode::Tab);
        type_str(&mut screen, "apex@example.com");
        press(&mut screen, KeyCode::Tab);
        type_str(&mut screen, "secret");
        press(&mut screen, KeyCode::Tab);
        type_str(&mut screen, "Mazda RX-7");

        let action = press(&mut screen, KeyCode::Enter);
        assert_eq!(
            action,
            Some(ScreenAction::Dispatch(Intent::Authenticate {
                username: "Apex".into(),
                email: "apex@example.com".into(),
                password: "secret".into(),
                car: "Mazda RX-7".into(),
                mode: AuthMode::Register,
            }))
        );
    }

    #[test]
    fn focus_wraps_in_both_directions() {
        let mut screen = AuthScreen::new();
        type_str(&mut screen, "a");
        press(&mut screen, KeyCode::Tab);
        press(&mut screen, KeyCode::Tab); // back to username
        type_str(&mut screen, "b");

        let action = press(&mut screen, KeyCode::Enter);
        match action {
            Some(ScreenAction::Dispatch(Intent::Authenticate { username, .. })) => {
                assert_eq!(username, "ab");
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn toggling_back_to_login_drops_extra_fields_from_the_cycle() {
        let mut screen = AuthScreen::new();
        ctrl_t(&mut screen);
        ctrl_t(&mut screen);
        assert_eq!(screen.mode(), AuthMode::Login);

        // Two tabs wrap around the two login fields.
        type_str(&mut screen, "x");
        press(&mut screen, KeyCode::Tab);
        press(&mut screen, KeyCode::Tab);
        type_str(&mut screen, "y");
        match press(&mut screen, KeyCode::Enter) {
            Some(ScreenAction::Dispatch(Intent::Authenticate { username, .. })) => {
                assert_eq!(username, "xy");
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn escape_asks_the_shell_to_quit() {
        let mut screen = AuthScreen::new();
        assert_eq!(press(&mut screen, KeyCode::Esc), Some(ScreenAction::Quit));
    }

    #[test]
    fn the_gate_is_always_in_edit_mode() {
        assert_eq!(AuthScreen::new().input_mode(), InputMode::Editing);
    }
}
