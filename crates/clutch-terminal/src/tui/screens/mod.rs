//! The sign-in gate and the five navigable screens.

pub mod auth;
pub mod events;
pub mod feed;
pub mod gps;
pub mod notifications;
pub mod profile;

pub use auth::AuthScreen;
pub use events::EventsScreen;
pub use feed::FeedScreen;
pub use gps::GpsScreen;
pub use notifications::NotificationsScreen;
pub use profile::ProfileScreen;

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

use clutch_app::AppState;

use crate::tui::input::{InputMode, ScreenAction};
use crate::tui::styles::Styles;

/// One screen of the interface.
///
/// Screens own only presentation state (selections, open forms, draft text);
/// everything else lives in [`AppState`] and is reached through the
/// [`ScreenAction`]s returned from [`ScreenView::handle_key`].
pub trait ScreenView {
    /// Handles one key press.
    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> Option<ScreenAction>;

    /// Draws the screen into `area`.
    fn render(&self, f: &mut Frame<'_>, area: Rect, state: &AppState, styles: &Styles);

    /// Called when the screen becomes active.
    fn on_enter(&mut self, _state: &AppState) {}

    /// The input mode the screen is currently in.
    fn input_mode(&self) -> InputMode {
        InputMode::Normal
    }
}

/// Centers a `percent_x` by `percent_y` rectangle inside `r`.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    use ratatui::layout::{Constraint, Direction, Layout};

    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
