//! GPS screen: current position plus canned nearby points of interest.

use crossterm::event::KeyEvent;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use clutch_app::AppState;

use super::ScreenView;
use crate::tui::input::ScreenAction;
use crate::tui::styles::Styles;

/// Read-only view of the stored coordinates.
///
/// The nearby listings are demo fixtures; only the coordinates are live,
/// updated when a location fix arrives.
#[derive(Debug, Default)]
pub struct GpsScreen;

impl GpsScreen {
    /// Creates the screen.
    pub fn new() -> Self {
        Self
    }
}

impl ScreenView for GpsScreen {
    fn handle_key(&mut self, _key: KeyEvent, _state: &AppState) -> Option<ScreenAction> {
        None
    }

    fn render(&self, f: &mut Frame<'_>, area: Rect, state: &AppState, styles: &Styles) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(styles.border())
            .title(" GPS & Location ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(inner);

        let coords = state.coordinates();
        let position = vec![
            Line::styled("Current Location", styles.text_highlight()),
            Line::styled(format!("Lat: {:.4}", coords.latitude), styles.text()),
            Line::styled(format!("Lng: {:.4}", coords.longitude), styles.text()),
        ];
        f.render_widget(Paragraph::new(position), chunks[0]);

        let cards = [
            ("🏁 Nearby Events", "Sunday Car Meet - 2.3 miles away"),
            ("🔧 Service Centers", "AutoZone - 1.8 miles away"),
            ("⛽ Gas Stations", "Shell Station - 0.5 miles away"),
        ];
        for (chunk, (title, entry)) in chunks.iter().skip(1).zip(cards) {
            let lines = vec![
                Line::styled(title, styles.text_highlight()),
                Line::styled(format!("  {entry}"), styles.text_muted()),
            ];
            f.render_widget(Paragraph::new(lines), *chunk);
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;

    #[test]
    fn the_screen_consumes_no_keys() {
        let mut screen = GpsScreen::new();
        let state = AppState::new();
        for code in [KeyCode::Enter, KeyCode::Char('j'), KeyCode::Esc] {
            let action = screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE), &state);
            assert_eq!(action, None);
        }
    }
}
