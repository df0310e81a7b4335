//! Colour palette and style helpers for the interface.

use ratatui::style::{Color, Modifier, Style};

/// Severity of a transient toast message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    /// Neutral information.
    Info,
    /// Something worked.
    Success,
    /// Something needs attention.
    Warning,
    /// Something failed.
    Error,
}

/// The colours the interface draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    /// Accent for titles, focus and the selected nav entry.
    pub primary: Color,
    /// Secondary accent for counters and highlights.
    pub secondary: Color,
    /// Positive feedback.
    pub success: Color,
    /// Cautionary feedback.
    pub warning: Color,
    /// Failure feedback.
    pub error: Color,
    /// Informational feedback.
    pub info: Color,
    /// Fill behind selected rows.
    pub surface: Color,
    /// Regular text.
    pub text: Color,
    /// De-emphasised text.
    pub text_muted: Color,
    /// Unfocused borders.
    pub border: Color,
    /// Focused borders.
    pub border_focused: Color,
}

impl ColorPalette {
    /// Racing-red palette for dark terminals.
    pub const fn dark() -> Self {
        Self {
            primary: Color::Red,
            secondary: Color::Yellow,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::LightRed,
            info: Color::LightBlue,
            surface: Color::DarkGray,
            text: Color::White,
            text_muted: Color::Gray,
            border: Color::DarkGray,
            border_focused: Color::Red,
        }
    }

    /// The same accents adjusted for light terminals.
    pub const fn light() -> Self {
        Self {
            primary: Color::Red,
            secondary: Color::Magenta,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Blue,
            surface: Color::Gray,
            text: Color::Black,
            text_muted: Color::DarkGray,
            border: Color::Gray,
            border_focused: Color::Red,
        }
    }
}

/// Style helpers bound to one palette.
#[derive(Debug, Clone, Copy)]
pub struct Styles {
    palette: ColorPalette,
}

impl Default for Styles {
    fn default() -> Self {
        Self::new(ColorPalette::dark())
    }
}

impl Styles {
    /// Binds the helpers to `palette`.
    pub const fn new(palette: ColorPalette) -> Self {
        Self { palette }
    }

    /// Regular body text.
    pub fn text(&self) -> Style {
        Style::default().fg(self.palette.text)
    }

    /// De-emphasised text for hints and metadata.
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.palette.text_muted)
    }

    /// Emphasised text, used for usernames and headings.
    pub fn text_highlight(&self) -> Style {
        Style::default()
            .fg(self.palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Counter accents such as attendee numbers.
    pub fn text_accent(&self) -> Style {
        Style::default().fg(self.palette.secondary)
    }

    /// Positive feedback text.
    pub fn text_success(&self) -> Style {
        Style::default().fg(self.palette.success)
    }

    /// Cautionary feedback text.
    pub fn text_warning(&self) -> Style {
        Style::default().fg(self.palette.warning)
    }

    /// Failure feedback text.
    pub fn text_error(&self) -> Style {
        Style::default().fg(self.palette.error)
    }

    /// Informational feedback text.
    pub fn text_info(&self) -> Style {
        Style::default().fg(self.palette.info)
    }

    /// Brand title, bold italic in the accent colour.
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.palette.primary)
            .add_modifier(Modifier::BOLD | Modifier::ITALIC)
    }

    /// Border of an unfocused block.
    pub fn border(&self) -> Style {
        Style::default().fg(self.palette.border)
    }

    /// Border of the focused block.
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.palette.border_focused)
    }

    /// Currently selected row or nav entry.
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.palette.text)
            .bg(self.palette.surface)
            .add_modifier(Modifier::BOLD)
    }

    /// Badge showing the current input mode.
    pub fn mode_indicator(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Body style of a toast at `level`.
    pub fn toast(&self, level: ToastLevel) -> Style {
        let fg = match level {
            ToastLevel::Info => self.palette.info,
            ToastLevel::Success => self.palette.success,
            ToastLevel::Warning => self.palette.warning,
            ToastLevel::Error => self.palette.error,
        };
        Style::default().fg(fg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_palette_uses_racing_red() {
        let palette = ColorPalette::dark();
        assert_eq!(palette.primary, Color::Red);
        assert_eq!(palette.border_focused, Color::Red);
        assert_eq!(palette.text, Color::White);
    }

    #[test]
    fn light_palette_flips_text_colors() {
        let palette = ColorPalette::light();
        assert_eq!(palette.text, Color::Black);
        assert_eq!(palette.text_muted, Color::DarkGray);
    }

    #[test]
    fn toast_styles_follow_the_level() {
        let styles = Styles::default();
        assert_eq!(
            styles.toast(ToastLevel::Error).fg,
            Some(ColorPalette::dark().error)
        );
        assert_eq!(
            styles.toast(ToastLevel::Success).fg,
            Some(ColorPalette::dark().success)
        );
    }

    #[test]
    fn selected_style_is_bold() {
        let styles = Styles::default();
        assert!(styles.selected().add_modifier.contains(Modifier::BOLD));
    }
}
