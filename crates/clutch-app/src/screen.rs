//! Screens reachable from the navigation bar.

use serde::{Deserialize, Serialize};

/// The five destinations of the authenticated shell.
///
/// An unauthenticated session has no active screen; frontends render the
/// sign-in flow until a profile exists, then land on [`Screen::Feed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Scrollable feed of posts.
    #[default]
    Feed,
    /// Upcoming community events.
    Events,
    /// Current position and nearby points of interest.
    Gps,
    /// The signed-in user's profile.
    Profile,
    /// Recent notifications.
    Notifications,
}

impl Screen {
    /// All screens in navigation order.
    pub const fn all() -> [Screen; 5] {
        [
            Screen::Feed,
            Screen::Events,
            Screen::Gps,
            Screen::Profile,
            Screen::Notifications,
        ]
    }

    /// Display name shown in the navigation bar.
    pub const fn name(&self) -> &'static str {
        match self {
            Screen::Feed => "Feed",
            Screen::Events => "Events",
            Screen::Gps => "GPS",
            Screen::Profile => "Profile",
            Screen::Notifications => "Notifications",
        }
    }

    /// Glyph shown next to the name.
    pub const fn icon(&self) -> &'static str {
        match self {
            Screen::Feed => "🏠",
            Screen::Events => "📅",
            Screen::Gps => "📍",
            Screen::Profile => "👤",
            Screen::Notifications => "🔔",
        }
    }

    /// Number key bound to this screen.
    pub const fn key_number(&self) -> u8 {
        match self {
            Screen::Feed => 1,
            Screen::Events => 2,
            Screen::Gps => 3,
            Screen::Profile => 4,
            Screen::Notifications => 5,
        }
    }

    /// Screen bound to a number key, if any.
    pub fn from_key(key: u8) -> Option<Screen> {
        Screen::all().into_iter().find(|s| s.key_number() == key)
    }

    /// Next screen in navigation order, wrapping at the end.
    pub fn next(&self) -> Screen {
        let all = Screen::all();
        let idx = all.iter().position(|s| s == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Previous screen in navigation order, wrapping at the start.
    pub fn prev(&self) -> Screen {
        let all = Screen::all();
        let idx = all.iter().position(|s| s == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_keys_round_trip() {
        for screen in Screen::all() {
            assert_eq!(Screen::from_key(screen.key_number()), Some(screen));
        }
        assert_eq!(Screen::from_key(0), None);
        assert_eq!(Screen::from_key(6), None);
    }

    #[test]
    fn next_cycles_through_all_screens() {
        let mut screen = Screen::Feed;
        for expected in [
            Screen::Events,
            Screen::Gps,
            Screen::Profile,
            Screen::Notifications,
            Screen::Feed,
        ] {
            screen = screen.next();
            assert_eq!(screen, expected);
        }
    }

    #[test]
    fn prev_is_inverse_of_next() {
        for screen in Screen::all() {
            assert_eq!(screen.next().prev(), screen);
            assert_eq!(screen.prev().next(), screen);
        }
    }

    #[test]
    fn default_screen_is_feed() {
        assert_eq!(Screen::default(), Screen::Feed);
    }
}
