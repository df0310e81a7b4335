//! Data records held by the session store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Bio applied to freshly created profiles.
pub const DEFAULT_BIO: &str = "Car enthusiast and weekend warrior.";

/// Identifier of a feed post.
///
/// New posts take a millisecond wall-clock identifier via [`PostId::now`],
/// which also gives the feed a stable ordering key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PostId(u64);

impl PostId {
    /// Wraps a raw identifier.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Identifier taken from the current wall clock, millisecond precision.
    pub fn now() -> Self {
        let millis = chrono::Utc::now().timestamp_millis().max(0);
        Self(millis as u64)
    }

    /// Raw value.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a community event.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EventId(u64);

impl EventId {
    /// Wraps a raw identifier.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw value.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a notification.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Wraps a raw identifier.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw value.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One post in the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier.
    pub id: PostId,
    /// Username of the poster.
    pub author: String,
    /// Post body.
    pub content: String,
    /// Like counter.
    pub likes: u32,
    /// Comment counter, display-only in this demo.
    pub comments: u32,
    /// URL of the attached picture.
    pub image: String,
}

/// A community event listed on the events screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier.
    pub id: EventId,
    /// Event title.
    pub name: String,
    /// Date shown verbatim, `YYYY-MM-DD`.
    pub date: String,
    /// Venue name.
    pub location: String,
    /// Attendee counter.
    pub attendees: u32,
    /// One-line blurb.
    pub description: String,
}

/// Category of a notification, drives the glyph shown next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Someone liked a post.
    Like,
    /// A new event was announced.
    Event,
    /// Follower activity.
    Follow,
}

/// One entry on the notifications screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier.
    pub id: NotificationId,
    /// Message shown to the user.
    pub text: String,
    /// Relative age shown verbatim, e.g. `2h ago`.
    pub time: String,
    /// Category of the notification.
    pub kind: NotificationKind,
}

/// The signed-in user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name, never empty.
    pub username: String,
    /// Email address, may be empty for login-path accounts.
    pub email: String,
    /// The user's car.
    pub car: String,
    /// Free-form bio. `None` renders as [`DEFAULT_BIO`].
    pub bio: Option<String>,
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Degrees north, in `-90.0..=90.0`.
    pub latitude: f64,
    /// Degrees east, in `-180.0..=180.0`.
    pub longitude: f64,
}

impl Coordinates {
    /// New York City, shown until a real fix arrives.
    pub const DEFAULT: Coordinates = Coordinates {
        latitude: 40.7128,
        longitude: -74.0060,
    };
}

impl Default for Coordinates {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_id_now_is_monotonic_enough() {
        let a = PostId::now();
        let b = PostId::now();
        assert!(b >= a);
        assert!(a.value() > 1_600_000_000_000);
    }

    #[test]
    fn default_coordinates_are_new_york() {
        let c = Coordinates::default();
        assert!((c.latitude - 40.7128).abs() < f64::EPSILON);
        assert!((c.longitude + 74.0060).abs() < f64::EPSILON);
    }

    #[test]
    fn ids_display_as_raw_values() {
        assert_eq!(PostId::new(42).to_string(), "42");
        assert_eq!(EventId::new(7).to_string(), "7");
        assert_eq!(NotificationId::new(3).to_string(), "3");
    }
}
