//! Intents accepted by the session store.

use serde::{Deserialize, Serialize};

use crate::records::{Coordinates, PostId};
use crate::screen::Screen;

/// Which path the sign-in form was submitted through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    /// Existing-account path; profile details come from demo defaults.
    #[default]
    Login,
    /// New-account path; the form also collects email and car.
    Register,
}

/// A state transition requested by a frontend.
///
/// Intents are the only way to mutate [`AppState`](crate::state::AppState).
/// Each either applies fully or is rejected with an
/// [`AppError`](crate::error::AppError) and no state change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    /// Sign in or register, seeding the demo session on success.
    Authenticate {
        /// Display name; must be non-empty after trimming.
        username: String,
        /// Email address, may be empty.
        email: String,
        /// Collected by forms but never stored or checked.
        password: String,
        /// The user's car; only honoured on the register path.
        car: String,
        /// Login or register.
        mode: AuthMode,
    },
    /// Publish a new post at the top of the feed.
    AddPost {
        /// Post body; must be non-empty after trimming.
        content: String,
    },
    /// Increment the like counter of an existing post.
    LikePost {
        /// Which post was liked.
        id: PostId,
    },
    /// Update the signed-in profile's editable fields.
    SaveProfile {
        /// New display name; must be non-empty after trimming.
        username: String,
        /// New car description, may be empty.
        car: String,
        /// New bio; empty clears it back to the default.
        bio: String,
    },
    /// Switch the active screen.
    NavigateTo {
        /// Destination screen.
        screen: Screen,
    },
    /// Record a location fix for the GPS screen.
    SetLocation {
        /// The new position.
        coordinates: Coordinates,
    },
}

impl Intent {
    /// Short label used in logs.
    pub fn description(&self) -> &'static str {
        match self {
            Intent::Authenticate { .. } => "authenticate",
            Intent::AddPost { .. } => "add_post",
            Intent::LikePost { .. } => "like_post",
            Intent::SaveProfile { .. } => "save_profile",
            Intent::NavigateTo { .. } => "navigate_to",
            Intent::SetLocation { .. } => "set_location",
        }
    }
}
