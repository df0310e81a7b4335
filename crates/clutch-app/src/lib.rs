//! Headless application core for Clutch Club, a demo social network for car
//! enthusiasts.
//!
//! The crate holds all session state in [`AppState`] and mutates it only
//! through [`Intent`] values, so any frontend (the bundled terminal client,
//! a test harness) drives the same state machine. There is no persistence
//! and no network: every session starts at the sign-in gate and is seeded
//! with demo content on success.
//!
//! ```
//! use clutch_app::{AppState, AuthMode, Intent};
//!
//! let mut state = AppState::new();
//! state.apply(Intent::Authenticate {
//!     username: "DriftQueen".into(),
//!     email: String::new(),
//!     password: String::new(),
//!     car: String::new(),
//!     mode: AuthMode::Login,
//! })?;
//! assert_eq!(state.posts().len(), 3);
//! # Ok::<(), clutch_app::AppError>(())
//! ```

pub mod error;
pub mod intent;
pub mod location;
pub mod records;
pub mod screen;
pub mod seed;
pub mod state;

pub use error::{AppError, LocationError};
pub use intent::{AuthMode, Intent};
pub use location::LocationProvider;
pub use records::{
    Coordinates, Event, EventId, Notification, NotificationId, NotificationKind, Post,
    PostId, UserProfile, DEFAULT_BIO,
};
pub use screen::Screen;
pub use state::AppState;
