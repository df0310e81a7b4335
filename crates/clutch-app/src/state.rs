//! The session store: every mutation flows through [`AppState::apply`].

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::intent::{AuthMode, Intent};
use crate::records::{
    Coordinates, Event, Notification, Post, PostId, UserProfile, DEFAULT_BIO,
};
use crate::screen::Screen;
use crate::seed;

/// Car assigned to accounts created through the login path.
const LOGIN_CAR: &str = "Volvo V40";

/// Car recorded when the register form leaves the field blank.
const UNSPECIFIED_CAR: &str = "Not specified";

/// In-memory state of one demo session.
///
/// Fields stay private so that frontends can only observe state through the
/// read accessors and mutate it through [`AppState::apply`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    screen: Screen,
    user: Option<UserProfile>,
    posts: Vec<Post>,
    events: Vec<Event>,
    notifications: Vec<Notification>,
    coordinates: Coordinates,
}

impl AppState {
    /// Creates an unauthenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active screen. Meaningful only once a user is signed in.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The signed-in profile, if any.
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// True once [`Intent::Authenticate`] has succeeded.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Feed posts, newest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Upcoming events.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Recent notifications.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Current position shown on the GPS screen.
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// Applies one intent.
    ///
    /// On rejection the state is left exactly as it was.
    pub fn apply(&mut self, intent: Intent) -> Result<(), AppError> {
        tracing::debug!(intent = intent.description(), "applying intent");
        match intent {
            Intent::Authenticate {
                username,
                email,
                password: _,
                car,
                mode,
            } => self.authenticate(&username, &email, &car, mode),
            Intent::AddPost { content } => self.add_post(&content).map(|_| ()),
            Intent::LikePost { id } => self.like_post(id),
            Intent::SaveProfile {
                username,
                car,
                bio,
            } => self.save_profile(&username, &car, &bio),
            Intent::NavigateTo { screen } => {
                self.navigate_to(screen);
                Ok(())
            }
            Intent::SetLocation { coordinates } => {
                self.set_location(coordinates);
                Ok(())
            }
        }
    }

    /// Signs a user in and seeds the demo session.
    ///
    /// The login path assigns the demo car; the register path keeps the
    /// submitted car, falling back to a placeholder when blank. Both paths
    /// land on the feed with fresh seed data.
    pub fn authenticate(
        &mut self,
        username: &str,
        email: &str,
        car: &str,
        mode: AuthMode,
    ) -> Result<(), AppError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::EmptyUsername);
        }
        let car = match mode {
            AuthMode::Login => LOGIN_CAR.to_string(),
            AuthMode::Register => {
                let car = car.trim();
                if car.is_empty() {
                    UNSPECIFIED_CAR.to_string()
                } else {
                    car.to_string()
                }
            }
        };
        self.user = Some(UserProfile {
            username: username.to_string(),
            email: email.trim().to_string(),
            car,
            bio: Some(DEFAULT_BIO.to_string()),
        });
        self.posts = seed::demo_posts();
        self.events = seed::demo_events();
        self.notifications = seed::demo_notifications();
        self.screen = Screen::Feed;
        tracing::info!(username, "session started");
        Ok(())
    }

    /// Publishes a post at the top of the feed and returns its id.
    ///
    /// Ids come from the wall clock; if that collides with an existing id
    /// (clock skew, two posts in the same millisecond) the id is bumped past
    /// the current maximum.
    pub fn add_post(&mut self, content: &str) -> Result<PostId, AppError> {
        let user = self.user.as_ref().ok_or(AppError::NotAuthenticated)?;
        let content = content.trim();
        if content.is_empty() {
            return Err(AppError::EmptyPost);
        }
        let mut id = PostId::now();
        if let Some(max) = self.posts.iter().map(|p| p.id).max() {
            if id <= max {
                id = PostId::new(max.value().saturating_add(1));
            }
        }
        let post = Post {
            id,
            author: user.username.clone(),
            content: content.to_string(),
            likes: 0,
            comments: 0,
            image: seed::PLACEHOLDER_IMAGE.to_string(),
        };
        self.posts.insert(0, post);
        Ok(id)
    }

    /// Increments the like counter of the post with `id`.
    pub fn like_post(&mut self, id: PostId) -> Result<(), AppError> {
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(AppError::UnknownPost { id })?;
        post.likes = post.likes.saturating_add(1);
        Ok(())
    }

    /// Updates the editable profile fields, keeping the email as-is.
    ///
    /// An empty bio clears the stored one so the default shows again.
    pub fn save_profile(
        &mut self,
        username: &str,
        car: &str,
        bio: &str,
    ) -> Result<(), AppError> {
        let user = self.user.as_mut().ok_or(AppError::NotAuthenticated)?;
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::EmptyUsername);
        }
        user.username = username.to_string();
        user.car = car.trim().to_string();
        let bio = bio.trim();
        user.bio = if bio.is_empty() {
            None
        } else {
            Some(bio.to_string())
        };
        Ok(())
    }

    /// Switches the active screen.
    pub fn navigate_to(&mut self, screen: Screen) {
        self.screen = screen;
    }

    /// Records a location fix.
    pub fn set_location(&mut self, coordinates: Coordinates) {
        self.coordinates = coordinates;
    }
}
