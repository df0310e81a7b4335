//! Error types shared across the application core.

use thiserror::Error;

use crate::records::PostId;

/// Reasons the session store rejects an intent.
///
/// Rejection never mutates state; callers surface the message and move on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// A username was empty after trimming.
    #[error("username must not be empty")]
    EmptyUsername,

    /// Post content was empty after trimming.
    #[error("post content must not be empty")]
    EmptyPost,

    /// No post carries the given identifier.
    #[error("no post with id {id}")]
    UnknownPost {
        /// Identifier that failed to resolve.
        id: PostId,
    },

    /// The operation needs a signed-in profile.
    #[error("not signed in")]
    NotAuthenticated,
}

impl AppError {
    /// Builds an [`AppError::UnknownPost`] for `id`.
    pub fn unknown_post(id: PostId) -> Self {
        Self::UnknownPost { id }
    }
}

/// Failures reported by location capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// The capability cannot produce a fix at all.
    #[error("location unavailable: {reason}")]
    Unavailable {
        /// Human-readable cause.
        reason: String,
    },

    /// A reading was present but failed to parse or was out of range.
    #[error("invalid {field} reading: {value}")]
    InvalidReading {
        /// Which reading was bad, e.g. `latitude`.
        field: &'static str,
        /// The offending raw value.
        value: String,
    },
}

impl LocationError {
    /// Builds a [`LocationError::Unavailable`] with the given reason.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Builds a [`LocationError::InvalidReading`] for one field.
    pub fn invalid_reading(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidReading {
            field,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_messages() {
        assert_eq!(
            AppError::EmptyUsername.to_string(),
            "username must not be empty"
        );
        assert_eq!(
            AppError::EmptyPost.to_string(),
            "post content must not be empty"
        );
        assert_eq!(
            AppError::unknown_post(PostId::new(7)).to_string(),
            "no post with id 7"
        );
        assert_eq!(AppError::NotAuthenticated.to_string(), "not signed in");
    }

    #[test]
    fn location_error_messages() {
        assert_eq!(
            LocationError::unavailable("no reading").to_string(),
            "location unavailable: no reading"
        );
        assert_eq!(
            LocationError::invalid_reading("latitude", "north").to_string(),
            "invalid latitude reading: north"
        );
    }
}
