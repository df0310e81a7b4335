//! Capability contract for resolving the device position.

use async_trait::async_trait;

use crate::error::LocationError;
use crate::records::Coordinates;

/// Source of a one-shot location fix.
///
/// Implementations live in frontends; the core only defines the contract and
/// consumes the result through [`Intent::SetLocation`](crate::Intent).
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Resolves the current position once.
    async fn current_position(&self) -> Result<Coordinates, LocationError>;
}
