//! # Framework Errors
//!
//! Common error types used by every actor and client.

/// Errors that can occur within the actor framework itself.
///
/// `EntityError` carries the resource's own error (e.g. an `OrderError` raised by a
/// creation hook); the other variants describe the plumbing.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Wraps a resource error raised by one of the entity hooks.
    pub fn entity<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::EntityError(Box::new(error))
    }

    /// True when the failure happened in the transport between client and actor rather
    /// than in the resource itself.
    pub fn is_communication(&self) -> bool {
        matches!(self, Self::ActorClosed | Self::ActorDropped)
    }
}
