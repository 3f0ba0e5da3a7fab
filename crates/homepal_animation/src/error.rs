//! Animation error types

use crate::scheduler::ChannelId;
use thiserror::Error;

/// Errors raised by the animation scheduler
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnimationError {
    /// The channel was removed or never belonged to this scheduler
    #[error("Unknown animation channel: {0:?}")]
    UnknownChannel(ChannelId),
}

/// Result type for animation operations
pub type Result<T> = std::result::Result<T, AnimationError>;
