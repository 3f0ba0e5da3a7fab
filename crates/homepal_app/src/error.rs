//! Error types for the HomePal app

use homepal_animation::AnimationError;
use homepal_core::Viewport;
use thiserror::Error;

/// App-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Navigation to a route that was never registered
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// Two routes registered under the same name
    #[error("Route registered twice: {0}")]
    DuplicateRoute(String),

    /// Navigator built without any route
    #[error("Navigator has no routes")]
    NoRoutes,

    /// Frame requested before the container mounted its initial route
    #[error("Navigation container has not been launched")]
    NotLaunched,

    /// Viewport with a zero, negative or non-finite dimension
    #[error("Invalid viewport: {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    /// Animation runtime error
    #[error("Animation error: {0}")]
    Animation(#[from] AnimationError),
}

/// Result type for app operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Reject viewports with a zero, negative or non-finite dimension
pub(crate) fn ensure_viewport(viewport: Viewport) -> Result<()> {
    if viewport.is_empty() {
        return Err(AppError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(())
}
