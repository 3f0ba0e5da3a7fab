//! Animated launch screen
//!
//! A white rounded square rises into place, spins once, swells, shrinks into
//! a small circle, slides right while the "HomePal" wordmark slides in, and
//! finally grows until it covers the whole viewport.

mod config;
mod geometry;
mod screen;
mod style;
mod timeline;

pub use config::{
    ShapeConfig, SplashConfig, SplashDelays, SplashDurations, SplashEasings, SplashValues,
    TextConfig,
};
pub use geometry::{covering_scale, ShapeKind};
pub use screen::SplashScreen;
pub use style::{ShapeStyle, SplashFrame, TextStyle};
pub use timeline::{Completion, SplashChannel, SplashTimeline, TimelineState};
