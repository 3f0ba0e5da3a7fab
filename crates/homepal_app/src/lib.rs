//! HomePal launch experience
//!
//! The app shell registers a single headerless route, `SplashScreen`, and
//! presents it full-screen. The splash plays its animated timeline and
//! reports completion once the shape covers the viewport.
//!
//! # Example
//!
//! ```
//! use homepal_app::prelude::*;
//!
//! let mut shell = homepal_app::launch(Viewport::new(390.0, 844.0)).unwrap();
//! let scene = shell.frame(16.0).unwrap();
//!
//! assert_eq!(shell.current_route(), Some(homepal_app::SPLASH_ROUTE));
//! assert!(!scene.has_header());
//! ```

mod error;
pub mod headless_assert;
pub mod headless_report;
pub mod headless_runner;
pub mod headless_runtime;
pub mod headless_scenario;
pub mod logging;
pub mod navigation;
pub mod splash;

pub use error::{AppError, Result};
pub use navigation::{NavigationContainer, Screen, ScreenFactory, ScreenOptions, StackNavigator};
pub use splash::{
    Completion, ShapeKind, SplashChannel, SplashConfig, SplashFrame, SplashScreen,
    SplashTimeline, TimelineState,
};

use homepal_core::Viewport;

/// Route name of the launch screen
pub const SPLASH_ROUTE: &str = "SplashScreen";

/// The app's navigator: one route, the splash, shown without a header.
pub fn app_navigator() -> StackNavigator {
    StackNavigator::new()
        .screen(SPLASH_ROUTE, ScreenOptions::headerless(), SplashScreen::new)
        .initial_route(SPLASH_ROUTE)
}

/// Build the shell around [`app_navigator`] and mount the splash.
pub fn launch(viewport: Viewport) -> Result<NavigationContainer> {
    let mut container = NavigationContainer::new(app_navigator())?;
    container.launch(viewport)?;
    Ok(container)
}

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::error::{AppError, Result};
    pub use crate::navigation::{NavigationContainer, Screen, ScreenOptions, StackNavigator};
    pub use crate::splash::{ShapeKind, SplashChannel, SplashConfig, SplashScreen, SplashTimeline};
    pub use crate::{app_navigator, launch, SPLASH_ROUTE};

    pub use homepal_core::{Color, Event, EventType, Scene, Viewport};
}
