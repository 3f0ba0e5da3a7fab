//! Navigation shell
//!
//! A single-stack navigator: routes are registered by name with per-screen
//! options, and the container presents exactly one screen full-screen at a
//! time. Header chrome is composed over the screen only when the route asks
//! for it.
//!
//! # Example
//!
//! ```ignore
//! use homepal_app::prelude::*;
//!
//! let mut shell = NavigationContainer::new(app_navigator())?;
//! shell.launch(Viewport::new(390.0, 844.0))?;
//!
//! let scene = shell.frame(16.0)?;
//! assert!(!scene.has_header());
//! ```

use crate::error::{ensure_viewport, AppError, Result};
use homepal_animation::FrameClock;
use homepal_core::events::event_types::{ANIMATION_COMPLETE, MOUNT, RESIZE, UNMOUNT};
use homepal_core::{
    Color, DrawCommand, Event, EventData, EventDispatcher, EventType, FontWeight, Scene, Viewport,
};
use rustc_hash::FxHashSet;

/// A full-screen view presented by the navigator
pub trait Screen {
    /// Start the screen in `viewport`
    fn mount(&mut self, viewport: Viewport) -> Result<()>;

    /// The window size changed while mounted
    fn resize(&mut self, viewport: Viewport) -> Result<()>;

    /// Advance time-dependent state by one frame
    fn advance(&mut self, dt_ms: f64);

    /// Append this frame's draw commands
    fn render(&self, scene: &mut Scene);

    /// Tear down; nothing the screen started may outlive this call
    fn unmount(&mut self);

    fn is_mounted(&self) -> bool;

    /// True once the screen's own sequence has finished
    fn is_complete(&self) -> bool {
        false
    }
}

/// Builds a fresh screen each time its route is mounted
pub type ScreenFactory = Box<dyn Fn() -> Box<dyn Screen>>;

/// Header chrome drawn above routes that show one
struct HeaderStyle {
    background: Color,
    tint: Color,
    title_weight: FontWeight,
    height: f32,
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self {
            background: Color::from_hex(0x007AFF),
            tint: Color::WHITE,
            title_weight: FontWeight::Bold,
            height: 56.0,
        }
    }
}

/// Per-route presentation options
#[derive(Clone, Debug, PartialEq)]
pub struct ScreenOptions {
    pub header_shown: bool,
    /// Header title; the route name when unset
    pub title: Option<String>,
}

impl Default for ScreenOptions {
    fn default() -> Self {
        Self {
            header_shown: true,
            title: None,
        }
    }
}

impl ScreenOptions {
    /// Options for a screen that draws edge to edge
    pub fn headerless() -> Self {
        Self {
            header_shown: false,
            title: None,
        }
    }
}

struct Route {
    name: String,
    options: ScreenOptions,
    factory: ScreenFactory,
}

/// Route table of a single-stack navigator
pub struct StackNavigator {
    routes: Vec<Route>,
    initial_route: Option<String>,
}

impl StackNavigator {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            initial_route: None,
        }
    }

    /// Register a route. The first registered route is the initial one
    /// unless `initial_route` says otherwise.
    pub fn screen<F, S>(mut self, name: impl Into<String>, options: ScreenOptions, factory: F) -> Self
    where
        F: Fn() -> S + 'static,
        S: Screen + 'static,
    {
        self.routes.push(Route {
            name: name.into(),
            options,
            factory: Box::new(move || -> Box<dyn Screen> { Box::new(factory()) }),
        });
        self
    }

    pub fn initial_route(mut self, name: impl Into<String>) -> Self {
        self.initial_route = Some(name.into());
        self
    }

    pub fn route_names(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.name.as_str())
    }

    fn validate(&self) -> Result<usize> {
        if self.routes.is_empty() {
            return Err(AppError::NoRoutes);
        }
        let mut seen = FxHashSet::default();
        for route in &self.routes {
            if !seen.insert(route.name.as_str()) {
                return Err(AppError::DuplicateRoute(route.name.clone()));
            }
        }
        match &self.initial_route {
            Some(name) => self.index_of(name),
            None => Ok(0),
        }
    }

    fn index_of(&self, name: &str) -> Result<usize> {
        self.routes
            .iter()
            .position(|r| r.name == name)
            .ok_or_else(|| AppError::UnknownRoute(name.to_string()))
    }
}

impl Default for StackNavigator {
    fn default() -> Self {
        Self::new()
    }
}

struct ActiveScreen {
    route: usize,
    screen: Box<dyn Screen>,
    completion_reported: bool,
}

/// Hosts the navigator and the currently presented screen
pub struct NavigationContainer {
    navigator: StackNavigator,
    initial: usize,
    active: Option<ActiveScreen>,
    viewport: Viewport,
    dispatcher: EventDispatcher,
    header: HeaderStyle,
    clock: FrameClock,
}

impl NavigationContainer {
    /// Validate the route table. Nothing is mounted until `launch`.
    pub fn new(navigator: StackNavigator) -> Result<Self> {
        let initial = navigator.validate()?;
        Ok(Self {
            navigator,
            initial,
            active: None,
            viewport: Viewport::default(),
            dispatcher: EventDispatcher::new(),
            header: HeaderStyle::default(),
            clock: FrameClock::new(),
        })
    }

    /// Mount the initial route full-screen.
    ///
    /// Launching again replaces whatever is presented with a fresh initial
    /// screen.
    pub fn launch(&mut self, viewport: Viewport) -> Result<()> {
        ensure_viewport(viewport)?;
        self.viewport = viewport;
        self.present(self.initial)
    }

    /// Mount `name` and swap it in for the current screen.
    ///
    /// This is the hand-off point once a launch screen reports completion.
    /// If the new screen fails to mount, the current one stays presented.
    pub fn replace(&mut self, name: &str) -> Result<()> {
        let index = self.navigator.index_of(name)?;
        if self.active.is_none() {
            return Err(AppError::NotLaunched);
        }
        self.present(index)
    }

    /// Advance the presented screen by `dt_ms` and compose its frame
    pub fn frame(&mut self, dt_ms: f64) -> Result<Scene> {
        if self.active.is_none() {
            return Err(AppError::NotLaunched);
        }
        let applied = self.clock.advance(dt_ms);
        self.step(applied)
    }

    /// Advance by the wall time since the previous call and compose the
    /// frame. The first call after launch only starts the clock.
    pub fn tick(&mut self) -> Result<Scene> {
        if self.active.is_none() {
            return Err(AppError::NotLaunched);
        }
        let applied = self.clock.update();
        self.step(applied)
    }

    fn step(&mut self, dt_ms: f64) -> Result<Scene> {
        let timestamp = self.clock.now_ms() as u64;
        let active = self.active.as_mut().ok_or(AppError::NotLaunched)?;
        active.screen.advance(dt_ms);

        if !active.completion_reported && active.screen.is_complete() {
            active.completion_reported = true;
            let route = &self.navigator.routes[active.route];
            tracing::info!(route = %route.name, "screen reported completion");
            self.dispatcher.dispatch(&mut Event::new(
                ANIMATION_COMPLETE,
                route_target(active.route),
                EventData::Route {
                    name: route.name.clone(),
                },
                timestamp,
            ));
        }

        self.render()
    }

    /// Compose the current frame without advancing time
    pub fn render(&self) -> Result<Scene> {
        let active = self.active.as_ref().ok_or(AppError::NotLaunched)?;
        let route = &self.navigator.routes[active.route];

        let mut scene = Scene::new(self.viewport);
        active.screen.render(&mut scene);

        if route.options.header_shown {
            let style = &self.header;
            scene.push(DrawCommand::Header {
                title: route
                    .options
                    .title
                    .clone()
                    .unwrap_or_else(|| route.name.clone()),
                height: style.height,
                background: style.background,
                tint: style.tint,
                weight: style.title_weight,
            });
        }
        Ok(scene)
    }

    /// Forward a window size change to the presented screen
    pub fn resize(&mut self, viewport: Viewport) -> Result<()> {
        ensure_viewport(viewport)?;
        if let Some(active) = self.active.as_mut() {
            active.screen.resize(viewport)?;
            let target = route_target(active.route);
            self.viewport = viewport;
            self.dispatch(
                RESIZE,
                target,
                EventData::Resize {
                    width: viewport.width,
                    height: viewport.height,
                },
            );
        } else {
            self.viewport = viewport;
        }
        Ok(())
    }

    /// Unmount whatever is presented
    pub fn shutdown(&mut self) {
        if let Some(active) = self.active.take() {
            self.retire(active);
        }
    }

    /// Listen for lifecycle events of the route called `name`
    pub fn on_route_event<F>(&mut self, name: &str, event_type: EventType, handler: F) -> Result<()>
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        let index = self.navigator.index_of(name)?;
        self.dispatcher
            .register(route_target(index), event_type, handler);
        Ok(())
    }

    pub fn current_route(&self) -> Option<&str> {
        self.active
            .as_ref()
            .map(|a| self.navigator.routes[a.route].name.as_str())
    }

    pub fn current_options(&self) -> Option<&ScreenOptions> {
        self.active
            .as_ref()
            .map(|a| &self.navigator.routes[a.route].options)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Build and mount the screen for `index`, then retire the old one.
    fn present(&mut self, index: usize) -> Result<()> {
        let route = &self.navigator.routes[index];
        let mut screen = (route.factory)();
        screen.mount(self.viewport)?;
        tracing::info!(route = %route.name, "route mounted");
        let name = route.name.clone();

        let previous = self.active.replace(ActiveScreen {
            route: index,
            screen,
            completion_reported: false,
        });
        if let Some(previous) = previous {
            self.retire(previous);
        }
        self.dispatch(MOUNT, route_target(index), EventData::Route { name });
        Ok(())
    }

    fn retire(&self, mut active: ActiveScreen) {
        active.screen.unmount();
        let name = self.navigator.routes[active.route].name.clone();
        tracing::info!(route = %name, "route unmounted");
        self.dispatch(UNMOUNT, route_target(active.route), EventData::Route { name });
    }

    fn dispatch(&self, event_type: EventType, target: u64, data: EventData) {
        let mut event = Event::new(event_type, target, data, self.clock.now_ms() as u64);
        self.dispatcher.dispatch(&mut event);
    }
}

impl Drop for NavigationContainer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn route_target(index: usize) -> u64 {
    index as u64 + 1
}
