//! Splash screen presented by the navigation shell

use super::config::SplashConfig;
use super::timeline::{Completion, SplashTimeline, TimelineState};
use crate::error::Result;
use crate::navigation::Screen;
use homepal_core::{Scene, Viewport};

/// The launch screen: a mounted [`SplashTimeline`] rendered edge to edge
pub struct SplashScreen {
    config: SplashConfig,
    timeline: Option<SplashTimeline>,
    pending_listeners: Vec<Box<dyn FnMut(Completion)>>,
}

impl SplashScreen {
    pub fn new() -> Self {
        Self::with_config(SplashConfig::default())
    }

    pub fn with_config(config: SplashConfig) -> Self {
        Self {
            config,
            timeline: None,
            pending_listeners: Vec::new(),
        }
    }

    /// Notify `listener` when the covering stage finishes.
    ///
    /// Listeners added before mount are attached at mount.
    pub fn on_complete<F>(&mut self, listener: F)
    where
        F: FnMut(Completion) + 'static,
    {
        match self.timeline.as_mut() {
            Some(timeline) => timeline.on_complete(listener),
            None => self.pending_listeners.push(Box::new(listener)),
        }
    }

    /// The current or most recently unmounted timeline
    pub fn timeline(&self) -> Option<&SplashTimeline> {
        self.timeline.as_ref()
    }
}

impl Default for SplashScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for SplashScreen {
    fn mount(&mut self, viewport: Viewport) -> Result<()> {
        // remounting starts a fresh sequence
        self.unmount();

        let mut timeline = SplashTimeline::mount(viewport, self.config.clone())?;
        for listener in self.pending_listeners.drain(..) {
            timeline.on_complete(listener);
        }
        self.timeline = Some(timeline);
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> Result<()> {
        match self.timeline.as_mut() {
            Some(timeline) => timeline.resize(viewport),
            None => Ok(()),
        }
    }

    fn advance(&mut self, dt_ms: f64) {
        if let Some(timeline) = self.timeline.as_mut() {
            timeline.advance(dt_ms);
        }
    }

    fn render(&self, scene: &mut Scene) {
        let Some(timeline) = self.timeline.as_ref().filter(|_| self.is_mounted()) else {
            return;
        };
        let frame = timeline.frame().to_scene(timeline.viewport());
        if let Some(status_bar) = frame.status_bar() {
            scene.set_status_bar(status_bar);
        }
        for command in frame.commands() {
            scene.push(command.clone());
        }
    }

    fn unmount(&mut self) {
        if let Some(timeline) = self.timeline.as_mut() {
            timeline.unmount();
        }
    }

    fn is_mounted(&self) -> bool {
        self.timeline
            .as_ref()
            .is_some_and(|t| t.state() != TimelineState::Unmounted)
    }

    fn is_complete(&self) -> bool {
        self.timeline.as_ref().is_some_and(SplashTimeline::is_complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homepal_core::DrawCommand;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_render_before_mount_is_empty() {
        let screen = SplashScreen::new();
        let mut scene = Scene::new(Viewport::new(390.0, 844.0));
        screen.render(&mut scene);
        assert!(scene.commands().is_empty());
        assert!(!screen.is_mounted());
    }

    #[test]
    fn test_pending_listener_attached_at_mount() {
        let mut screen = SplashScreen::new();
        let fired = Rc::new(Cell::new(false));
        let f = fired.clone();
        screen.on_complete(move |_| f.set(true));

        screen.mount(Viewport::new(390.0, 844.0)).unwrap();
        screen.advance(4300.0);
        assert!(fired.get());
        assert!(screen.is_complete());
    }

    #[test]
    fn test_render_draws_wordmark() {
        let mut screen = SplashScreen::new();
        screen.mount(Viewport::new(390.0, 844.0)).unwrap();
        let mut scene = Scene::new(Viewport::new(390.0, 844.0));
        screen.render(&mut scene);

        assert!(matches!(scene.commands()[0], DrawCommand::Fill { .. }));
        assert_eq!(scene.texts().collect::<Vec<_>>(), vec!["HomePal"]);
        assert!(scene.status_bar().is_some());
    }

    #[test]
    fn test_unmount_freezes_timeline() {
        let mut screen = SplashScreen::new();
        screen.mount(Viewport::new(390.0, 844.0)).unwrap();
        screen.advance(1000.0);
        let frozen = screen.timeline().unwrap().frame();

        screen.unmount();
        assert!(!screen.is_mounted());
        screen.advance(5000.0);
        assert!(!screen.is_complete());
        assert_eq!(screen.timeline().unwrap().frame(), frozen);

        let mut scene = Scene::new(Viewport::new(390.0, 844.0));
        screen.render(&mut scene);
        assert!(scene.commands().is_empty());
    }

    #[test]
    fn test_remount_restarts_sequence() {
        let mut screen = SplashScreen::new();
        screen.mount(Viewport::new(390.0, 844.0)).unwrap();
        screen.advance(4300.0);
        assert!(screen.is_complete());

        screen.mount(Viewport::new(390.0, 844.0)).unwrap();
        assert!(!screen.is_complete());
        assert_eq!(screen.timeline().unwrap().elapsed_ms(), 0.0);
    }
}
