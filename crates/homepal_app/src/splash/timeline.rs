//! Splash timeline
//!
//! Seven independent channels, scheduled once at mount against one frame
//! clock. The scale channel runs a chained grow → shrink → cover sequence;
//! every other channel runs a single delayed transition. Finishing the
//! cover stage completes the splash.

use super::config::SplashConfig;
use super::geometry::{covering_scale, ShapeKind};
use super::style::{ShapeStyle, SplashFrame, TextStyle};
use crate::error::{ensure_viewport, Result};
use homepal_animation::{AnimationScheduler, ChannelId, Schedule};
use homepal_core::Viewport;
use serde::{Deserialize, Serialize};

/// The animated properties of the splash screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplashChannel {
    VerticalOffset,
    HorizontalOffset,
    Scale,
    Rotation,
    Opacity,
    TextOffset,
    TextOpacity,
}

impl SplashChannel {
    pub const ALL: [SplashChannel; 7] = [
        SplashChannel::VerticalOffset,
        SplashChannel::HorizontalOffset,
        SplashChannel::Scale,
        SplashChannel::Rotation,
        SplashChannel::Opacity,
        SplashChannel::TextOffset,
        SplashChannel::TextOpacity,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SplashChannel::VerticalOffset => "vertical_offset",
            SplashChannel::HorizontalOffset => "horizontal_offset",
            SplashChannel::Scale => "scale",
            SplashChannel::Rotation => "rotation",
            SplashChannel::Opacity => "opacity",
            SplashChannel::TextOffset => "text_offset",
            SplashChannel::TextOpacity => "text_opacity",
        }
    }
}

/// Lifecycle of a mounted timeline
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineState {
    Running,
    Completed,
    Unmounted,
}

/// Passed to completion listeners
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Completion {
    /// Milliseconds since mount
    pub elapsed_ms: f64,
    pub covering_scale: f32,
}

type CompletionListener = Box<dyn FnMut(Completion)>;

#[derive(Clone, Copy)]
struct Channels {
    vertical_offset: ChannelId,
    horizontal_offset: ChannelId,
    scale: ChannelId,
    rotation: ChannelId,
    opacity: ChannelId,
    text_offset: ChannelId,
    text_opacity: ChannelId,
}

impl Channels {
    fn id(&self, channel: SplashChannel) -> ChannelId {
        match channel {
            SplashChannel::VerticalOffset => self.vertical_offset,
            SplashChannel::HorizontalOffset => self.horizontal_offset,
            SplashChannel::Scale => self.scale,
            SplashChannel::Rotation => self.rotation,
            SplashChannel::Opacity => self.opacity,
            SplashChannel::TextOffset => self.text_offset,
            SplashChannel::TextOpacity => self.text_opacity,
        }
    }
}

/// The mounted splash animation
pub struct SplashTimeline {
    scheduler: AnimationScheduler,
    channels: Channels,
    config: SplashConfig,
    covering_scale: f32,
    viewport: Viewport,
    state: TimelineState,
    listeners: Vec<CompletionListener>,
}

impl SplashTimeline {
    /// Compute the covering scale for `viewport`, create every channel and
    /// install its schedule.
    pub fn mount(viewport: Viewport, config: SplashConfig) -> Result<Self> {
        ensure_viewport(viewport)?;

        let covering_scale = covering_scale(viewport, &config.shape);
        let mut scheduler = AnimationScheduler::new();
        let v = &config.values;
        let mut channel = |c: SplashChannel, initial: f32| scheduler.create_channel(c.label(), initial);
        let channels = Channels {
            vertical_offset: channel(SplashChannel::VerticalOffset, v.initial_y),
            horizontal_offset: channel(SplashChannel::HorizontalOffset, 0.0),
            scale: channel(SplashChannel::Scale, 1.0),
            rotation: channel(SplashChannel::Rotation, 0.0),
            opacity: channel(SplashChannel::Opacity, v.initial_opacity),
            text_offset: channel(SplashChannel::TextOffset, v.text_initial_x),
            text_opacity: channel(SplashChannel::TextOpacity, 0.0),
        };

        let mut timeline = Self {
            scheduler,
            channels,
            config,
            covering_scale,
            viewport,
            state: TimelineState::Running,
            listeners: Vec::new(),
        };
        timeline.install_schedules()?;

        tracing::info!(
            width = viewport.width,
            height = viewport.height,
            covering_scale,
            total_ms = timeline.config.total_duration_ms(),
            "splash timeline mounted"
        );
        Ok(timeline)
    }

    fn install_schedules(&mut self) -> Result<()> {
        let c = &self.config;
        let (d, delay, v, e) = (&c.durations, &c.delays, &c.values, &c.easings);
        let ch = self.channels;

        let schedules = [
            (
                ch.vertical_offset,
                Schedule::timing(v.final_y, d.move_up, e.move_up),
            ),
            (
                ch.scale,
                Schedule::sequence([
                    Schedule::timing(v.grow_scale, d.grow, e.grow),
                    Schedule::timing(v.shrink_scale, d.shrink, e.shrink),
                    Schedule::timing(self.covering_scale, d.screen_cover, e.screen_cover)
                        .delayed(delay.screen_cover),
                ])
                .delayed(delay.initial),
            ),
            (
                ch.rotation,
                Schedule::timing_by(v.rotation_turn, d.rotate, e.rotate).delayed(delay.initial),
            ),
            (
                ch.horizontal_offset,
                Schedule::timing(v.move_right_x, d.move_right, e.move_right)
                    .delayed(delay.move_right),
            ),
            (
                ch.opacity,
                Schedule::timing(1.0, d.opacity_fade, e.opacity_fade).delayed(delay.opacity_fade),
            ),
            (
                ch.text_offset,
                Schedule::timing(0.0, d.text_appear, e.text_appear).delayed(delay.text_appear),
            ),
            (
                ch.text_opacity,
                Schedule::timing(1.0, d.text_appear, e.text_appear).delayed(delay.text_appear),
            ),
        ];

        for (id, schedule) in &schedules {
            self.scheduler.animate(*id, schedule)?;
        }
        Ok(())
    }

    /// Advance the frame clock by `dt_ms` and sample every channel.
    ///
    /// A no-op once unmounted.
    pub fn advance(&mut self, dt_ms: f64) {
        if self.state == TimelineState::Unmounted {
            return;
        }

        let finished = self.scheduler.advance(dt_ms);
        if self.state == TimelineState::Running && finished.contains(&self.channels.scale) {
            self.complete();
        }
    }

    fn complete(&mut self) {
        self.state = TimelineState::Completed;
        let completion = Completion {
            elapsed_ms: self.scheduler.now_ms(),
            covering_scale: self.covering_scale,
        };
        tracing::info!(elapsed_ms = completion.elapsed_ms, "splash sequence complete");
        for listener in &mut self.listeners {
            listener(completion);
        }
    }

    /// Register a listener for the end of the covering stage.
    ///
    /// Listeners run at most once and are dropped on unmount. Registering
    /// after completion does not replay the event.
    pub fn on_complete<F>(&mut self, listener: F)
    where
        F: FnMut(Completion) + 'static,
    {
        if self.state == TimelineState::Unmounted {
            tracing::warn!("completion listener registered on an unmounted splash");
            return;
        }
        self.listeners.push(Box::new(listener));
    }

    /// Cancel every in-flight transition and detach listeners.
    pub fn unmount(&mut self) {
        if self.state == TimelineState::Unmounted {
            return;
        }
        let canceled = self.scheduler.cancel_all();
        self.listeners.clear();
        self.state = TimelineState::Unmounted;
        tracing::info!(
            at_ms = self.scheduler.now_ms(),
            canceled,
            "splash timeline unmounted"
        );
    }

    /// Record a new viewport for layout. The covering scale is a mount-time
    /// snapshot and is not recomputed.
    pub fn resize(&mut self, viewport: Viewport) -> Result<()> {
        ensure_viewport(viewport)?;
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            covering_scale = self.covering_scale,
            "splash viewport changed"
        );
        self.viewport = viewport;
        Ok(())
    }

    pub fn value(&self, channel: SplashChannel) -> f32 {
        // channel ids are never removed from the scheduler
        self.scheduler
            .value(self.channels.id(channel))
            .unwrap_or_default()
    }

    pub fn is_animating(&self, channel: SplashChannel) -> bool {
        self.scheduler.is_animating(self.channels.id(channel))
    }

    /// Snapshot of the styles derived from the current channel values
    pub fn frame(&self) -> SplashFrame {
        let shape_cfg = &self.config.shape;
        let scale = self.value(SplashChannel::Scale);
        let kind = ShapeKind::classify(scale, shape_cfg);

        SplashFrame {
            background: self.config.background,
            shape: ShapeStyle {
                translate_x: self.value(SplashChannel::HorizontalOffset),
                translate_y: self.value(SplashChannel::VerticalOffset),
                scale,
                rotation_deg: self.value(SplashChannel::Rotation),
                opacity: self.value(SplashChannel::Opacity),
                kind,
                corner_radius: kind.corner_radius(shape_cfg),
                base_size: shape_cfg.base_size,
                color: shape_cfg.color,
            },
            text: TextStyle {
                content: self.config.text.content.clone(),
                translate_x: self.value(SplashChannel::TextOffset),
                opacity: self.value(SplashChannel::TextOpacity),
                font_size: self.config.text.font_size,
                color: self.config.text.color,
            },
        }
    }

    pub fn covering_scale(&self) -> f32 {
        self.covering_scale
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn state(&self) -> TimelineState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == TimelineState::Completed
    }

    /// Milliseconds since mount
    pub fn elapsed_ms(&self) -> f64 {
        self.scheduler.now_ms()
    }

    pub fn config(&self) -> &SplashConfig {
        &self.config
    }

    /// True while any channel still has a transition in flight
    pub fn has_active_animations(&self) -> bool {
        self.scheduler.has_active_animations()
    }
}

impl Drop for SplashTimeline {
    fn drop(&mut self) {
        self.unmount();
    }
}
