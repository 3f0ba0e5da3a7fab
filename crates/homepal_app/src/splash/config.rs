//! Splash choreography constants
//!
//! Every timing and geometry value of the launch animation lives here. The
//! values are fixed at build time; `SplashConfig::default()` is what the app
//! ships with.

use homepal_animation::Easing;
use homepal_core::Color;

/// Transition durations in milliseconds
#[derive(Clone, Debug, PartialEq)]
pub struct SplashDurations {
    /// Shape rises to near-center
    pub move_up: u32,
    /// Shape grows to `grow_scale`
    pub grow: u32,
    /// Shape shrinks to `shrink_scale`
    pub shrink: u32,
    /// One full turn
    pub rotate: u32,
    /// Shape slides right
    pub move_right: u32,
    /// Text slides and fades in
    pub text_appear: u32,
    /// Shape grows to cover the viewport
    pub screen_cover: u32,
    /// Shape fades to fully opaque
    pub opacity_fade: u32,
}

/// Start delays in milliseconds.
///
/// All are relative to mount except `screen_cover`, which counts from the
/// end of the shrink stage.
#[derive(Clone, Debug, PartialEq)]
pub struct SplashDelays {
    /// Before grow and rotation
    pub initial: u32,
    pub move_right: u32,
    pub text_appear: u32,
    pub screen_cover: u32,
    pub opacity_fade: u32,
}

/// Start and end values of the animated channels
#[derive(Clone, Debug, PartialEq)]
pub struct SplashValues {
    pub initial_y: f32,
    pub final_y: f32,
    pub grow_scale: f32,
    pub shrink_scale: f32,
    pub move_right_x: f32,
    pub text_initial_x: f32,
    pub initial_opacity: f32,
    /// Degrees turned during the rotation stage
    pub rotation_turn: f32,
}

/// Shape geometry and corner classification
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeConfig {
    /// Side of the square shape at scale 1, in logical pixels
    pub base_size: f32,
    pub color: Color,
    pub rectangle_radius: f32,
    pub circle_radius: f32,
    /// Below this scale the shape is drawn as a circle
    pub small_threshold: f32,
    /// Above this scale the shape is drawn as a circle
    pub large_threshold: f32,
    /// Extra coverage applied to the viewport's larger side
    pub cover_margin: f32,
}

/// Wordmark appearance
#[derive(Clone, Debug, PartialEq)]
pub struct TextConfig {
    pub content: String,
    pub font_size: f32,
    pub color: Color,
}

/// Curves used by each stage
#[derive(Clone, Debug, PartialEq)]
pub struct SplashEasings {
    pub move_up: Easing,
    pub grow: Easing,
    pub shrink: Easing,
    pub rotate: Easing,
    pub move_right: Easing,
    pub screen_cover: Easing,
    pub opacity_fade: Easing,
    pub text_appear: Easing,
}

/// Full splash configuration
#[derive(Clone, Debug, PartialEq)]
pub struct SplashConfig {
    pub durations: SplashDurations,
    pub delays: SplashDelays,
    pub values: SplashValues,
    pub easings: SplashEasings,
    pub shape: ShapeConfig,
    pub text: TextConfig,
    pub background: Color,
}

impl SplashConfig {
    /// Mount-relative time at which the shrink stage ends
    pub fn shrink_end_ms(&self) -> u64 {
        (self.delays.initial + self.durations.grow + self.durations.shrink) as u64
    }

    /// Mount-relative time at which the covering stage starts
    pub fn cover_start_ms(&self) -> u64 {
        self.shrink_end_ms() + self.delays.screen_cover as u64
    }

    /// Mount-relative time at which the whole sequence is complete
    pub fn total_duration_ms(&self) -> u64 {
        self.cover_start_ms() + self.durations.screen_cover as u64
    }
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            durations: SplashDurations {
                move_up: 600,
                grow: 600,
                shrink: 800,
                rotate: 300,
                move_right: 1000,
                text_appear: 800,
                screen_cover: 700,
                opacity_fade: 600,
            },
            delays: SplashDelays {
                initial: 800,
                move_right: 2200,
                text_appear: 2500,
                screen_cover: 1400,
                opacity_fade: 400,
            },
            values: SplashValues {
                initial_y: 100.0,
                final_y: 10.0,
                grow_scale: 1.3,
                shrink_scale: 0.16,
                move_right_x: 115.0,
                text_initial_x: -30.0,
                initial_opacity: 0.4,
                rotation_turn: 360.0,
            },
            easings: SplashEasings {
                move_up: Easing::EaseOutCubic,
                grow: Easing::EaseOutCubic,
                shrink: Easing::EaseInOutCubic,
                rotate: Easing::EaseOutCubic,
                move_right: Easing::EaseOutCubic,
                screen_cover: Easing::EaseOutCubic,
                opacity_fade: Easing::EaseOutQuad,
                text_appear: Easing::EaseOutCubic,
            },
            shape: ShapeConfig {
                base_size: 100.0,
                color: Color::WHITE,
                rectangle_radius: 10.0,
                circle_radius: 50.0,
                small_threshold: 0.5,
                large_threshold: 1.3,
                cover_margin: 1.2,
            },
            text: TextConfig {
                content: "HomePal".to_string(),
                font_size: 50.0,
                color: Color::WHITE,
            },
            background: Color::from_hex(0x1A0026),
        }
    }
}
