//! HomePal Animation Runtime
//!
//! Timed, eased transitions over scalar channels, driven by a frame clock.
//!
//! # Features
//!
//! - **Easing**: quadratic, cubic and quartic curves
//! - **Schedules**: timing, delay and sequence composition
//! - **Channels**: owned animatable values with explicit cancellation
//! - **Scheduler**: ticks every channel against one shared clock
//!
//! # Example
//!
//! ```rust
//! use homepal_animation::{AnimationScheduler, Easing, Schedule};
//!
//! let mut scheduler = AnimationScheduler::new();
//! let scale = scheduler.create_channel("scale", 1.0);
//!
//! scheduler
//!     .animate(
//!         scale,
//!         &Schedule::sequence([
//!             Schedule::timing(1.3, 600, Easing::EaseOutCubic),
//!             Schedule::timing(0.16, 800, Easing::EaseInOutCubic),
//!         ])
//!         .delayed(800),
//!     )
//!     .unwrap();
//!
//! scheduler.advance(1400.0);
//! assert!((scheduler.value(scale).unwrap() - 1.3).abs() < 1e-5);
//! ```

pub mod clock;
pub mod easing;
pub mod error;
pub mod schedule;
pub mod scheduler;
pub mod value;

pub use clock::FrameClock;
pub use easing::Easing;
pub use error::{AnimationError, Result};
pub use schedule::{Plan, Schedule, Segment, Target};
pub use scheduler::{AnimationScheduler, ChannelId};
pub use value::{AnimatedValue, TickStatus};
