//! HomePal Core
//!
//! Foundational primitives shared by the animation runtime and the app:
//!
//! - **Color**: RGBA colors with hex constructors
//! - **Geometry**: viewport, point and size types
//! - **Events**: lifecycle event dispatch (mount, unmount, resize, completion)
//! - **Scene**: platform-neutral description of one rendered frame
//!
//! # Example
//!
//! ```rust
//! use homepal_core::{Color, DrawCommand, Scene, Viewport};
//!
//! let viewport = Viewport::new(390.0, 844.0);
//! let mut scene = Scene::new(viewport);
//! scene.push(DrawCommand::Fill { color: Color::from_hex(0x1A0026) });
//!
//! assert_eq!(scene.commands().len(), 1);
//! ```

pub mod color;
pub mod events;
pub mod geometry;
pub mod scene;

pub use color::Color;
pub use events::{Event, EventData, EventDispatcher, EventType};
pub use geometry::{Point, Size, Viewport};
pub use scene::{DrawCommand, FontWeight, Scene, StatusBar, StatusBarStyle, TextAlign};
