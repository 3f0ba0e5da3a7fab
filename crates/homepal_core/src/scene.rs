//! Scene description
//!
//! A `Scene` is the ordered list of draw commands for one frame, in
//! back-to-front order. It carries no GPU state; a platform renderer walks
//! the commands and paints them.

use crate::color::Color;
use crate::geometry::{Point, Size, Viewport};
use smallvec::SmallVec;

/// Text weight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Horizontal text alignment around the anchor point
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    #[default]
    Center,
    End,
}

/// Foreground style of the platform status bar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusBarStyle {
    /// Light glyphs for dark backgrounds
    #[default]
    LightContent,
    /// Dark glyphs for light backgrounds
    DarkContent,
}

/// Status bar appearance requested by a screen
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatusBar {
    pub style: StatusBarStyle,
    pub background: Color,
}

/// One paint operation
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole viewport
    Fill { color: Color },
    /// Navigation header bar across the top edge
    Header {
        title: String,
        height: f32,
        background: Color,
        tint: Color,
        weight: FontWeight,
    },
    /// Rounded rectangle rotated around its own center
    RoundedRect {
        center: Point,
        size: Size,
        corner_radius: f32,
        rotation_deg: f32,
        color: Color,
    },
    /// A single line of text anchored at `anchor`
    Text {
        content: String,
        anchor: Point,
        font_size: f32,
        weight: FontWeight,
        align: TextAlign,
        color: Color,
    },
}

/// Ordered list of draw commands for one frame
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    viewport: Viewport,
    status_bar: Option<StatusBar>,
    commands: SmallVec<[DrawCommand; 4]>,
}

impl Scene {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            status_bar: None,
            commands: SmallVec::new(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn set_status_bar(&mut self, status_bar: StatusBar) {
        self.status_bar = Some(status_bar);
    }

    pub fn status_bar(&self) -> Option<StatusBar> {
        self.status_bar
    }

    /// True if any header chrome is part of this frame
    pub fn has_header(&self) -> bool {
        self.commands
            .iter()
            .any(|c| matches!(c, DrawCommand::Header { .. }))
    }

    /// Iterate over the text content drawn in this frame
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_keep_push_order() {
        let mut scene = Scene::new(Viewport::new(100.0, 100.0));
        scene.push(DrawCommand::Fill {
            color: Color::from_hex(0x1A0026),
        });
        scene.push(DrawCommand::Text {
            content: "HomePal".into(),
            anchor: Point::ZERO,
            font_size: 50.0,
            weight: FontWeight::Bold,
            align: TextAlign::Center,
            color: Color::WHITE,
        });

        assert!(matches!(scene.commands()[0], DrawCommand::Fill { .. }));
        assert_eq!(scene.texts().collect::<Vec<_>>(), vec!["HomePal"]);
        assert!(!scene.has_header());
        assert!(scene.status_bar().is_none());
    }
}
