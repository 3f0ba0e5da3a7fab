//! Per-frame splash styles and their scene layout

use super::geometry::ShapeKind;
use homepal_core::{
    Color, DrawCommand, FontWeight, Scene, Size, StatusBar, StatusBarStyle, TextAlign, Viewport,
};

/// Transform and paint of the morphing shape
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeStyle {
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale: f32,
    pub rotation_deg: f32,
    pub opacity: f32,
    pub kind: ShapeKind,
    /// Corner radius before scaling
    pub corner_radius: f32,
    pub base_size: f32,
    pub color: Color,
}

/// Transform and paint of the wordmark
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub content: String,
    pub translate_x: f32,
    pub opacity: f32,
    pub font_size: f32,
    pub color: Color,
}

/// Everything needed to draw one splash frame
#[derive(Clone, Debug, PartialEq)]
pub struct SplashFrame {
    pub background: Color,
    pub shape: ShapeStyle,
    pub text: TextStyle,
}

impl SplashFrame {
    /// Lay the frame out in `viewport`.
    ///
    /// Both the shape and the text are centered; translations are applied
    /// from the center, and the shape scales around its own center so its
    /// corner radius scales with it.
    pub fn to_scene(&self, viewport: Viewport) -> Scene {
        let center = viewport.center();
        let mut scene = Scene::new(viewport);

        scene.set_status_bar(StatusBar {
            style: StatusBarStyle::LightContent,
            background: self.background,
        });
        scene.push(DrawCommand::Fill {
            color: self.background,
        });

        let shape = &self.shape;
        scene.push(DrawCommand::RoundedRect {
            center: center.offset(shape.translate_x, shape.translate_y),
            size: Size::new(shape.base_size, shape.base_size).scaled(shape.scale),
            corner_radius: shape.corner_radius * shape.scale,
            rotation_deg: shape.rotation_deg,
            color: shape.color.with_opacity(shape.opacity),
        });

        let text = &self.text;
        scene.push(DrawCommand::Text {
            content: text.content.clone(),
            anchor: center.offset(text.translate_x, 0.0),
            font_size: text.font_size,
            weight: FontWeight::Bold,
            align: TextAlign::Center,
            color: text.color.with_opacity(text.opacity),
        });

        scene
    }
}
