//! Derived splash geometry

use super::config::ShapeConfig;
use homepal_core::Viewport;

/// Scale at which the base shape covers the whole viewport, margin included.
///
/// `max(width, height) * cover_margin / base_size`
pub fn covering_scale(viewport: Viewport, shape: &ShapeConfig) -> f32 {
    viewport.max_dimension() * shape.cover_margin / shape.base_size
}

/// Corner style of the shape at a given scale
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Slightly rounded square
    Rectangle,
    /// Fully rounded
    Circle,
}

impl ShapeKind {
    /// Classify from the live scale. Strictly below the small threshold or
    /// strictly above the large one is a circle.
    pub fn classify(scale: f32, shape: &ShapeConfig) -> Self {
        if scale < shape.small_threshold || scale > shape.large_threshold {
            ShapeKind::Circle
        } else {
            ShapeKind::Rectangle
        }
    }

    /// Corner radius for this kind, in unscaled shape pixels
    pub fn corner_radius(self, shape: &ShapeConfig) -> f32 {
        match self {
            ShapeKind::Rectangle => shape.rectangle_radius,
            ShapeKind::Circle => shape.circle_radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splash::SplashConfig;

    #[test]
    fn test_covering_scale_uses_larger_side() {
        let shape = SplashConfig::default().shape;
        let portrait = covering_scale(Viewport::new(390.0, 844.0), &shape);
        let landscape = covering_scale(Viewport::new(844.0, 390.0), &shape);
        assert!((portrait - 10.128).abs() < 1e-4);
        assert_eq!(portrait, landscape);
    }

    #[test]
    fn test_classification_thresholds() {
        let shape = SplashConfig::default().shape;
        assert_eq!(ShapeKind::classify(0.16, &shape), ShapeKind::Circle);
        assert_eq!(ShapeKind::classify(0.49, &shape), ShapeKind::Circle);
        assert_eq!(ShapeKind::classify(0.5, &shape), ShapeKind::Rectangle);
        assert_eq!(ShapeKind::classify(1.0, &shape), ShapeKind::Rectangle);
        assert_eq!(ShapeKind::classify(1.3, &shape), ShapeKind::Rectangle);
        assert_eq!(ShapeKind::classify(1.31, &shape), ShapeKind::Circle);
        assert_eq!(ShapeKind::classify(10.0, &shape), ShapeKind::Circle);
    }

    #[test]
    fn test_corner_radius() {
        let shape = SplashConfig::default().shape;
        assert_eq!(ShapeKind::Rectangle.corner_radius(&shape), 10.0);
        assert_eq!(ShapeKind::Circle.corner_radius(&shape), 50.0);
    }
}
