//! Stroke representation

use smallvec::SmallVec;

use crate::color::Color;
use crate::geometry::Point;

/// Style attributes captured when a stroke begins.
///
/// `width_dp` is device-independent; conversion to pixels happens at raster
/// time via the density scale. Eraser strokes carry the canvas background
/// color rather than removing pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrokeStyle {
    pub color: Color,
    pub width_dp: f32,
    pub is_eraser: bool,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width_dp: 10.0,
            is_eraser: false,
        }
    }
}

/// One continuous pointer drag: an ordered point list plus style.
///
/// Points are appended in drawing order while the stroke is active; a
/// committed stroke is an immutable snapshot and is never empty.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stroke {
    points: SmallVec<[Point; 16]>,
    pub style: StrokeStyle,
}

impl Stroke {
    pub fn new(style: StrokeStyle) -> Self {
        Self {
            points: SmallVec::new(),
            style,
        }
    }

    /// Seed a stroke with its first point.
    pub fn starting_at(point: Point, style: StrokeStyle) -> Self {
        let mut stroke = Self::new(style);
        stroke.push(point);
        stroke
    }

    /// Append a point. Duplicates are accepted; drag events arrive at
    /// whatever granularity the input surface produces.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Stroke width in pixels at the given density scale.
    pub fn width_px(&self, density_scale: f32) -> f32 {
        self.style.width_dp * density_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut stroke = Stroke::new(StrokeStyle::default());
        stroke.push(Point::new(1.0, 1.0));
        stroke.push(Point::new(2.0, 2.0));
        stroke.push(Point::new(2.0, 2.0));
        assert_eq!(stroke.len(), 3);
        assert_eq!(stroke.points()[0], Point::new(1.0, 1.0));
        assert_eq!(stroke.points()[2], Point::new(2.0, 2.0));
    }

    #[test]
    fn test_starting_at_seeds_one_point() {
        let stroke = Stroke::starting_at(Point::new(5.0, 6.0), StrokeStyle::default());
        assert_eq!(stroke.points(), &[Point::new(5.0, 6.0)]);
    }

    #[test]
    fn test_width_px_applies_density() {
        let stroke = Stroke::new(StrokeStyle {
            width_dp: 4.0,
            ..Default::default()
        });
        assert_eq!(stroke.width_px(2.0), 8.0);
        assert_eq!(stroke.width_px(1.0), 4.0);
    }
}
