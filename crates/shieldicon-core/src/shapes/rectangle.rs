//! Rectangle shape.

use super::ShapeTrait;
use kurbo::{Point, Rect, RoundedRect, Shape as KurboShape};

/// A rectangle with optional rounded corners.
#[derive(Debug, Clone)]
pub struct Rectangle {
    /// Top-left corner position.
    pub position: Point,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
    /// Corner radius (0 = sharp corners).
    pub corner_radius: f64,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            position,
            width,
            height,
            corner_radius: 0.0,
        }
    }

    /// Create a rectangle from two corner points.
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        let min_x = p1.x.min(p2.x);
        let min_y = p1.y.min(p2.y);
        let width = (p2.x - p1.x).abs();
        let height = (p2.y - p1.y).abs();

        Self::new(Point::new(min_x, min_y), width, height)
    }

    /// Set the corner radius.
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius.max(0.0);
        self
    }

    /// Get the rectangle as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }

    /// Get the rectangle as a kurbo RoundedRect.
    /// The radius is clamped to half of the shorter side.
    pub fn as_rounded_rect(&self) -> RoundedRect {
        let max_radius = self.width.min(self.height) / 2.0;
        RoundedRect::from_rect(self.as_rect(), self.corner_radius.min(max_radius))
    }
}

impl ShapeTrait for Rectangle {
    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    fn contains(&self, point: Point) -> bool {
        if self.width <= 0.0 || self.height <= 0.0 {
            return false;
        }
        if self.corner_radius > 0.0 {
            self.as_rounded_rect().contains(point)
        } else {
            self.as_rect().contains(point)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_from_corners() {
        let rect = Rectangle::from_corners(Point::new(100.0, 100.0), Point::new(50.0, 50.0));
        assert!((rect.position.x - 50.0).abs() < f64::EPSILON);
        assert!((rect.position.y - 50.0).abs() < f64::EPSILON);
        assert!((rect.width - 50.0).abs() < f64::EPSILON);
        assert!((rect.height - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sharp_corners() {
        let rect = Rectangle::new(Point::new(0.0, 0.0), 100.0, 100.0);
        assert!(rect.contains(Point::new(50.0, 50.0)));
        assert!(rect.contains(Point::new(0.5, 0.5)));
        assert!(!rect.contains(Point::new(150.0, 50.0)));
    }

    #[test]
    fn test_rounded_corners_cut_off() {
        let rect = Rectangle::new(Point::new(0.0, 0.0), 100.0, 100.0).with_corner_radius(20.0);
        assert!(!rect.contains(Point::new(1.0, 1.0)));
        assert!(!rect.contains(Point::new(99.0, 99.0)));
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(rect.contains(Point::new(1.0, 50.0)));
    }

    #[test]
    fn test_radius_clamped() {
        let rect = Rectangle::new(Point::new(0.0, 0.0), 10.0, 4.0).with_corner_radius(50.0);
        let rounded = rect.as_rounded_rect();
        assert!((rounded.radii().top_left - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_rectangle() {
        let rect = Rectangle::new(Point::new(5.0, 5.0), 0.0, 10.0).with_corner_radius(1.0);
        assert!(!rect.contains(Point::new(5.0, 8.0)));
    }
}
