//! Shape descriptors for the icon layers.

mod ellipse;
mod polygon;
mod rectangle;

pub use ellipse::Ellipse;
pub use polygon::Polygon;
pub use rectangle::Rectangle;

use kurbo::{Point, Rect};

/// Distance from a point to a line segment (a→b).
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = b - a;
    let pv = point - a;
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    (point - (a + seg * t)).hypot()
}

/// Common trait for all fillable shapes.
pub trait ShapeTrait {
    /// Get the bounding box in pixel coordinates.
    fn bounds(&self) -> Rect;

    /// Check if a point lies inside the filled area.
    fn contains(&self, point: Point) -> bool;
}

/// Enum wrapper for all shape types.
#[derive(Debug, Clone)]
pub enum Shape {
    Polygon(Polygon),
    Rectangle(Rectangle),
    Ellipse(Ellipse),
}

impl Shape {
    /// Short name used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Polygon(_) => "polygon",
            Shape::Rectangle(_) => "rectangle",
            Shape::Ellipse(_) => "ellipse",
        }
    }
}

impl ShapeTrait for Shape {
    fn bounds(&self) -> Rect {
        match self {
            Shape::Polygon(s) => s.bounds(),
            Shape::Rectangle(s) => s.bounds(),
            Shape::Ellipse(s) => s.bounds(),
        }
    }

    fn contains(&self, point: Point) -> bool {
        match self {
            Shape::Polygon(s) => s.contains(point),
            Shape::Rectangle(s) => s.contains(point),
            Shape::Ellipse(s) => s.contains(point),
        }
    }
}

impl From<Polygon> for Shape {
    fn from(shape: Polygon) -> Self {
        Shape::Polygon(shape)
    }
}

impl From<Rectangle> for Shape {
    fn from(shape: Rectangle) -> Self {
        Shape::Rectangle(shape)
    }
}

impl From<Ellipse> for Shape {
    fn from(shape: Ellipse) -> Self {
        Shape::Ellipse(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_to_segment_dist() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert!((point_to_segment_dist(Point::new(5.0, 3.0), a, b) - 3.0).abs() < f64::EPSILON);
        assert!((point_to_segment_dist(Point::new(13.0, 4.0), a, b) - 5.0).abs() < f64::EPSILON);
        assert!(point_to_segment_dist(Point::new(2.5, 0.0), a, b) < f64::EPSILON);
        assert!((point_to_segment_dist(Point::new(0.0, 2.0), a, a) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_enum_delegates() {
        let shape: Shape = Ellipse::circle(Point::new(10.0, 10.0), 5.0).into();
        assert_eq!(shape.kind(), "ellipse");
        assert!(shape.contains(Point::new(10.0, 10.0)));
        assert!(!shape.contains(Point::new(16.0, 10.0)));
        let bounds = shape.bounds();
        assert!((bounds.x0 - 5.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 15.0).abs() < f64::EPSILON);
    }
}
