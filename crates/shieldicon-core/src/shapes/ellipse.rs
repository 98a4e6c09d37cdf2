//! Ellipse shape.

use super::ShapeTrait;
use kurbo::{Point, Rect};

/// An axis-aligned ellipse.
#[derive(Debug, Clone)]
pub struct Ellipse {
    /// Center point.
    pub center: Point,
    /// Horizontal radius.
    pub radius_x: f64,
    /// Vertical radius.
    pub radius_y: f64,
}

impl Ellipse {
    /// Create a new ellipse.
    pub fn new(center: Point, radius_x: f64, radius_y: f64) -> Self {
        Self {
            center,
            radius_x,
            radius_y,
        }
    }

    /// Create a circle.
    pub fn circle(center: Point, radius: f64) -> Self {
        Self::new(center, radius, radius)
    }

    /// Create an ellipse inscribed in a bounding rectangle.
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.center(), rect.width() / 2.0, rect.height() / 2.0)
    }
}

impl ShapeTrait for Ellipse {
    fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius_x,
            self.center.y - self.radius_y,
            self.center.x + self.radius_x,
            self.center.y + self.radius_y,
        )
    }

    fn contains(&self, point: Point) -> bool {
        if self.radius_x < f64::EPSILON || self.radius_y < f64::EPSILON {
            return false;
        }
        let dx = (point.x - self.center.x) / self.radius_x;
        let dy = (point.y - self.center.y) / self.radius_y;
        dx * dx + dy * dy <= 1.0
    }
}
