//! Closed polygon shape.

use super::{ShapeTrait, point_to_segment_dist};
use kurbo::{BezPath, Point, Rect, Shape as KurboShape};

const ON_OUTLINE_TOLERANCE: f64 = 1e-9;

/// A closed polygon filled with the non-zero winding rule. Points on the
/// outline count as inside.
#[derive(Debug, Clone)]
pub struct Polygon {
    /// Vertices in drawing order.
    pub points: Vec<Point>,
    path: BezPath,
}

impl Polygon {
    /// Create a polygon from its vertices. The last vertex connects back to the first.
    pub fn new(points: Vec<Point>) -> Self {
        let mut path = BezPath::new();
        if let Some((first, rest)) = points.split_first() {
            path.move_to(*first);
            for point in rest {
                path.line_to(*point);
            }
            path.close_path();
        }
        Self { points, path }
    }

    /// Whether `point` lies on one of the polygon's edges.
    fn on_outline(&self, point: Point) -> bool {
        let closing = self.points.last().zip(self.points.first());
        self.points
            .windows(2)
            .map(|w| (w[0], w[1]))
            .chain(closing.map(|(a, b)| (*a, *b)))
            .any(|(a, b)| point_to_segment_dist(point, a, b) < ON_OUTLINE_TOLERANCE)
    }
}

impl ShapeTrait for Polygon {
    fn bounds(&self) -> Rect {
        if self.points.is_empty() {
            return Rect::ZERO;
        }
        self.path.bounding_box()
    }

    fn contains(&self, point: Point) -> bool {
        self.points.len() >= 3 && (self.path.contains(point) || self.on_outline(point))
    }
}
