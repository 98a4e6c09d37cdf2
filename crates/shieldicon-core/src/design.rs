//! Reference design of the shield icon.
//!
//! All coordinates are authored for a 128×128 canvas and mapped onto the
//! target pixel grid by [`scale_point`] / [`scale_length`]. Scaled lengths are
//! floored. Horizontal positions right of the center line are floored from the
//! right edge instead, so mirrored reference points stay mirrored on every
//! even-sized canvas.

use crate::error::{IconResult, validate_size};
use crate::palette;
use crate::shapes::{Ellipse, Polygon, Rectangle, Shape};
use kurbo::{Point, Rect};
use peniko::Color;

/// Canvas size the reference coordinates are designed for.
pub const REFERENCE_SIZE: u32 = 128;

/// Shield outline: top, top-left, left, bottom, right, top-right.
pub const SHIELD_POINTS: [(f64, f64); 6] = [
    (64.0, 10.0),
    (20.0, 25.0),
    (20.0, 65.0),
    (64.0, 118.0),
    (108.0, 65.0),
    (108.0, 25.0),
];

/// Inner panel corners (top-left, bottom-right).
pub const PANEL_CORNERS: [(f64, f64); 2] = [(32.0, 35.0), (96.0, 85.0)];
pub const PANEL_RADIUS: f64 = 8.0;

/// Vertical position of the eye center.
pub const EYE_CENTER_Y: f64 = 60.0;
pub const EYE_WIDTH: f64 = 40.0;
pub const EYE_HEIGHT: f64 = 20.0;

pub const PUPIL_DIAMETER: f64 = 14.0;

/// Highlight offset up and to the left of the eye center.
pub const HIGHLIGHT_OFFSET: f64 = 6.0;
pub const HIGHLIGHT_DIAMETER: f64 = 6.0;

/// Ratio between a target size and the reference size.
pub fn scale_factor(size: u32) -> f64 {
    size as f64 / REFERENCE_SIZE as f64
}

/// Scale a reference length to the target size, floored to whole pixels.
pub fn scale_length(length: f64, size: u32) -> f64 {
    (length * scale_factor(size)).floor()
}

/// Scale a reference point to the target size.
///
/// `y` is floored. `x` is floored as a distance from the nearer vertical edge.
pub fn scale_point(point: Point, size: u32) -> Point {
    let reference = REFERENCE_SIZE as f64;
    let x = if point.x > reference / 2.0 {
        size as f64 - scale_length(reference - point.x, size)
    } else {
        scale_length(point.x, size)
    };
    Point::new(x, scale_length(point.y, size))
}

/// A shape together with the color it is filled with.
#[derive(Debug, Clone)]
pub struct Layer {
    pub name: &'static str,
    pub shape: Shape,
    pub color: Color,
}

impl Layer {
    fn new(name: &'static str, shape: impl Into<Shape>, color: Color) -> Self {
        Self {
            name,
            shape: shape.into(),
            color,
        }
    }
}

/// Scaled geometry of the icon for one pixel size.
#[derive(Debug, Clone)]
pub struct ShieldLayout {
    pub size: u32,
    pub shield: Polygon,
    pub panel: Rectangle,
    pub eye: Ellipse,
    pub pupil: Ellipse,
    pub highlight: Ellipse,
}

impl ShieldLayout {
    /// Compute the layout for a square canvas of `size` pixels.
    pub fn for_size(size: u32) -> IconResult<Self> {
        let size = validate_size(size)?;

        let shield = Polygon::new(
            SHIELD_POINTS
                .iter()
                .map(|&(x, y)| scale_point(Point::new(x, y), size))
                .collect(),
        );

        let [top_left, bottom_right] = PANEL_CORNERS;
        let panel = Rectangle::from_corners(
            scale_point(top_left.into(), size),
            scale_point(bottom_right.into(), size),
        )
        .with_corner_radius(scale_length(PANEL_RADIUS, size));

        // Same as `size / 2` for every size.
        let center_x = scale_length(REFERENCE_SIZE as f64 / 2.0, size);
        let eye_center = Point::new(center_x, scale_length(EYE_CENTER_Y, size));
        let eye = centered_ellipse(
            eye_center,
            scale_length(EYE_WIDTH, size),
            scale_length(EYE_HEIGHT, size),
        );

        let pupil_size = scale_length(PUPIL_DIAMETER, size);
        let pupil = centered_ellipse(eye_center, pupil_size, pupil_size);

        let offset = scale_length(HIGHLIGHT_OFFSET, size);
        let highlight_size = scale_length(HIGHLIGHT_DIAMETER, size);
        let highlight = centered_ellipse(
            Point::new(eye_center.x - offset, eye_center.y - offset),
            highlight_size,
            highlight_size,
        );

        Ok(Self {
            size,
            shield,
            panel,
            eye,
            pupil,
            highlight,
        })
    }

    /// Center of the eye, shared by the pupil. Lies on the canvas center line,
    /// in the middle of the eye's center row.
    pub fn eye_center(&self) -> Point {
        self.eye.center
    }

    /// Layers in paint order, bottom first.
    pub fn layers(&self) -> [Layer; 5] {
        [
            Layer::new("shield", self.shield.clone(), palette::SHIELD_BLUE),
            Layer::new("panel", self.panel.clone(), palette::PANEL_BLUE),
            Layer::new("eye", self.eye.clone(), palette::EYE_WHITE),
            Layer::new("pupil", self.pupil.clone(), palette::PUPIL_BLUE),
            Layer::new("highlight", self.highlight.clone(), palette::HIGHLIGHT_WHITE),
        ]
    }
}

/// Ellipse spanning `2 * floor(extent / 2) + 1` pixels on each axis.
///
/// Vertically the span is the pixel rows `anchor.y - half ..= anchor.y + half`.
/// Horizontally it is centered on the line `x = anchor.x`. A zero extent still
/// covers the pixels touching the anchor.
fn centered_ellipse(anchor: Point, width: f64, height: f64) -> Ellipse {
    let radius_x = (width / 2.0).floor() + 0.5;
    let radius_y = (height / 2.0).floor() + 0.5;
    Ellipse::new(Point::new(anchor.x, anchor.y + 0.5), radius_x, radius_y)
}
