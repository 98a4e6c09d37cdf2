//! RGBA8 pixel canvas.

use image::{Rgba, RgbaImage};
use kurbo::{Point, Rect};
use peniko::Color;
use shieldicon_core::error::{IconResult, validate_size};
use shieldicon_core::palette::to_rgba8_array;
use shieldicon_core::shapes::ShapeTrait;

/// A square RGBA8 canvas, initialized to transparent black.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a transparent canvas of `size × size` pixels.
    pub fn new(size: u32) -> IconResult<Self> {
        let size = validate_size(size)?;
        Ok(Self {
            image: RgbaImage::new(size, size),
        })
    }

    /// Edge length in pixels.
    pub fn size(&self) -> u32 {
        self.image.width()
    }

    /// Get a pixel at the given coordinates.
    /// Returns None if coordinates are out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Fill every pixel whose center lies inside `shape`.
    /// Returns the number of pixels touched.
    pub fn fill<S: ShapeTrait>(&mut self, shape: &S, color: Color) -> usize {
        self.fill_where(shape.bounds(), color, |p| shape.contains(p))
    }

    /// Like [`Canvas::fill`], restricted to pixels whose center also lies inside `clip`.
    pub fn fill_clipped<S: ShapeTrait, C: ShapeTrait>(
        &mut self,
        shape: &S,
        clip: &C,
        color: Color,
    ) -> usize {
        let bounds = shape.bounds().intersect(clip.bounds());
        self.fill_where(bounds, color, |p| shape.contains(p) && clip.contains(p))
    }

    fn fill_where(&mut self, bounds: Rect, color: Color, covers: impl Fn(Point) -> bool) -> usize {
        let Some((x0, y0, x1, y1)) = self.pixel_span(bounds) else {
            return 0;
        };
        let src = to_rgba8_array(color);
        let mut painted = 0;
        for y in y0..y1 {
            for x in x0..x1 {
                let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                if covers(center) {
                    blend_over(self.image.get_pixel_mut(x, y), src);
                    painted += 1;
                }
            }
        }
        painted
    }

    /// Integer pixel range covering `bounds`, clamped to the canvas.
    fn pixel_span(&self, bounds: Rect) -> Option<(u32, u32, u32, u32)> {
        let size = self.size() as f64;
        let x0 = bounds.x0.floor().clamp(0.0, size);
        let y0 = bounds.y0.floor().clamp(0.0, size);
        let x1 = bounds.x1.ceil().clamp(0.0, size);
        let y1 = bounds.y1.ceil().clamp(0.0, size);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }

    /// Raw RGBA bytes in row-major order.
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

/// Source-over compositing of a straight-alpha color onto a pixel.
/// Formula: out_a = src_a + dst_a * (1 - src_a), channels weighted by alpha.
fn blend_over(dst: &mut Rgba<u8>, src: [u8; 4]) {
    match src[3] {
        0 => return,
        255 => {
            *dst = Rgba(src);
            return;
        }
        _ => {}
    }
    let src_a = src[3] as f32 / 255.0;
    let dst_a = dst[3] as f32 / 255.0;
    let inv_src_a = 1.0 - src_a;
    let out_a = src_a + dst_a * inv_src_a;

    let mut out = [0u8; 4];
    for i in 0..3 {
        let c = (src[i] as f32 * src_a + dst[i] as f32 * dst_a * inv_src_a) / out_a;
        out[i] = c.round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    *dst = Rgba(out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use shieldicon_core::error::IconError;
    use shieldicon_core::shapes::{Ellipse, Rectangle};

    const RED: Color = Color::from_rgba8(255, 0, 0, 255);

    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = Canvas::new(8).unwrap();
        assert_eq!(canvas.size(), 8);
        assert_eq!(canvas.as_raw().len(), 8 * 8 * 4);
        assert!(canvas.as_raw().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(Canvas::new(0), Err(IconError::InvalidSize(0)));
    }

    #[test]
    fn test_pixel_out_of_bounds() {
        let canvas = Canvas::new(4).unwrap();
        assert_eq!(canvas.pixel(3, 3), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn test_fill_uses_pixel_centers() {
        let mut canvas = Canvas::new(10).unwrap();
        let rect = Rectangle::new(Point::new(2.0, 2.0), 3.0, 2.0);
        let painted = canvas.fill(&rect, RED);
        assert_eq!(painted, 6);
        assert_eq!(canvas.pixel(2, 2), Some([255, 0, 0, 255]));
        assert_eq!(canvas.pixel(4, 3), Some([255, 0, 0, 255]));
        assert_eq!(canvas.pixel(5, 2), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(2, 4), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_fill_clamped_to_canvas() {
        let mut canvas = Canvas::new(4).unwrap();
        let rect = Rectangle::new(Point::new(-10.0, -10.0), 100.0, 100.0);
        assert_eq!(canvas.fill(&rect, RED), 16);
    }

    #[test]
    fn test_fill_clipped() {
        let mut canvas = Canvas::new(10).unwrap();
        let rect = Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0);
        let clip = Rectangle::new(Point::new(0.0, 0.0), 5.0, 10.0);
        assert_eq!(canvas.fill_clipped(&rect, &clip, RED), 50);
        assert_eq!(canvas.pixel(4, 9), Some([255, 0, 0, 255]));
        assert_eq!(canvas.pixel(5, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_translucent_over_opaque_stays_opaque() {
        let mut canvas = Canvas::new(4).unwrap();
        let rect = Rectangle::new(Point::new(0.0, 0.0), 4.0, 4.0);
        canvas.fill(&rect, Color::from_rgba8(0, 0, 255, 255));
        canvas.fill(&rect, Color::from_rgba8(255, 255, 255, 128));
        let [r, g, b, a] = canvas.pixel(1, 1).unwrap();
        assert_eq!(a, 255);
        assert_eq!(b, 255);
        assert!(r > 100 && r < 155, "red channel {r} not blended");
        assert_eq!(r, g);
    }

    #[test]
    fn test_opaque_replaces() {
        let mut canvas = Canvas::new(6).unwrap();
        let circle = Ellipse::circle(Point::new(3.0, 3.0), 2.0);
        canvas.fill(&circle, Color::from_rgba8(255, 255, 255, 100));
        canvas.fill(&circle, RED);
        assert_eq!(canvas.pixel(3, 3), Some([255, 0, 0, 255]));
    }

    #[test]
    fn test_blend_onto_transparent_keeps_source() {
        let mut px = Rgba([0, 0, 0, 0]);
        blend_over(&mut px, [255, 255, 255, 153]);
        assert_eq!(px, Rgba([255, 255, 255, 153]));
    }

    #[test]
    fn test_blend_exact_values() {
        let mut px = Rgba([74, 144, 226, 255]);
        blend_over(&mut px, [107, 182, 255, 230]);
        assert_eq!(px, Rgba([104, 178, 252, 255]));
    }

    #[test]
    fn test_empty_shape_paints_nothing() {
        let mut canvas = Canvas::new(6).unwrap();
        let dot = Ellipse::circle(Point::new(3.0, 3.0), 0.0);
        assert_eq!(canvas.fill(&dot, RED), 0);
    }
}
