//! PNG encoding.

use crate::canvas::Canvas;
use crate::renderer::{RenderError, RenderResult};

/// Encode a canvas as an 8-bit RGBA PNG.
pub fn encode_png(canvas: &Canvas) -> RenderResult<Vec<u8>> {
    let size = canvas.size();
    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, size, size);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::Encode(e.to_string()))?;
        writer
            .write_image_data(canvas.as_raw())
            .map_err(|e| RenderError::Encode(e.to_string()))?;
        writer
            .finish()
            .map_err(|e| RenderError::Encode(e.to_string()))?;
    }
    Ok(png_data)
}
