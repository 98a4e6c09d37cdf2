//! Icon rendering.

use crate::canvas::Canvas;
use shieldicon_core::{IconError, ShieldLayout};
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Icon(#[from] IconError),
    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Render the shield icon at `size × size` pixels.
pub fn render(size: u32) -> Result<Canvas, IconError> {
    let layout = ShieldLayout::for_size(size)?;
    render_layout(&layout)
}

/// Paint every layer of `layout` in order, bottom first.
///
/// The shield fills its polygon directly. All later layers are clipped to the
/// shield so nothing ever lands outside its outline.
pub fn render_layout(layout: &ShieldLayout) -> Result<Canvas, IconError> {
    let mut canvas = Canvas::new(layout.size)?;

    for (index, layer) in layout.layers().iter().enumerate() {
        let painted = if index == 0 {
            canvas.fill(&layer.shape, layer.color)
        } else {
            canvas.fill_clipped(&layer.shape, &layout.shield, layer.color)
        };
        log::debug!(
            "{}px: {} ({}) painted {} pixels",
            layout.size,
            layer.name,
            layer.shape.kind(),
            painted
        );
    }

    Ok(canvas)
}
