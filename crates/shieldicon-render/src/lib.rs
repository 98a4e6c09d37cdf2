//! Shield Icon Render Library
//!
//! Rasterizes a [`shieldicon_core::ShieldLayout`] into an RGBA8 canvas and
//! encodes canvases as PNG.

mod canvas;
mod encode;
mod renderer;

pub use canvas::Canvas;
pub use encode::encode_png;
pub use renderer::{RenderError, RenderResult, render, render_layout};
pub use shieldicon_core::IconError;
