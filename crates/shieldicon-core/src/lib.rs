//! Shield Icon Core Library
//!
//! Resolution-independent description of the shield-with-eye icon: the
//! 128-unit reference design, the scaling rule that maps it onto a pixel grid,
//! the fill palette and the shape descriptors the renderer rasterizes.

pub mod design;
pub mod error;
pub mod palette;
pub mod shapes;

pub use design::{Layer, REFERENCE_SIZE, ShieldLayout, scale_factor, scale_length, scale_point};
pub use error::{IconError, IconResult};
pub use shapes::{Ellipse, Polygon, Rectangle, Shape, ShapeTrait};
