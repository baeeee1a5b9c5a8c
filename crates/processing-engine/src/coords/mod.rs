//! Geometry value types shared by the draw queue and the rasterizer.
//!
//! Canonical sketch space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles are radians and grow clockwise on screen, because +Y points down.

mod corner_radii;
mod rect;
mod vec2;

pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use vec2::Vec2;
