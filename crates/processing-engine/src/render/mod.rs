//! CPU canvas.
//!
//! The rasterizer consumes a `scene::DrawQueue` and paints it into a
//! `Framebuffer` with `tiny-skia`, tracking the Processing style state
//! (fill, stroke, weight, shape modes, transform) and its push/pop stacks.
//!
//! Convention:
//! - queue coordinates are logical pixels (top-left origin, +Y down)
//! - the framebuffer is physical pixels; the rasterizer's base transform
//!   carries the window scale factor

mod framebuffer;
mod geometry;
mod rasterizer;
mod style;

pub use framebuffer::Framebuffer;
pub use rasterizer::Rasterizer;
pub use style::StyleState;
