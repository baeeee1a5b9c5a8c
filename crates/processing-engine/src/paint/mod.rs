//! Color model shared between the sketch API and the rasterizer.
//!
//! Colors are stored packed as straight-alpha `0xRRGGBBAA`; the rasterizer
//! converts to the painter's premultiplied format at draw time.

pub mod color;

pub use color::{Color, ColorParseError};
